//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints that
//! name the offending line or point at the failed input check.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
///
/// Falls back to [`ErrorCode::suggestion`] when the context carries nothing
/// more specific.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::TableParseError => suggest_table_parse_error(context),
        ErrorCode::InputInvalid => suggest_input_invalid(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_table_parse_error(context: Option<&Value>) -> String {
    let Some(line) = context
        .and_then(|c| c.get("line"))
        .and_then(Value::as_u64)
    else {
        return ErrorCode::TableParseError.suggestion().to_string();
    };

    format!(
        "Fix line {line} of the table. Weights must be non-negative integers and every (item, weight) pair must sit under a category column"
    )
}

fn suggest_input_invalid(context: Option<&Value>) -> String {
    let reason = context
        .and_then(|c| c.get("reason"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    if reason.starts_with("group count") {
        "Pass a positive -k/--groups, or set partition.groups in groupbal.toml".to_string()
    } else if reason.ends_with("has no items") {
        "Give every category at least one (item, weight) pair, or drop its column".to_string()
    } else if reason.starts_with("duplicate category") {
        "Rename one of the categories; names must be unique".to_string()
    } else {
        ErrorCode::InputInvalid.suggestion().to_string()
    }
}
