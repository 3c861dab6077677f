//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Input errors
//! - 3xx: Config errors
//! - 6xx: Output encoding errors
//! - 9xx: Environment errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine output.
///
/// Each variant maps to a numeric code (e.g., `InputInvalid` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Input errors (1xx)
    // ========================================
    /// E101: Input failed validation (group count, empty category, duplicates)
    InputInvalid,
    /// E102: Table could not be parsed (bad weight, stray cells)
    TableParseError,
    /// E103: Input file has an unsupported or malformed structure
    DocumentParseError,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Output errors (6xx)
    // ========================================
    /// E605: A report could not be serialized
    SerializationError,

    // ========================================
    // Environment errors (9xx)
    // ========================================
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `InputInvalid` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::InputInvalid => 101,
            Self::TableParseError => 102,
            Self::DocumentParseError => 103,
            Self::ConfigInvalid => 302,
            Self::SerializationError => 605,
            Self::IoError => 906,
        }
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::InputInvalid => "Run `groupbal check <input>` to list categories. Every category needs at least one item and the group count must be positive",
            Self::TableParseError => "Check the table layout: a header row of category names, one sub-header row, then (item, weight) column pairs with integer weights",
            Self::DocumentParseError => "Ensure the document has a top-level `categories` list of {name, items: [{name, weight}]}",
            Self::ConfigInvalid => "Run `groupbal config` to see current values. Check TOML syntax in config file",
            Self::SerializationError => "This is a bug. Re-run with -vv and report the log output",
            Self::IoError => "Check file paths and permissions",
        }
    }

    /// Get the category this error belongs to.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InputInvalid | Self::TableParseError | Self::DocumentParseError => "input",
            Self::ConfigInvalid => "config",
            Self::SerializationError => "internal",
            Self::IoError => "io",
        }
    }

    /// Whether the user can fix this error by changing input or config.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError)
    }
}
