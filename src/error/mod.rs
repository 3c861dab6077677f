//! Error handling for groupbal.
//!
//! This module provides:
//! - [`GbError`]: The main error enum for all groupbal operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;
mod suggestions;

use std::io;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// Main error type for groupbal operations.
#[derive(Error, Debug)]
pub enum GbError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Table error on line {line}: {message}")]
    Table { line: u64, message: String },

    #[error("Invalid document: {0}")]
    Document(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl GbError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Csv(_) | Self::Table { .. } => ErrorCode::TableParseError,
            Self::InvalidInput(_) => ErrorCode::InputInvalid,
            Self::Document(_) => ErrorCode::DocumentParseError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::Table { line, message } => {
                Some(serde_json::json!({ "line": line, "reason": message }))
            }
            Self::InvalidInput(reason) => Some(serde_json::json!({ "reason": reason })),
            _ => None,
        }
    }

    /// Convert this error to a structured error with a context-aware suggestion.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        let code = self.code();
        let context = self.context();

        StructuredError {
            code,
            numeric_code: code.numeric(),
            message: self.to_string(),
            suggestion: suggest_for_error(code, context.as_ref()),
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }
}

/// A structured error with machine-readable code, suggestion, and context.
///
/// Emitted in machine output mode so scripts can branch on `code` instead of
/// parsing the message.
#[derive(Debug, Clone, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "INPUT_INVALID")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "input", "config")
    pub category: String,
}

/// Result type alias using `GbError`.
pub type Result<T> = std::result::Result<T, GbError>;
