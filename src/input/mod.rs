//! Input loaders: paired-column tables and JSON/YAML documents.
//!
//! Loaders only shape the data; validity (group count, empty or duplicate
//! categories) is checked by [`crate::core::validate`].

pub mod document;
pub mod table;

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::Category;
use crate::error::Result;

pub use table::TableOptions;

/// Supported input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Paired-column CSV table
    Table,
    /// JSON document with a `categories` list
    Json,
    /// YAML document with a `categories` list
    Yaml,
}

impl InputFormat {
    /// Guess the format from a file extension; anything unknown is a table.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Table,
        }
    }
}

/// Load categories from `path`, or from stdin when `path` is `-`.
pub fn load_categories(
    path: &Path,
    format: Option<InputFormat>,
    options: TableOptions,
) -> Result<Vec<Category>> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));

    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    let categories = parse_categories(&text, format, options)?;
    info!(
        path = %path.display(),
        format = ?format,
        categories = categories.len(),
        "loaded input"
    );
    Ok(categories)
}

/// Parse categories from text in the given format.
pub fn parse_categories(
    text: &str,
    format: InputFormat,
    options: TableOptions,
) -> Result<Vec<Category>> {
    match format {
        InputFormat::Table => table::parse_table(text, options),
        InputFormat::Json => document::parse_json(text),
        InputFormat::Yaml => document::parse_yaml(text),
    }
}
