//! Structured JSON/YAML input.
//!
//! ```yaml
//! categories:
//!   - name: North
//!     items:
//!       - { name: n1, weight: 120 }
//! ```

use serde::Deserialize;

use crate::core::Category;
use crate::error::{GbError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryDocument {
    categories: Vec<Category>,
}

pub fn parse_json(text: &str) -> Result<Vec<Category>> {
    let doc: CategoryDocument = serde_json::from_str(text)
        .map_err(|err| GbError::Document(format!("parse JSON: {err}")))?;
    Ok(doc.categories)
}

pub fn parse_yaml(text: &str) -> Result<Vec<Category>> {
    let doc: CategoryDocument = serde_yaml::from_str(text)
        .map_err(|err| GbError::Document(format!("parse YAML: {err}")))?;
    Ok(doc.categories)
}
