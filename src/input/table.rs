//! Paired-column table reader.
//!
//! Layout:
//!
//! ```text
//! North,,South,,
//! Block,Q,Block,Q,
//! n1,120,s1,60,
//! n2,80,,,
//! ```
//!
//! The first row names the categories (blank cells are dropped, so each name
//! usually sits above its item column). The next `header_rows - 1` rows are
//! skipped. Every data row is read as consecutive `(item, weight)` pairs, pair
//! `j` belonging to category `j`. A pair is kept only when both cells are
//! non-blank.

use std::io::Read;

use tracing::{debug, trace};

use crate::core::Category;
use crate::error::{GbError, Result};

/// Table layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub delimiter: u8,
    /// Rows before the data, the category row included.
    pub header_rows: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header_rows: 2,
        }
    }
}

/// Parse a table held in memory.
pub fn parse_table(text: &str, options: TableOptions) -> Result<Vec<Category>> {
    read_table(text.as_bytes(), options)
}

/// Read a table from any reader.
pub fn read_table<R: Read>(reader: R, options: TableOptions) -> Result<Vec<Category>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);
    let mut records = reader.records();

    let Some(header) = records.next().transpose()? else {
        return Ok(Vec::new());
    };
    let mut categories: Vec<Category> = header
        .iter()
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(Category::new)
        .collect();
    debug!(categories = categories.len(), "read category header");

    for _ in 1..options.header_rows.max(1) {
        if records.next().transpose()?.is_none() {
            return Ok(categories);
        }
    }

    for record in records {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let cells: Vec<&str> = record.iter().map(str::trim).collect();

        for (pair_index, pair) in cells.chunks(2).enumerate() {
            let name = pair[0];
            let weight = pair.get(1).copied().unwrap_or("");
            if name.is_empty() || weight.is_empty() {
                continue;
            }

            let weight = parse_weight(weight).ok_or_else(|| GbError::Table {
                line,
                message: format!("weight '{weight}' of item '{name}' is not a non-negative integer"),
            })?;
            let category = categories.get_mut(pair_index).ok_or_else(|| GbError::Table {
                line,
                message: format!(
                    "item '{name}' sits in column pair {} but only {} categories are named",
                    pair_index + 1,
                    header_len(&header)
                ),
            })?;

            trace!(line, item = name, weight, category = %category.name, "read item");
            category.push(name, weight);
        }
    }

    Ok(categories)
}

fn parse_weight(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok()
}

fn header_len(header: &csv::StringRecord) -> usize {
    header.iter().filter(|cell| !cell.trim().is_empty()).count()
}
