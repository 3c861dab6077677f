//! Output formatters for CLI commands
//!
//! Text renderings of core reports for the Human and Plain formats. JSON,
//! JSONL and TSV go through [`crate::cli::output`] directly.

mod groups;
mod summary;

pub use groups::GroupListing;
pub use summary::render_summary;
