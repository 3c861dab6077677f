//! groupbal - split category-tagged weighted items into balanced groups.
//!
//! The partitioning engine lives in [`core`]: a greedy initial allocation
//! followed by same-category swaps that shrink the gap between groups.
//! [`input`] reads paired-column tables and JSON/YAML documents, and [`cli`]
//! wires both into the `groupbal` binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod test_utils;

pub use error::{GbError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
