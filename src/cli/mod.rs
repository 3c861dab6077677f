//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod formatters;
pub mod output;

/// groupbal - Split category-tagged weighted items into K balanced groups
#[derive(Parser, Debug)]
#[command(name = "groupbal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output and JSON logs for scripts.
    /// Same as --output-format=json, plus structured logging on stderr.
    #[arg(long, global = true, hide = true)]
    pub robot: bool,

    /// Output format (human, json, jsonl, plain, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/groupbal/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output format chosen on the command line, if any.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → Explicit format
    /// 3. `--machine` → JSON format (shorthand)
    /// 4. `--robot` → JSON format
    #[must_use]
    pub fn explicit_output_format(&self) -> Option<OutputFormat> {
        if self.plain {
            return Some(OutputFormat::Plain);
        }

        if let Some(fmt) = self.output_format {
            return Some(fmt);
        }

        if self.machine || self.robot {
            return Some(OutputFormat::Json);
        }

        None
    }

    /// Effective output format from flags alone, defaulting to Human.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.explicit_output_format().unwrap_or_default()
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Partition a table or document into balanced groups
    Split(commands::split::SplitArgs),

    /// Validate input and summarize it without partitioning
    Check(commands::check::CheckArgs),

    /// Show the effective configuration
    Config(commands::config::ConfigArgs),
}
