//! Shared state handed to every command.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    /// Explicit config file, when one was named on the command line.
    pub config_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub robot_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    /// Load layered configuration and settle the output format.
    ///
    /// Command-line flags beat `output.format` from config or environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;

        let output_format = match cli.explicit_output_format() {
            Some(format) => format,
            None => config.output.output_format()?,
        };
        if !output_format.use_colors() {
            console::set_colors_enabled(false);
        }
        debug!(?output_format, "resolved output format");

        Ok(Self {
            config,
            config_path: cli.config.clone(),
            output_format,
            robot_mode: output_format == OutputFormat::Json,
            verbosity: cli.verbose,
        })
    }
}
