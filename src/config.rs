use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::output::OutputFormat;
use crate::error::{GbError, Result};
use crate::input::TableOptions;

/// File name looked up in the project directory.
pub const PROJECT_CONFIG_FILE: &str = "groupbal.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub partition: PartitionConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load defaults, then the explicit file (or `GROUPBAL_CONFIG`), or else
    /// the global and project files in that order, then env overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        Self::load_with(explicit_path, project_root, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with a custom variable lookup.
    pub fn load_with(
        explicit_path: Option<&Path>,
        project_root: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| lookup("GROUPBAL_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?
                .ok_or_else(|| GbError::Config(format!("config {} not found", path.display())))?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Path of the per-user config file, if the platform has a config dir.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("groupbal/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| GbError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| GbError::Config(format!("parse config {}: {err}", path.display())))?;
        debug!(path = %path.display(), "loaded config layer");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.partition {
            self.partition.merge(patch);
        }
        if let Some(patch) = patch.input {
            self.input.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = parse_var::<usize>(&lookup, "GROUPBAL_GROUPS")? {
            self.partition.groups = value;
        }
        if let Some(value) = lookup("GROUPBAL_BALANCE") {
            self.partition.balance = parse_bool(&value);
        }
        if let Some(value) = lookup("GROUPBAL_UNTIL_STABLE") {
            self.partition.until_stable = parse_bool(&value);
        }
        if let Some(value) = lookup("GROUPBAL_DELIMITER") {
            self.input.delimiter = value;
        }
        if let Some(value) = parse_var::<usize>(&lookup, "GROUPBAL_HEADER_ROWS")? {
            self.input.header_rows = value;
        }
        if let Some(value) = lookup("GROUPBAL_OUTPUT_FORMAT") {
            self.output.format = value;
        }
        if let Some(value) = lookup("GROUPBAL_GROUP_UNIT") {
            self.output.group_unit = value;
        }
        if let Some(value) = lookup("GROUPBAL_ITEM_UNIT") {
            self.output.item_unit = value;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.input.table_options()?;
        self.output.output_format()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Number of groups when `--groups` is not given.
    #[serde(default = "default_groups")]
    pub groups: usize,
    /// Run the swap balancer after allocation.
    #[serde(default = "default_true")]
    pub balance: bool,
    /// Repeat balancing passes until one performs no swap.
    #[serde(default)]
    pub until_stable: bool,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            groups: default_groups(),
            balance: true,
            until_stable: false,
        }
    }
}

impl PartitionConfig {
    fn merge(&mut self, patch: PartitionPatch) {
        if let Some(value) = patch.groups {
            self.groups = value;
        }
        if let Some(value) = patch.balance {
            self.balance = value;
        }
        if let Some(value) = patch.until_stable {
            self.until_stable = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Single-byte column separator for tables.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Rows before the data, the category row included.
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            header_rows: default_header_rows(),
        }
    }
}

impl InputConfig {
    fn merge(&mut self, patch: InputPatch) {
        if let Some(value) = patch.delimiter {
            self.delimiter = value;
        }
        if let Some(value) = patch.header_rows {
            self.header_rows = value;
        }
    }

    /// Table reader options, checking that the delimiter is one ASCII byte
    /// and that there is at least the category row.
    pub fn table_options(&self) -> Result<TableOptions> {
        let delimiter = match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => *byte,
            _ if self.delimiter == "\\t" => b'\t',
            _ => {
                return Err(GbError::Config(format!(
                    "input.delimiter must be a single ASCII character, got '{}'",
                    self.delimiter
                )));
            }
        };
        if self.header_rows == 0 {
            return Err(GbError::Config(
                "input.header_rows must be at least 1 (the category row)".to_string(),
            ));
        }
        Ok(TableOptions {
            delimiter,
            header_rows: self.header_rows,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: human, json, jsonl, plain or tsv.
    #[serde(default = "default_format")]
    pub format: String,
    /// Unit label printed after group sums.
    #[serde(default = "default_group_unit")]
    pub group_unit: String,
    /// Unit label printed after item weights.
    #[serde(default = "default_item_unit")]
    pub item_unit: String,
    /// List balancer swaps in human output.
    #[serde(default)]
    pub show_swaps: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            group_unit: default_group_unit(),
            item_unit: default_item_unit(),
            show_swaps: false,
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.group_unit {
            self.group_unit = value;
        }
        if let Some(value) = patch.item_unit {
            self.item_unit = value;
        }
        if let Some(value) = patch.show_swaps {
            self.show_swaps = value;
        }
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.format, true).map_err(|_| {
            GbError::Config(format!(
                "output.format must be one of human, json, jsonl, plain, tsv; got '{}'",
                self.format
            ))
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    partition: Option<PartitionPatch>,
    input: Option<InputPatch>,
    output: Option<OutputPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct PartitionPatch {
    groups: Option<usize>,
    balance: Option<bool>,
    until_stable: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct InputPatch {
    delimiter: Option<String>,
    header_rows: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputPatch {
    format: Option<String>,
    group_unit: Option<String>,
    item_unit: Option<String>,
    show_swaps: Option<bool>,
}

const fn default_groups() -> usize {
    4
}

const fn default_true() -> bool {
    true
}

fn default_delimiter() -> String {
    ",".to_string()
}

const fn default_header_rows() -> usize {
    2
}

fn default_format() -> String {
    "human".to_string()
}

fn default_group_unit() -> String {
    "m³/h".to_string()
}

fn default_item_unit() -> String {
    "l/h".to_string()
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| GbError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}
