//! Configuration file support for the CLI.
//!
//! Loads CLI configuration from TOML files.

use std::path::Path;

use anyhow::{Context, Result};
use rowcursor_core::TableConfig;
use serde::{Deserialize, Serialize};

use crate::commands::Operation;
use crate::formatter::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Operation to run when none is given on the command line.
    #[serde(default = "default_operation")]
    pub operation: Operation,

    /// Output format when none is given on the command line.
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Table rendering options.
    #[serde(default)]
    pub table: TableConfig,
}

fn default_operation() -> Operation {
    Operation::Table
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            operation: default_operation(),
            format: default_format(),
            table: TableConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a file and validates it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.table.validate()?;
        Ok(config)
    }
}
