//! The jsdecl.json configuration file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "jsdecl.json";

/// Report format for extracted declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}', expected 'text' or 'json'", other)),
        }
    }
}

/// The jsdecl.json file structure. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Patterns of files to analyze, relative to the config file.
    pub include: Vec<String>,
    /// Path fragments and patterns to skip.
    pub exclude: Vec<String>,
    /// File extensions, with their leading dot, that count as sources.
    pub extensions: Vec<String>,
    pub format: OutputFormat,
    /// Treat anomalies as failures when computing the exit status.
    pub fail_on_anomalies: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include: vec!["**/*".to_string()],
            exclude: vec!["node_modules".to_string()],
            extensions: [".js", ".mjs", ".cjs", ".jsx"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            format: OutputFormat::Text,
            fail_on_anomalies: false,
        }
    }
}

impl Config {
    /// Render the configuration as the pretty JSON written by `--init`.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a jsdecl.json file from a string.
pub fn parse_config(content: &str) -> Result<Config, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a jsdecl.json file from a path.
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded configuration from {}", path.display());
    Ok(config)
}
