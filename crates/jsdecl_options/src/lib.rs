//! jsdecl_options: jsdecl.json parsing and source file discovery.
//!
//! Parses jsdecl.json files into a [`Config`] and finds the source files its
//! include/exclude patterns select.

mod config;
mod discover;

pub use config::{parse_config, parse_config_file, Config, ConfigError, OutputFormat, CONFIG_FILE_NAME};
pub use discover::discover_source_files;
