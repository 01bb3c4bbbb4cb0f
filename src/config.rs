//! Configuration file support for pacwhy.
//!
//! Provides YAML-based configuration passed with `--config`, file loading,
//! validation, and the merge of command-line options over file settings.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use pacwhy::application::dto::{OutputFormat, DEFAULT_CHAIN_SEARCH_LIMIT, DEFAULT_DB_PATH};
use pacwhy::application::read_models::DEFAULT_MAX_CHAINS;
use pacwhy::shared::error::WhyError;
use pacwhy::shared::security::{read_regular_file, MAX_CONFIG_FILE_SIZE};
use pacwhy::shared::Result;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub db_path: Option<PathBuf>,
    pub format: Option<String>,
    pub max_chains: Option<usize>,
    pub search_limit: Option<usize>,
    pub color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub format: OutputFormat,
    pub max_chains: usize,
    /// None searches exhaustively
    pub search_limit: Option<usize>,
    pub color: bool,
}

impl Settings {
    /// Merges parsed arguments over an optional config file.
    ///
    /// `color_capable` reports whether the destination can render colors;
    /// colors are never used when it cannot.
    pub fn resolve(args: &Args, config: Option<ConfigFile>, color_capable: bool) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(value)) => parse_format(value)?,
            (None, None) => OutputFormat::default(),
        };

        let search_limit = args
            .search_limit
            .or(config.search_limit)
            .unwrap_or(DEFAULT_CHAIN_SEARCH_LIMIT);

        Ok(Self {
            db_path: args
                .db_path
                .clone()
                .or(config.db_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            format,
            max_chains: args
                .max_chains
                .or(config.max_chains)
                .unwrap_or(DEFAULT_MAX_CHAINS),
            search_limit: (search_limit > 0).then_some(search_limit),
            color: color_capable && !args.no_color && config.color.unwrap_or(true),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.max_chains == Some(0) {
        return Err(WhyError::InvalidConfig {
            message: "max_chains must be at least 1".to_string(),
            hint: "Set max_chains to a positive number or remove it to use the default of 6"
                .to_string(),
        }
        .into());
    }
    if let Some(format) = config.format.as_deref() {
        parse_format(format)?;
    }
    if let Some(db_path) = config.db_path.as_deref() {
        if db_path.as_os_str().is_empty() {
            return Err(WhyError::InvalidConfig {
                message: "db_path must not be empty".to_string(),
                hint: "Point db_path at the pacman local database, e.g. /var/lib/pacman/local"
                    .to_string(),
            }
            .into());
        }
    }
    Ok(())
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    value.parse::<OutputFormat>().map_err(|message| {
        WhyError::InvalidConfig {
            message,
            hint: "Supported formats are 'text' and 'json'".to_string(),
        }
        .into()
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
