//! Configuration file support for deplister.
//!
//! Provides YAML-based configuration through `deplister.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line arguments.

use anyhow::{bail, Context};
use deplister::application::dto::OutputFormat;
use deplister::application::factories::CollectorFactory;
use deplister::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "deplister.config.yml";

/// Upper bound for `command_retries`
const MAX_COMMAND_RETRIES: u32 = 10;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub pretty: Option<bool>,
    pub exclude_packages: Option<Vec<String>>,
    pub command_retries: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging the config file and CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub pretty: bool,
    pub exclude_patterns: Vec<String>,
    pub command_retries: u32,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
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

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merge CLI arguments over the config file.
///
/// Scalar options given on the command line win. Exclusion patterns from
/// both sources are combined.
pub fn merge_settings(args: &Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let format = match (args.requested_format(), config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => name.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };

    let mut exclude_patterns = config.exclude_packages.unwrap_or_default();
    for pattern in &args.exclude {
        if !exclude_patterns.contains(pattern) {
            exclude_patterns.push(pattern.clone());
        }
    }

    Ok(Settings {
        format,
        pretty: args.pretty || config.pretty.unwrap_or(false),
        exclude_patterns,
        command_retries: args
            .retries
            .or(config.command_retries)
            .unwrap_or(CollectorFactory::DEFAULT_COMMAND_RETRIES),
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!(
                "Invalid config: format: {}\n\n💡 Hint: Use 'json' or 'text'.",
                e
            );
        }
    }

    if let Some(ref patterns) = config.exclude_packages {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_packages[{}] must not be empty.\n\n\
                     💡 Hint: Remove the entry or give it a package name pattern (e.g., \"@types/*\").",
                    i
                );
            }
        }
    }

    if let Some(retries) = config.command_retries {
        if retries == 0 || retries > MAX_COMMAND_RETRIES {
            bail!(
                "Invalid config: command_retries must be between 1 and {} (got {}).",
                MAX_COMMAND_RETRIES,
                retries
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
