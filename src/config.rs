//! Configuration file support for dyn-inventory.
//!
//! Provides YAML-based configuration through `dyn-inventory.config.yml`
//! files, including data structures, file loading, validation, and merging
//! with command-line overrides.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::formatters::{DEFAULT_INDENT, MAX_INDENT};
use crate::application::use_cases::QueryOptions;
use crate::inventory::services::GroupNamePolicy;
use crate::shared::error::InventoryError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dyn-inventory.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Inventory file; relative paths are resolved against the config file's directory
    pub inventory: Option<PathBuf>,
    pub indent: Option<usize>,
    pub exclude_hosts: Option<Vec<String>>,
    pub sanitize_group_names: Option<bool>,
    pub replace_dash_in_groups: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let Some(inventory) = config.inventory.take() {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.inventory = Some(resolve_relative(base, inventory));
    }

    tracing::debug!(path = %path.display(), "loaded config file");
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

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(indent) = config.indent {
        if indent > MAX_INDENT {
            return Err(InventoryError::Validation {
                message: format!(
                    "Invalid config: indent must be at most {} (got {}).",
                    MAX_INDENT, indent
                ),
            }
            .into());
        }
    }

    if let Some(ref patterns) = config.exclude_hosts {
        if let Some(i) = patterns.iter().position(|p| p.trim().is_empty()) {
            return Err(InventoryError::Validation {
                message: format!(
                    "Invalid config: exclude_hosts[{}] must not be empty.\n\n\
                     💡 Hint: Use host names or wildcard patterns such as \"*.rds.amazonaws.com\".",
                    i
                ),
            }
            .into());
        }
    }

    if config.replace_dash_in_groups.is_some() && config.sanitize_group_names != Some(true) {
        tracing::warn!("replace_dash_in_groups has no effect unless sanitize_group_names is true");
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Values given on the command line (or through their environment variables)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub inventory: Option<PathBuf>,
    pub indent: Option<usize>,
    pub exclude_hosts: Vec<String>,
}

/// Effective settings after merging CLI overrides over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub inventory: Option<PathBuf>,
    pub indent: usize,
    pub query: QueryOptions,
}

impl Settings {
    /// Scalar CLI values replace config values; exclusion patterns are merged
    pub fn merge(config: ConfigFile, cli: CliOverrides) -> Self {
        let mut exclude_patterns = config.exclude_hosts.unwrap_or_default();
        for pattern in cli.exclude_hosts {
            if !exclude_patterns.contains(&pattern) {
                exclude_patterns.push(pattern);
            }
        }

        let group_name_policy = if config.sanitize_group_names.unwrap_or(false) {
            GroupNamePolicy::sanitizing(config.replace_dash_in_groups.unwrap_or(true))
        } else {
            GroupNamePolicy::verbatim()
        };

        Self {
            inventory: cli.inventory.or(config.inventory),
            indent: cli.indent.or(config.indent).unwrap_or(DEFAULT_INDENT),
            query: QueryOptions {
                exclude_patterns,
                group_name_policy,
            },
        }
    }
}
