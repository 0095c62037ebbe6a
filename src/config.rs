//! Configuration file support for depend-info.
//!
//! Provides YAML-based configuration through `depend-info.config.yml` files,
//! including the file schema, loading, and validation into typed settings.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::GraphFormat;
use crate::dependency_analysis::policies::FeatureLinkPolicy;
use crate::shared::error::DependInfoError;
use crate::shared::security::{read_checked, MAX_CONFIG_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depend-info.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub ports: Option<PathBuf>,
    pub format: Option<String>,
    pub feature_links: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Validated settings from a config file. Every field is optional so CLI
/// flags and built-in defaults can fill the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub ports: Option<PathBuf>,
    pub format: Option<GraphFormat>,
    pub feature_links: Option<FeatureLinkPolicy>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<Settings> {
    let content = read_checked(path, "config file", MAX_CONFIG_SIZE).with_context(|| {
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

    warn_unknown_fields(&config);
    validate_config(config, path)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<Settings>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let settings = load_config_from_path(&config_path)?;
    Ok(Some(settings))
}

/// Parse the string-typed fields of the file into their domain values.
fn validate_config(config: ConfigFile, path: &Path) -> Result<Settings> {
    let format = config
        .format
        .as_deref()
        .map(GraphFormat::from_str)
        .transpose()
        .map_err(|details| DependInfoError::ConfigError {
            path: path.to_path_buf(),
            details,
            hint: "Use one of: format: text | dot | dgml".to_string(),
        })?;

    let feature_links = config
        .feature_links
        .as_deref()
        .map(FeatureLinkPolicy::from_str)
        .transpose()
        .map_err(|details| DependInfoError::ConfigError {
            path: path.to_path_buf(),
            details,
            hint: "Use one of: feature_links: unfiltered | always | never".to_string(),
        })?;

    if let Some(ports) = &config.ports {
        if ports.as_os_str().is_empty() {
            return Err(DependInfoError::ConfigError {
                path: path.to_path_buf(),
                details: "ports must not be empty".to_string(),
                hint: "Set ports to the directory holding one subdirectory per port".to_string(),
            }
            .into());
        }
    }

    Ok(Settings {
        ports: config.ports,
        format,
        feature_links,
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
