//! Configuration file support for gosum-osv.
//!
//! Provides YAML-based configuration through `gosum-osv.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;
use crate::vuln_matching::policies::MatchPolicy;

const CONFIG_FILENAME: &str = "gosum-osv.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Local advisory corpus file, relative to the project directory.
    pub advisory_file: Option<String>,
    pub trusted_database: Option<String>,
    pub default_severity: Option<String>,
    pub default_source: Option<String>,
    pub ignore_ids: Option<Vec<IgnoreId>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A vulnerability ID to drop from the report.
#[derive(Debug, Deserialize)]
pub struct IgnoreId {
    pub id: String,
    pub reason: Option<String>,
}

impl ConfigFile {
    /// Builds the match policy, applying configured overrides on top of
    /// the defaults.
    pub fn match_policy(&self) -> MatchPolicy {
        let defaults = MatchPolicy::default();
        MatchPolicy::new(
            self.default_source
                .clone()
                .unwrap_or(defaults.default_source),
            self.default_severity
                .clone()
                .unwrap_or(defaults.default_severity),
            self.trusted_database
                .clone()
                .unwrap_or(defaults.trusted_database),
        )
    }

    pub fn ignored_ids(&self) -> Vec<String> {
        self.ignore_ids
            .as_ref()
            .map(|entries| entries.iter().map(|entry| entry.id.clone()).collect())
            .unwrap_or_default()
    }
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

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref ignore_ids) = config.ignore_ids {
        for (i, entry) in ignore_ids.iter().enumerate() {
            if entry.id.trim().is_empty() {
                bail!(
                    "Invalid config: ignore_ids[{}].id must not be empty.\n\n\
                     💡 Hint: Each ignore_ids entry must have a non-empty 'id' field (e.g., \"GHSA-h395-qcrw-5vmq\").",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
