//! Configuration types and parsing for milepost.yml

use crate::error::{CoreError, CoreResult};
use crate::policy::AppliedPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "milepost.yml";

/// Main project configuration from milepost.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Application database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Migration ledger storage configuration
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// How failed ledger entries affect the pending set
    #[serde(default)]
    pub failed_policy: AppliedPolicy,
}

/// Application database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to the DuckDB file, or `:memory:`
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Ledger storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerConfig {
    /// Path to the ledger DuckDB file, or `:memory:`
    #[serde(default = "default_ledger_path")]
    pub path: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: default_ledger_path(),
        }
    }
}

fn default_database_path() -> String {
    "data/store.duckdb".to_string()
}

fn default_ledger_path() -> String {
    "data/ledger.duckdb".to_string()
}

impl Config {
    /// Load configuration from a specific file path.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
            message: format!("{}: {e}", path.display()),
        })
    }

    /// Load `milepost.yml` from a project directory.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        Self::load(&dir.join(CONFIG_FILE))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
