//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_NAME_SEPARATOR;

use super::loader::{self, ConfigError};

/// Combination generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationsConfig {
    #[serde(default = "default_name_separator")]
    pub name_separator: String,
}

impl Default for CombinationsConfig {
    fn default() -> Self {
        Self {
            name_separator: default_name_separator(),
        }
    }
}

fn default_name_separator() -> String {
    DEFAULT_NAME_SEPARATOR.to_string()
}

/// Reduction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceConfig {
    /// Reduce identified entities field by field. When disabled, only
    /// entities with a hash identical to the baseline's are dropped.
    #[serde(default = "default_true")]
    pub translations: bool,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self { translations: true }
    }
}

fn default_true() -> bool {
    true
}

/// Registry location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeConfig {
    #[serde(default)]
    pub combinations: CombinationsConfig,

    #[serde(default)]
    pub reduce: ReduceConfig,

    #[serde(default)]
    pub registry: RegistryConfig,
}

impl LatticeConfig {
    /// Load configuration from a TOML file, discarding warnings
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Configured registry root, or the default location
    pub fn registry_path(&self) -> PathBuf {
        self.registry
            .path
            .clone()
            .unwrap_or_else(loader::default_registry_path)
    }
}
