//! Configuration module
//!
//! Configuration hierarchy:
//! 1. Environment variables (`EXPORT_LATTICE_*`)
//! 2. Explicit config file
//! 3. User config (`<config dir>/export-lattice/config.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    default_registry_path, load_or_default, load_with_warnings, with_env_overrides, ConfigError,
    ConfigWarning, REGISTRY_PATH_ENV,
};
pub use types::{CombinationsConfig, LatticeConfig, ReduceConfig, RegistryConfig};
