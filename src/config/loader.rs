//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use super::types::LatticeConfig;

/// Environment variable overriding the registry location
pub const REGISTRY_PATH_ENV: &str = "EXPORT_LATTICE_REGISTRY_PATH";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read config {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Non-fatal configuration warning, e.g. an unknown key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(LatticeConfig, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);
    let config: LatticeConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the given file, then the user config, then defaults.
///
/// Never fails: unreadable or invalid files are skipped with a warning log.
pub fn load_or_default(path: Option<&Path>) -> LatticeConfig {
    let user_config = dirs::config_dir().map(|d| d.join("export-lattice/config.toml"));
    let candidates = path.map(Path::to_path_buf).into_iter().chain(user_config);

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!(
                        key = %warning.key,
                        file = %warning.file.display(),
                        suggestion = warning.suggestion.as_deref().unwrap_or(""),
                        "unknown config key"
                    );
                }
                return with_env_overrides(config);
            }
            Err(e) => tracing::warn!(error = %e, "ignoring config file"),
        }
    }

    with_env_overrides(LatticeConfig::default())
}

/// Apply environment variable overrides
pub fn with_env_overrides(mut config: LatticeConfig) -> LatticeConfig {
    if let Ok(path) = std::env::var(REGISTRY_PATH_ENV) {
        config.registry.path = Some(PathBuf::from(path));
    }
    config
}

/// `$EXPORT_LATTICE_REGISTRY_PATH`, else `<data dir>/export-lattice/registry`.
pub fn default_registry_path() -> PathBuf {
    if let Ok(path) = std::env::var(REGISTRY_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs::data_dir()
        .map(|d| d.join("export-lattice/registry"))
        .unwrap_or_else(|| PathBuf::from(".export-lattice/registry"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "combinations",
        "name_separator",
        "reduce",
        "translations",
        "registry",
        "path",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
