//! Configuration contracts

use std::fs;

use export_lattice::config::{load_or_default, load_with_warnings, LatticeConfig};
use tempfile::tempdir;

/// CONTRACT: a broken config file never prevents a run.
#[test]
fn contract_invalid_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "this is = = not toml").unwrap();

    let config = load_or_default(Some(&path));

    assert_eq!(config.combinations, LatticeConfig::default().combinations);
    assert_eq!(config.reduce, LatticeConfig::default().reduce);
}

/// CONTRACT: unknown keys are reported, never rejected.
#[test]
fn contract_unknown_keys_are_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[combinations]\nname_seperator = \"+\"\n\n[colors]\ntheme = \"dark\"\n",
    )
    .unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.combinations.name_separator, "-");
    let keys: Vec<&str> = warnings.iter().map(|w| w.key.as_str()).collect();
    assert!(keys.contains(&"name_seperator"));
    let typo = warnings.iter().find(|w| w.key == "name_seperator").unwrap();
    assert_eq!(typo.suggestion.as_deref(), Some("name_separator"));
}
