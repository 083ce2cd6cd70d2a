//! Scenario: a configured run storing entities in an on-disk registry.

use std::fs;
use std::sync::Arc;

use export_lattice::config::LatticeConfig;
use export_lattice::domain::ports::{CombinationStore, EntityRegistry};
use export_lattice::domain::value_objects::EntityKind;
use export_lattice::infrastructure::{
    FsEntityRegistry, InMemoryCombinationStore, InMemoryEntityRegistry, InMemoryPackageStore,
    StaticDependencyResolver,
};
use export_lattice::{Combination, GenerateCombinationsUseCase, ReduceCombinationUseCase};
use tempfile::tempdir;

use crate::common::*;

struct ConfiguredRun {
    config: LatticeConfig,
    registry: Arc<FsEntityRegistry>,
    reduced_registry: Arc<InMemoryEntityRegistry>,
    packages: Arc<InMemoryPackageStore>,
    raw: Arc<InMemoryCombinationStore>,
    reduced: Arc<InMemoryCombinationStore>,
}

impl ConfiguredRun {
    fn new(config: LatticeConfig) -> Self {
        let packages = Arc::new(InMemoryPackageStore::with_packages([
            export_lattice::Package::new("base", 1),
            export_lattice::Package::new("a", 2),
        ]));
        let raw = Arc::new(InMemoryCombinationStore::new());
        let resolver = Arc::new(
            StaticDependencyResolver::new()
                .with_package("base", &[], &["a"])
                .with_package("a", &[], &[]),
        );

        GenerateCombinationsUseCase::from_config(packages.clone(), raw.clone(), resolver, &config)
            .execute("base")
            .unwrap();

        Self {
            registry: Arc::new(FsEntityRegistry::from_config(&config)),
            reduced_registry: Arc::new(InMemoryEntityRegistry::new()),
            config,
            packages,
            raw,
            reduced: Arc::new(InMemoryCombinationStore::new()),
        }
    }

    fn combination(&self, name: &str) -> Combination {
        self.raw
            .all()
            .into_iter()
            .find(|c| c.name == name)
            .unwrap()
    }

    fn fill_items(&self, name: &str, entities: &[export_lattice::Entity]) {
        let hashes = entities
            .iter()
            .map(|e| self.registry.set(e).unwrap())
            .collect();
        let combination = self.combination(name).with_hashes(EntityKind::Item, hashes);
        self.raw.set(&combination).unwrap();
    }

    fn use_case(&self) -> ReduceCombinationUseCase {
        ReduceCombinationUseCase::from_config(
            self.packages.clone(),
            self.raw.clone(),
            self.reduced.clone(),
            self.registry.clone(),
            self.reduced_registry.clone(),
            &self.config,
        )
    }
}

fn load_config(body: &str, registry_dir: &std::path::Path) -> LatticeConfig {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let body = format!(
        "{body}\n[registry]\npath = {:?}\n",
        registry_dir.display().to_string()
    );
    fs::write(&path, body).unwrap();
    LatticeConfig::load(&path).unwrap()
}

#[test]
fn scenario_configured_separator_names_combinations() {
    let registry_dir = tempdir().unwrap();
    let config = load_config("[combinations]\nname_separator = \"+\"\n", registry_dir.path());

    let run = ConfiguredRun::new(config);

    let mut names: Vec<String> = run.raw.all().into_iter().map(|c| c.name).collect();
    names.sort();
    assert_eq!(names, vec!["base", "base+a"]);
}

#[test]
fn scenario_entities_persist_across_registry_instances() {
    let registry_dir = tempdir().unwrap();
    let config = load_config("", registry_dir.path());
    let run = ConfiguredRun::new(config.clone());
    run.fill_items("base", &[item("iron-plate", "Iron plate")]);
    let hash = run.combination("base").item_hashes[0].clone();

    let reopened = FsEntityRegistry::from_config(&config);

    assert_eq!(reopened.root(), registry_dir.path());
    assert_eq!(
        reopened.get(&hash).unwrap(),
        Some(item("iron-plate", "Iron plate"))
    );
}

#[test]
fn scenario_disabled_field_reduction_keeps_changed_entities_whole() {
    let registry_dir = tempdir().unwrap();
    let config = load_config("[reduce]\ntranslations = false\n", registry_dir.path());
    let run = ConfiguredRun::new(config);
    run.fill_items("base", &[item_with_labels("iron-plate", &[("en", "Iron plate")])]);
    let translated = item_with_labels("iron-plate", &[("en", "Iron plate"), ("de", "Eisenplatte")]);
    run.fill_items("base-a", &[translated.clone()]);

    let outcome = run.use_case().execute(&run.combination("base-a").id).unwrap();

    let export_lattice::ReduceOutcome::Persisted(reduced) = outcome else {
        panic!("base-a adds a translation and must be kept");
    };
    assert_eq!(reduced.item_hashes.len(), 1);
    assert_eq!(
        run.reduced_registry.get(&reduced.item_hashes[0]).unwrap(),
        Some(translated)
    );
}

#[test]
fn scenario_field_reduction_keeps_only_new_locales() {
    let registry_dir = tempdir().unwrap();
    let config = load_config("", registry_dir.path());
    let run = ConfiguredRun::new(config);
    run.fill_items("base", &[item_with_labels("iron-plate", &[("en", "Iron plate")])]);
    run.fill_items(
        "base-a",
        &[item_with_labels("iron-plate", &[("en", "Iron plate"), ("de", "Eisenplatte")])],
    );

    let outcome = run.use_case().execute(&run.combination("base-a").id).unwrap();

    let export_lattice::ReduceOutcome::Persisted(reduced) = outcome else {
        panic!("base-a adds a translation and must be kept");
    };
    let expected = item_with_labels("iron-plate", &[("de", "Eisenplatte")]);
    assert_eq!(
        run.reduced_registry.get(&reduced.item_hashes[0]).unwrap(),
        Some(expected)
    );
    assert_eq!(run.registry.get(&reduced.item_hashes[0]).unwrap(), None);
}
