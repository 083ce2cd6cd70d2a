//! In-memory lattice environment.

use std::sync::Arc;

use export_lattice::config::LatticeConfig;
use export_lattice::domain::entities::{Combination, Entity, Package};
use export_lattice::domain::ports::{CombinationStore, EntityRegistry, PackageStore};
use export_lattice::domain::services::{MergerManager, ParentFinder, ReducerManager};
use export_lattice::domain::value_objects::{ContentHash, EntityKind};
use export_lattice::infrastructure::{
    InMemoryCombinationStore, InMemoryEntityRegistry, InMemoryPackageStore,
    StaticDependencyResolver,
};
use export_lattice::{
    GenerateCombinationsUseCase, GenerateResult, ReduceCombinationUseCase, ReducePackageUseCase,
};

pub struct LatticeEnv {
    pub registry: Arc<InMemoryEntityRegistry>,
    pub reduced_registry: Arc<InMemoryEntityRegistry>,
    pub packages: Arc<InMemoryPackageStore>,
    pub reduced_packages: Arc<InMemoryPackageStore>,
    pub raw: Arc<InMemoryCombinationStore>,
    pub reduced: Arc<InMemoryCombinationStore>,
    pub resolver: Arc<StaticDependencyResolver>,
}

#[derive(Default)]
pub struct LatticeEnvBuilder {
    packages: Vec<Package>,
    resolver: StaticDependencyResolver,
}

impl LatticeEnvBuilder {
    /// Declare a package with its mandatory and optional dependencies.
    pub fn package(mut self, name: &str, order: u32, mandatory: &[&str], optional: &[&str]) -> Self {
        self.packages.push(Package::new(name, order));
        self.resolver = self.resolver.with_package(name, mandatory, optional);
        self
    }

    /// A base package at order 1 with optional packages `a`, `b`, ... at
    /// orders 2, 3, ...
    pub fn base_with_optionals(self, count: usize) -> Self {
        let names = optional_names(count);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut builder = self.package("base", 1, &[], &refs);
        for (index, name) in names.iter().enumerate() {
            builder = builder.package(name, index as u32 + 2, &[], &[]);
        }
        builder
    }

    pub fn build(self) -> LatticeEnv {
        LatticeEnv {
            registry: Arc::new(InMemoryEntityRegistry::new()),
            reduced_registry: Arc::new(InMemoryEntityRegistry::new()),
            packages: Arc::new(InMemoryPackageStore::with_packages(self.packages)),
            reduced_packages: Arc::new(InMemoryPackageStore::new()),
            raw: Arc::new(InMemoryCombinationStore::new()),
            reduced: Arc::new(InMemoryCombinationStore::new()),
            resolver: Arc::new(self.resolver),
        }
    }
}

/// `a`, `b`, `c`, ... for the first `count` letters.
pub fn optional_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| ((b'a' + i as u8) as char).to_string())
        .collect()
}

impl LatticeEnv {
    pub fn builder() -> LatticeEnvBuilder {
        LatticeEnvBuilder::default()
    }

    pub fn generate(&self, package: &str) -> GenerateResult {
        GenerateCombinationsUseCase::new(
            self.packages.clone(),
            self.raw.clone(),
            self.resolver.clone(),
        )
        .execute(package)
        .unwrap()
    }

    pub fn combination(&self, name: &str) -> Combination {
        self.raw
            .all()
            .into_iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("combination '{}' not generated", name))
    }

    /// Store `entities` and make them the `kind` hashes of combination `name`.
    pub fn fill(&self, name: &str, kind: EntityKind, entities: &[Entity]) -> Vec<ContentHash> {
        let hashes: Vec<ContentHash> = entities
            .iter()
            .map(|e| self.registry.set(e).unwrap())
            .collect();
        let mut combination = self.combination(name);
        combination.set_hashes(kind, hashes.clone());
        self.raw.set(&combination).unwrap();
        hashes
    }

    pub fn merger(&self) -> MergerManager {
        MergerManager::new(self.registry.clone())
    }

    pub fn parent_finder(&self) -> ParentFinder {
        ParentFinder::new(self.packages.clone(), self.raw.clone(), self.merger())
    }

    pub fn reducer(&self) -> ReducerManager {
        ReducerManager::new(self.registry.clone(), self.parent_finder())
    }

    /// Reduces `raw` into `reduced`, publishing entities into `reduced_registry`.
    pub fn reduce_use_case(&self) -> ReduceCombinationUseCase {
        ReduceCombinationUseCase::from_config(
            self.packages.clone(),
            self.raw.clone(),
            self.reduced.clone(),
            self.registry.clone(),
            self.reduced_registry.clone(),
            &LatticeConfig::default(),
        )
    }

    pub fn reduce_package_use_case(&self) -> ReducePackageUseCase {
        ReducePackageUseCase::new(
            self.packages.clone(),
            self.reduced_packages.clone(),
            self.reduced.clone(),
            self.registry.clone(),
            self.reduced_registry.clone(),
        )
    }

    pub fn entity(&self, hash: &ContentHash) -> Entity {
        self.registry.get(hash).unwrap().unwrap()
    }

    pub fn reduced_entity(&self, hash: &ContentHash) -> Entity {
        self.reduced_registry.get(hash).unwrap().unwrap()
    }

    pub fn package(&self, name: &str) -> Package {
        self.packages.get(name).unwrap().unwrap()
    }
}
