//! In-memory adapters
//!
//! `RwLock`-guarded maps implementing every storage port. Suitable for
//! embedding and for tests; nothing is persisted.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::entities::{Combination, Entity, Package};
use crate::domain::ports::{
    CombinationStore, EntityRegistry, PackageStore, RegistryError, StoreError,
};
use crate::domain::value_objects::{CombinationId, ContentHash};

use super::canonical::hash_entity;

fn registry_poisoned<T>(_: PoisonError<T>) -> RegistryError {
    RegistryError::AccessError {
        message: "registry lock poisoned".to_string(),
    }
}

fn store_poisoned<T>(_: PoisonError<T>) -> StoreError {
    StoreError::AccessError {
        message: "store lock poisoned".to_string(),
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEntityRegistry {
    entries: RwLock<HashMap<ContentHash, Entity>>,
}

impl InMemoryEntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, hash: &ContentHash) -> bool {
        self.entries
            .read()
            .map(|e| e.contains_key(hash))
            .unwrap_or(false)
    }
}

impl EntityRegistry for InMemoryEntityRegistry {
    fn get(&self, hash: &ContentHash) -> Result<Option<Entity>, RegistryError> {
        let entries = self.entries.read().map_err(registry_poisoned)?;
        Ok(entries.get(hash).cloned())
    }

    fn set(&self, entity: &Entity) -> Result<ContentHash, RegistryError> {
        let hash = hash_entity(entity)?;
        let mut entries = self.entries.write().map_err(registry_poisoned)?;
        entries
            .entry(hash.clone())
            .or_insert_with(|| entity.clone());
        Ok(hash)
    }

    fn remove(&self, hash: &ContentHash) -> Result<(), RegistryError> {
        let mut entries = self.entries.write().map_err(registry_poisoned)?;
        entries.remove(hash);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPackageStore {
    packages: RwLock<HashMap<String, Package>>,
}

impl InMemoryPackageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_packages(packages: impl IntoIterator<Item = Package>) -> Self {
        Self {
            packages: RwLock::new(packages.into_iter().map(|p| (p.name.clone(), p)).collect()),
        }
    }
}

impl PackageStore for InMemoryPackageStore {
    fn get(&self, name: &str) -> Result<Option<Package>, StoreError> {
        let packages = self.packages.read().map_err(store_poisoned)?;
        Ok(packages.get(name).cloned())
    }

    fn set(&self, package: &Package) -> Result<(), StoreError> {
        let mut packages = self.packages.write().map_err(store_poisoned)?;
        packages.insert(package.name.clone(), package.clone());
        Ok(())
    }

    fn all_names(&self) -> Result<Vec<String>, StoreError> {
        let packages = self.packages.read().map_err(store_poisoned)?;
        let mut names: Vec<String> = packages.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCombinationStore {
    combinations: RwLock<HashMap<CombinationId, Combination>>,
}

impl InMemoryCombinationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.combinations.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every stored combination, sorted by name.
    pub fn all(&self) -> Vec<Combination> {
        let mut all: Vec<Combination> = self
            .combinations
            .read()
            .map(|c| c.values().cloned().collect())
            .unwrap_or_default();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}

impl CombinationStore for InMemoryCombinationStore {
    fn get(&self, id: &CombinationId) -> Result<Option<Combination>, StoreError> {
        let combinations = self.combinations.read().map_err(store_poisoned)?;
        Ok(combinations.get(id).cloned())
    }

    fn set(&self, combination: &Combination) -> Result<(), StoreError> {
        let mut combinations = self.combinations.write().map_err(store_poisoned)?;
        combinations.insert(combination.id.clone(), combination.clone());
        Ok(())
    }

    fn remove(&self, id: &CombinationId) -> Result<(), StoreError> {
        let mut combinations = self.combinations.write().map_err(store_poisoned)?;
        combinations.remove(id);
        Ok(())
    }
}
