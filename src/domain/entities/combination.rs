//! Combination entity
//!
//! A combination is one exported view: a main package, the packages loaded
//! alongside it, and the hashes of every entity the export produced.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CombinationId, ContentHash, EntityKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub id: CombinationId,
    pub name: String,
    pub main_package_name: String,
    /// Mandatory closure of the main package plus the chosen optional packages.
    pub loaded_package_names: Vec<String>,
    /// The chosen optional packages, in the order they were appended.
    #[serde(default)]
    pub loaded_optional_package_names: Vec<String>,
    #[serde(default)]
    pub icon_hashes: Vec<ContentHash>,
    #[serde(default)]
    pub item_hashes: Vec<ContentHash>,
    #[serde(default)]
    pub machine_hashes: Vec<ContentHash>,
    #[serde(default)]
    pub recipe_hashes: Vec<ContentHash>,
}

impl Combination {
    /// Create a combination with empty hash lists.
    ///
    /// Duplicate package names are dropped, keeping the first occurrence.
    pub fn new(
        name: impl Into<String>,
        main_package_name: impl Into<String>,
        loaded_package_names: Vec<String>,
        loaded_optional_package_names: Vec<String>,
    ) -> Self {
        let loaded_package_names = dedup(loaded_package_names);
        Self {
            id: CombinationId::from_package_names(&loaded_package_names),
            name: name.into(),
            main_package_name: main_package_name.into(),
            loaded_package_names,
            loaded_optional_package_names: dedup(loaded_optional_package_names),
            icon_hashes: Vec::new(),
            item_hashes: Vec::new(),
            machine_hashes: Vec::new(),
            recipe_hashes: Vec::new(),
        }
    }

    pub fn hashes(&self, kind: EntityKind) -> &[ContentHash] {
        match kind {
            EntityKind::Icon => &self.icon_hashes,
            EntityKind::Item => &self.item_hashes,
            EntityKind::Machine => &self.machine_hashes,
            EntityKind::Recipe => &self.recipe_hashes,
        }
    }

    pub fn set_hashes(&mut self, kind: EntityKind, hashes: Vec<ContentHash>) {
        match kind {
            EntityKind::Icon => self.icon_hashes = hashes,
            EntityKind::Item => self.item_hashes = hashes,
            EntityKind::Machine => self.machine_hashes = hashes,
            EntityKind::Recipe => self.recipe_hashes = hashes,
        }
    }

    pub fn with_hashes(mut self, kind: EntityKind, hashes: Vec<ContentHash>) -> Self {
        self.set_hashes(kind, hashes);
        self
    }

    /// Whether every hash list is empty.
    pub fn has_no_data(&self) -> bool {
        EntityKind::ALL
            .iter()
            .all(|kind| self.hashes(*kind).is_empty())
    }

    /// A combination is degenerate when it loads at least one optional
    /// package yet contributes no data. The base combination never is.
    pub fn is_degenerate(&self) -> bool {
        !self.loaded_optional_package_names.is_empty() && self.has_no_data()
    }

    pub fn loads(&self, package_name: &str) -> bool {
        self.loaded_package_names.iter().any(|n| n == package_name)
    }

    /// Whether every package loaded by `self` is also loaded by `other`.
    pub fn is_subset_of(&self, other: &Combination) -> bool {
        let loaded: HashSet<&str> = other
            .loaded_package_names
            .iter()
            .map(String::as_str)
            .collect();
        self.loaded_package_names
            .iter()
            .all(|n| loaded.contains(n.as_str()))
    }
}

fn dedup(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|n| seen.insert(n.clone()))
        .collect()
}
