//! Merger
//!
//! Folds the data of a source combination into a destination combination,
//! producing a self-contained view of both:
//! - Icons: set union of hashes
//! - Items, machines, recipes: matched by business identifier; entities known
//!   to both sides are merged field by field with the source winning wherever
//!   it carries data

mod icon;
mod identified;

use std::sync::Arc;

use crate::domain::entities::{Combination, Item, Machine, Recipe};
use crate::domain::ports::{EntityRegistry, RegistryError};
use crate::domain::value_objects::{ContentHash, EntityKind};

pub(crate) use identified::fetch_entity;
pub use identified::MergeFields;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("{kind} {hash} not found in registry")]
    MissingEntity { hash: ContentHash, kind: EntityKind },

    #[error("expected {expected} at {hash}, found {found}")]
    UnexpectedKind {
        hash: ContentHash,
        expected: EntityKind,
        found: EntityKind,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Applies every per-kind merger to a destination/source pair.
#[derive(Clone)]
pub struct MergerManager {
    registry: Arc<dyn EntityRegistry>,
}

impl MergerManager {
    pub fn new(registry: Arc<dyn EntityRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<dyn EntityRegistry> {
        &self.registry
    }

    /// Merge `source` into `destination`.
    ///
    /// `destination` is only replaced once every kind merged successfully.
    pub fn merge(
        &self,
        destination: &mut Combination,
        source: &Combination,
    ) -> Result<(), MergeError> {
        let merged = self.merged(destination, source)?;
        *destination = merged;
        Ok(())
    }

    /// Like [`MergerManager::merge`], returning the merged view instead.
    pub fn merged(
        &self,
        destination: &Combination,
        source: &Combination,
    ) -> Result<Combination, MergeError> {
        let mut merged = destination.clone();
        for kind in EntityKind::ALL {
            self.merge_kind(kind, &mut merged, source)?;
        }
        Ok(merged)
    }

    fn merge_kind(
        &self,
        kind: EntityKind,
        destination: &mut Combination,
        source: &Combination,
    ) -> Result<(), MergeError> {
        let registry = self.registry.as_ref();
        match kind {
            EntityKind::Icon => {
                icon::merge_icons(destination, source);
                Ok(())
            }
            EntityKind::Item => identified::merge_identified::<Item>(registry, destination, source),
            EntityKind::Machine => {
                identified::merge_identified::<Machine>(registry, destination, source)
            }
            EntityKind::Recipe => {
                identified::merge_identified::<Recipe>(registry, destination, source)
            }
        }
    }
}
