//! Identified entity merger
//!
//! One algorithm for every kind with a business identifier. The kinds only
//! differ in how two versions of the same entity combine (`MergeFields`).

use indexmap::IndexMap;

use super::MergeError;
use crate::domain::entities::{Combination, IdentifiedEntity, Item, Machine, Recipe};
use crate::domain::ports::EntityRegistry;
use crate::domain::value_objects::ContentHash;

/// Field rules for combining two versions of one entity.
pub trait MergeFields: IdentifiedEntity {
    /// A new value: `self` overlaid with whatever `source` provides.
    fn merged_with(&self, source: &Self) -> Self;
}

impl MergeFields for Item {
    fn merged_with(&self, source: &Self) -> Self {
        Item {
            translations: self.translations.merged_with(&source.translations),
            icon_hash: source.icon_hash.clone().or_else(|| self.icon_hash.clone()),
            ..self.clone()
        }
    }
}

impl MergeFields for Machine {
    fn merged_with(&self, source: &Self) -> Self {
        Machine {
            translations: self.translations.merged_with(&source.translations),
            icon_hash: source.icon_hash.clone().or_else(|| self.icon_hash.clone()),
            data: if source.data.is_empty() {
                self.data.clone()
            } else {
                source.data.clone()
            },
            ..self.clone()
        }
    }
}

impl MergeFields for Recipe {
    fn merged_with(&self, source: &Self) -> Self {
        Recipe {
            translations: self.translations.merged_with(&source.translations),
            icon_hash: source.icon_hash.clone().or_else(|| self.icon_hash.clone()),
            data: if source.data.is_empty() {
                self.data.clone()
            } else {
                source.data.clone()
            },
            ..self.clone()
        }
    }
}

/// Resolve `hash` and project it onto the kind `E`.
pub(crate) fn fetch_entity<E: IdentifiedEntity>(
    registry: &dyn EntityRegistry,
    hash: &ContentHash,
) -> Result<E, MergeError> {
    let entity = registry
        .get(hash)?
        .ok_or_else(|| MergeError::MissingEntity {
            hash: hash.clone(),
            kind: E::KIND,
        })?;
    E::from_entity(entity).map_err(|other| MergeError::UnexpectedKind {
        hash: hash.clone(),
        expected: E::KIND,
        found: other.kind(),
    })
}

enum Slot<E> {
    /// Unchanged entity, already stored under the hash.
    Stored(ContentHash, E),
    /// Result of a field merge, not yet written to the registry.
    Merged(E),
}

impl<E> Slot<E> {
    fn entity(&self) -> &E {
        match self {
            Slot::Stored(_, entity) | Slot::Merged(entity) => entity,
        }
    }
}

pub(super) fn merge_identified<E: MergeFields>(
    registry: &dyn EntityRegistry,
    destination: &mut Combination,
    source: &Combination,
) -> Result<(), MergeError> {
    let mut slots: IndexMap<E::Id, Slot<E>> = IndexMap::new();
    for hash in destination.hashes(E::KIND) {
        let entity: E = fetch_entity(registry, hash)?;
        slots.insert(entity.identifier(), Slot::Stored(hash.clone(), entity));
    }

    for hash in source.hashes(E::KIND) {
        let entity: E = fetch_entity(registry, hash)?;
        let id = entity.identifier();
        match slots.get_mut(&id) {
            Some(Slot::Stored(existing, _)) if existing == hash => {}
            Some(slot) => {
                tracing::debug!(kind = %E::KIND, id = ?id, "merging entity");
                let merged = slot.entity().merged_with(&entity);
                *slot = Slot::Merged(merged);
            }
            None => {
                slots.insert(id, Slot::Stored(hash.clone(), entity));
            }
        }
    }

    let mut hashes = Vec::with_capacity(slots.len());
    for (_, slot) in slots {
        match slot {
            Slot::Stored(hash, _) => hashes.push(hash),
            Slot::Merged(entity) => hashes.push(registry.set(&entity.into_entity())?),
        }
    }
    destination.set_hashes(E::KIND, hashes);
    Ok(())
}
