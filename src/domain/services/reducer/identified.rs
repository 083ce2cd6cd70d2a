//! Identified entity reducer
//!
//! An entity stays in the reduced combination when the baseline has nothing
//! under its identifier. When it does, the entity is stripped of every field
//! the baseline already provides and is dropped if nothing remains.

use std::collections::{HashMap, HashSet};

use super::ReducerError;
use crate::domain::entities::{Combination, Item, Machine, MachineData, Recipe, RecipeData};
use crate::domain::ports::EntityRegistry;
use crate::domain::services::merger::{fetch_entity, MergeFields};
use crate::domain::value_objects::ContentHash;

/// Field rules for stripping inherited data from an entity. Mirrors
/// `MergeFields`: merging the result back onto the parent restores the
/// original view.
pub trait ReduceFields: MergeFields {
    fn reduced_against(&self, parent: &Self) -> Self;

    /// Whether only the identifier is left.
    fn is_redundant(&self) -> bool;
}

fn reduce_icon(own: &Option<ContentHash>, parent: &Option<ContentHash>) -> Option<ContentHash> {
    if own == parent {
        None
    } else {
        own.clone()
    }
}

impl ReduceFields for Item {
    fn reduced_against(&self, parent: &Self) -> Self {
        Item {
            translations: self.translations.reduced_against(&parent.translations),
            icon_hash: reduce_icon(&self.icon_hash, &parent.icon_hash),
            ..self.clone()
        }
    }

    fn is_redundant(&self) -> bool {
        !self.translations.has_content() && self.icon_hash.is_none()
    }
}

impl ReduceFields for Machine {
    fn reduced_against(&self, parent: &Self) -> Self {
        Machine {
            translations: self.translations.reduced_against(&parent.translations),
            icon_hash: reduce_icon(&self.icon_hash, &parent.icon_hash),
            data: if self.data == parent.data {
                MachineData::default()
            } else {
                self.data.clone()
            },
            ..self.clone()
        }
    }

    fn is_redundant(&self) -> bool {
        !self.translations.has_content() && self.icon_hash.is_none() && self.data.is_empty()
    }
}

impl ReduceFields for Recipe {
    fn reduced_against(&self, parent: &Self) -> Self {
        Recipe {
            translations: self.translations.reduced_against(&parent.translations),
            icon_hash: reduce_icon(&self.icon_hash, &parent.icon_hash),
            data: if self.data == parent.data {
                RecipeData::default()
            } else {
                self.data.clone()
            },
            ..self.clone()
        }
    }

    fn is_redundant(&self) -> bool {
        !self.translations.has_content() && self.icon_hash.is_none() && self.data.is_empty()
    }
}

/// Entities are read from `registry`; field-reduced entities are written to
/// `output`.
pub(super) fn reduce_identified<E: ReduceFields>(
    registry: &dyn EntityRegistry,
    output: &dyn EntityRegistry,
    combination: &mut Combination,
    baseline: &Combination,
    reduce_fields: bool,
) -> Result<(), ReducerError> {
    let inherited: HashSet<&ContentHash> = baseline.hashes(E::KIND).iter().collect();

    let mut parents: HashMap<E::Id, E> = HashMap::new();
    if reduce_fields {
        for hash in baseline.hashes(E::KIND) {
            let parent: E = fetch_entity(registry, hash)?;
            parents.insert(parent.identifier(), parent);
        }
    }

    let mut kept = Vec::new();
    for hash in combination.hashes(E::KIND) {
        if inherited.contains(hash) {
            continue;
        }
        if !reduce_fields {
            kept.push(hash.clone());
            continue;
        }

        let entity: E = fetch_entity(registry, hash)?;
        let id = entity.identifier();
        match parents.get(&id) {
            None => kept.push(hash.clone()),
            Some(parent) => {
                let reduced = entity.reduced_against(parent);
                if reduced.is_redundant() {
                    tracing::debug!(kind = %E::KIND, id = ?id, "dropping entity identical to baseline");
                    continue;
                }
                kept.push(output.set(&reduced.into_entity())?);
            }
        }
    }

    combination.set_hashes(E::KIND, kept);
    Ok(())
}
