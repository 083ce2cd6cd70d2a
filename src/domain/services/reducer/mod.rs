//! Reducer
//!
//! The inverse of the merger: strips from a combination everything its merged
//! ancestor baseline already provides, so only the delta gets persisted.
//! Package-level reducers trim the combination ids a package keeps and carry
//! its thumbnail over into the reduced registry.

mod icon;
mod identified;
mod package;
mod thumbnail;

use std::sync::Arc;

use crate::domain::entities::{Combination, Item, Machine, Recipe};
use crate::domain::ports::{EntityRegistry, RegistryError, StoreError};
use crate::domain::value_objects::{ContentHash, EntityKind};

use super::merger::MergeError;
use super::parent_finder::{ParentFinder, ParentFinderError};

pub use identified::ReduceFields;
pub use package::PackageReducer;
pub use thumbnail::ThumbnailReducer;

#[derive(Debug, thiserror::Error)]
pub enum ReducerError {
    #[error("thumbnail {hash} of package '{package}' cannot be resolved")]
    MissingThumbnail { package: String, hash: ContentHash },

    #[error("thumbnail {hash} of package '{package}' is a {found}, not an icon")]
    InvalidThumbnail {
        package: String,
        hash: ContentHash,
        found: EntityKind,
    },

    #[error("registry stored {expected} as {found}")]
    HashMismatch {
        expected: ContentHash,
        found: ContentHash,
    },

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ParentFinderError> for ReducerError {
    fn from(err: ParentFinderError) -> Self {
        match err {
            ParentFinderError::Store(e) => ReducerError::Store(e),
            ParentFinderError::Merge(e) => ReducerError::Merge(e),
        }
    }
}

/// Applies every per-kind reducer to a combination.
///
/// Entities are read from `registry`. With an output registry set, every
/// entity a reduced combination references also ends up there; otherwise
/// reduced entities are written back into `registry`.
pub struct ReducerManager {
    registry: Arc<dyn EntityRegistry>,
    output: Option<Arc<dyn EntityRegistry>>,
    parent_finder: ParentFinder,
    reduce_fields: bool,
}

impl ReducerManager {
    pub fn new(registry: Arc<dyn EntityRegistry>, parent_finder: ParentFinder) -> Self {
        Self {
            registry,
            output: None,
            parent_finder,
            reduce_fields: true,
        }
    }

    /// Write reduced entities, and copy kept ones, into `output`.
    pub fn with_output_registry(mut self, output: Arc<dyn EntityRegistry>) -> Self {
        self.output = Some(output);
        self
    }

    /// When disabled, identified entities are only dropped when their hash
    /// matches the baseline exactly.
    pub fn with_field_reduction(mut self, enabled: bool) -> Self {
        self.reduce_fields = enabled;
        self
    }

    pub fn parent_finder(&self) -> &ParentFinder {
        &self.parent_finder
    }

    /// Reduce `combination` against its merged ancestor baseline.
    pub fn reduce(&self, combination: &Combination) -> Result<Combination, ReducerError> {
        let baseline = self.parent_finder.merged_ancestor_baseline(combination)?;
        self.reduce_against(combination, &baseline)
    }

    /// Reduce `combination` against an explicit baseline.
    pub fn reduce_against(
        &self,
        combination: &Combination,
        baseline: &Combination,
    ) -> Result<Combination, ReducerError> {
        let mut reduced = combination.clone();
        for kind in EntityKind::ALL {
            self.reduce_kind(kind, &mut reduced, baseline)?;
            self.publish(kind, &reduced)?;
        }

        tracing::debug!(
            combination = %combination.name,
            icons = reduced.icon_hashes.len(),
            items = reduced.item_hashes.len(),
            machines = reduced.machine_hashes.len(),
            recipes = reduced.recipe_hashes.len(),
            "reduced combination"
        );
        Ok(reduced)
    }

    /// Copy every `kind` entity of `reduced` missing from the output registry.
    fn publish(&self, kind: EntityKind, reduced: &Combination) -> Result<(), ReducerError> {
        let Some(output) = &self.output else {
            return Ok(());
        };
        for hash in reduced.hashes(kind) {
            if output.get(hash)?.is_some() {
                continue;
            }
            let entity = self
                .registry
                .get(hash)?
                .ok_or_else(|| MergeError::MissingEntity {
                    hash: hash.clone(),
                    kind,
                })?;
            let stored = output.set(&entity)?;
            if &stored != hash {
                return Err(ReducerError::HashMismatch {
                    expected: hash.clone(),
                    found: stored,
                });
            }
        }
        Ok(())
    }

    fn reduce_kind(
        &self,
        kind: EntityKind,
        combination: &mut Combination,
        baseline: &Combination,
    ) -> Result<(), ReducerError> {
        let registry = self.registry.as_ref();
        let output = self.output.as_deref().unwrap_or(registry);
        let fields = self.reduce_fields;
        match kind {
            EntityKind::Icon => {
                icon::reduce_icons(combination, baseline);
                Ok(())
            }
            EntityKind::Item => identified::reduce_identified::<Item>(
                registry,
                output,
                combination,
                baseline,
                fields,
            ),
            EntityKind::Machine => identified::reduce_identified::<Machine>(
                registry,
                output,
                combination,
                baseline,
                fields,
            ),
            EntityKind::Recipe => identified::reduce_identified::<Recipe>(
                registry,
                output,
                combination,
                baseline,
                fields,
            ),
        }
    }
}
