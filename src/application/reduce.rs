//! Reduce Use Cases
//!
//! Orchestrates the persistence side of the lattice:
//! 1. Reduce a combination against its merged ancestor baseline
//! 2. Persist the delta, or prune the combination when it adds nothing
//! 3. Trim each package to the combinations that survived and carry its
//!    thumbnail into the reduced registry

use std::sync::Arc;

use crate::config::LatticeConfig;
use crate::domain::entities::{Combination, Package};
use crate::domain::ports::{CombinationStore, EntityRegistry, PackageStore};
use crate::domain::services::{
    MergerManager, PackageReducer, ParentFinder, ReducerManager, ThumbnailReducer,
};
use crate::domain::value_objects::CombinationId;
use crate::error::{LatticeError, LatticeResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReduceOutcome {
    /// The reduced combination was written to the output store.
    Persisted(Combination),
    /// The combination contributes nothing; any stored version was removed.
    Pruned { id: CombinationId, name: String },
}

impl ReduceOutcome {
    pub fn is_pruned(&self) -> bool {
        matches!(self, ReduceOutcome::Pruned { .. })
    }
}

pub struct ReduceCombinationUseCase {
    source: Arc<dyn CombinationStore>,
    output: Arc<dyn CombinationStore>,
    reducer: ReducerManager,
}

impl ReduceCombinationUseCase {
    /// `source` holds the unreduced combinations; `output` receives the
    /// reduced ones.
    pub fn new(
        source: Arc<dyn CombinationStore>,
        output: Arc<dyn CombinationStore>,
        reducer: ReducerManager,
    ) -> Self {
        Self {
            source,
            output,
            reducer,
        }
    }

    /// Reduce against parents found in `source`, reading entities from
    /// `raw_registry` and publishing every entity a persisted combination
    /// references into `reduced_registry`.
    pub fn from_config(
        packages: Arc<dyn PackageStore>,
        source: Arc<dyn CombinationStore>,
        output: Arc<dyn CombinationStore>,
        raw_registry: Arc<dyn EntityRegistry>,
        reduced_registry: Arc<dyn EntityRegistry>,
        config: &LatticeConfig,
    ) -> Self {
        let finder = ParentFinder::new(
            packages,
            source.clone(),
            MergerManager::new(raw_registry.clone()),
        );
        let reducer = ReducerManager::new(raw_registry, finder)
            .with_output_registry(reduced_registry)
            .with_field_reduction(config.reduce.translations);
        Self::new(source, output, reducer)
    }

    pub fn execute(&self, id: &CombinationId) -> LatticeResult<ReduceOutcome> {
        let combination = self
            .source
            .get(id)?
            .ok_or_else(|| LatticeError::CombinationNotFound { id: id.clone() })?;
        self.reduce_and_store(&combination)
    }

    /// Reduce every id independently. A failure is reported for its id and
    /// never stops the remaining ones.
    pub fn execute_many(
        &self,
        ids: &[CombinationId],
    ) -> Vec<(CombinationId, LatticeResult<ReduceOutcome>)> {
        ids.iter()
            .map(|id| {
                let result = self.execute(id);
                if let Err(e) = &result {
                    tracing::error!(combination = %id, error = %e, "failed to reduce combination");
                }
                (id.clone(), result)
            })
            .collect()
    }

    fn reduce_and_store(&self, combination: &Combination) -> LatticeResult<ReduceOutcome> {
        let reduced = self.reducer.reduce(combination)?;

        if reduced.is_degenerate() {
            self.output.remove(&reduced.id)?;
            tracing::info!(combination = %reduced.name, "pruned degenerate combination");
            return Ok(ReduceOutcome::Pruned {
                id: reduced.id,
                name: reduced.name,
            });
        }

        self.output.set(&reduced)?;
        tracing::info!(
            combination = %reduced.name,
            icons = reduced.icon_hashes.len(),
            items = reduced.item_hashes.len(),
            machines = reduced.machine_hashes.len(),
            recipes = reduced.recipe_hashes.len(),
            "persisted reduced combination"
        );
        Ok(ReduceOutcome::Persisted(reduced))
    }
}

pub struct ReducePackageUseCase {
    source: Arc<dyn PackageStore>,
    output: Arc<dyn PackageStore>,
    package_reducer: PackageReducer,
    thumbnail_reducer: ThumbnailReducer,
}

impl ReducePackageUseCase {
    /// `reduced_combinations` and `reduced_registry` are the outputs of the
    /// combination reduction; `raw_registry` holds the unreduced entities.
    pub fn new(
        source: Arc<dyn PackageStore>,
        output: Arc<dyn PackageStore>,
        reduced_combinations: Arc<dyn CombinationStore>,
        raw_registry: Arc<dyn EntityRegistry>,
        reduced_registry: Arc<dyn EntityRegistry>,
    ) -> Self {
        Self {
            source,
            output,
            package_reducer: PackageReducer::new(reduced_combinations),
            thumbnail_reducer: ThumbnailReducer::new(raw_registry, reduced_registry),
        }
    }

    pub fn execute(&self, name: &str) -> LatticeResult<Package> {
        let package = self
            .source
            .get(name)?
            .ok_or_else(|| LatticeError::PackageNotFound {
                name: name.to_string(),
            })?;

        let package = self.package_reducer.reduce(&package)?;
        let package = self.thumbnail_reducer.reduce(&package)?;
        self.output.set(&package)?;

        tracing::info!(
            package = %package.name,
            combinations = package.combination_ids.len(),
            "persisted reduced package"
        );
        Ok(package)
    }
}
