//! Package reducer
//!
//! After combinations have been reduced and degenerate ones pruned, a package
//! only keeps the ids of combinations that still exist.

use std::sync::Arc;

use crate::domain::entities::Package;
use crate::domain::ports::CombinationStore;

use super::ReducerError;

pub struct PackageReducer {
    combinations: Arc<dyn CombinationStore>,
}

impl PackageReducer {
    /// `combinations` is the store holding the reduced combinations.
    pub fn new(combinations: Arc<dyn CombinationStore>) -> Self {
        Self { combinations }
    }

    pub fn reduce(&self, package: &Package) -> Result<Package, ReducerError> {
        let mut combination_ids = Vec::with_capacity(package.combination_ids.len());
        for id in &package.combination_ids {
            if self.combinations.get(id)?.is_some() {
                combination_ids.push(id.clone());
            }
        }

        let dropped = package.combination_ids.len() - combination_ids.len();
        if dropped > 0 {
            tracing::debug!(package = %package.name, dropped, "dropped pruned combination ids");
        }

        Ok(Package {
            combination_ids,
            ..package.clone()
        })
    }
}
