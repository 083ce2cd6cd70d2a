//! Parent finder
//!
//! Finds the ancestors of a combination in the lattice: every known
//! combination loading a strictly smaller subset of its packages. The search
//! only visits combinations whose main package is loaded by the child.
//!
//! Parents are ordered by, ascending:
//! 1. order of the parent's main package
//! 2. number of loaded packages
//! 3. the loaded packages' orders, sorted, compared element-wise

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::entities::Combination;
use crate::domain::ports::{CombinationStore, PackageStore, StoreError};

use super::merger::{MergeError, MergerManager};

/// Suffix of the name given to a merged ancestor baseline.
pub const BASELINE_SUFFIX: &str = "@baseline";

#[derive(Debug, thiserror::Error)]
pub enum ParentFinderError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Whether `candidate` may be inherited from by `combination`.
pub fn is_valid_parent(candidate: &Combination, combination: &Combination) -> bool {
    candidate.name != combination.name
        && candidate.loaded_package_names.len() < combination.loaded_package_names.len()
        && candidate.is_subset_of(combination)
}

#[derive(Clone)]
pub struct ParentFinder {
    packages: Arc<dyn PackageStore>,
    combinations: Arc<dyn CombinationStore>,
    merger: MergerManager,
}

impl ParentFinder {
    pub fn new(
        packages: Arc<dyn PackageStore>,
        combinations: Arc<dyn CombinationStore>,
        merger: MergerManager,
    ) -> Self {
        Self {
            packages,
            combinations,
            merger,
        }
    }

    pub fn find_valid_parents(
        &self,
        combination: &Combination,
    ) -> Result<Vec<Combination>, StoreError> {
        let mut orders: HashMap<String, u32> = HashMap::new();
        let mut visited = HashSet::new();
        let mut parents = Vec::new();

        for package_name in &combination.loaded_package_names {
            let Some(package) = self.packages.get(package_name)? else {
                tracing::warn!(package = %package_name, combination = %combination.name, "loaded package is unknown");
                continue;
            };
            orders.insert(package.name.clone(), package.order);

            for id in &package.combination_ids {
                if !visited.insert(id.clone()) {
                    continue;
                }
                let Some(candidate) = self.combinations.get(id)? else {
                    tracing::warn!(combination = %id, package = %package.name, "skipping unknown combination id");
                    continue;
                };
                if is_valid_parent(&candidate, combination) {
                    parents.push(candidate);
                }
            }
        }

        parents.sort_by(|a, b| compare_parents(a, b, &orders));
        tracing::debug!(
            combination = %combination.name,
            parents = parents.len(),
            "found valid parents"
        );
        Ok(parents)
    }

    /// Fold every valid parent of `combination`, in parent order, into one
    /// synthetic combination holding everything it can inherit.
    pub fn merged_ancestor_baseline(
        &self,
        combination: &Combination,
    ) -> Result<Combination, ParentFinderError> {
        let parents = self.find_valid_parents(combination)?;

        let mut loaded = Vec::new();
        let mut optional = Vec::new();
        for parent in &parents {
            loaded.extend(parent.loaded_package_names.iter().cloned());
            optional.extend(parent.loaded_optional_package_names.iter().cloned());
        }

        let mut baseline = Combination::new(
            format!("{}{}", combination.name, BASELINE_SUFFIX),
            combination.main_package_name.clone(),
            loaded,
            optional,
        );
        for parent in &parents {
            self.merger.merge(&mut baseline, parent)?;
        }
        Ok(baseline)
    }
}

fn compare_parents(a: &Combination, b: &Combination, orders: &HashMap<String, u32>) -> Ordering {
    let order_of = |name: &str| orders.get(name).copied().unwrap_or(u32::MAX);
    let sorted_orders = |c: &Combination| {
        let mut list: Vec<u32> = c.loaded_package_names.iter().map(|n| order_of(n)).collect();
        list.sort_unstable();
        list
    };

    order_of(&a.main_package_name)
        .cmp(&order_of(&b.main_package_name))
        .then_with(|| {
            a.loaded_package_names
                .len()
                .cmp(&b.loaded_package_names.len())
        })
        .then_with(|| sorted_orders(a).cmp(&sorted_orders(b)))
        .then_with(|| a.name.cmp(&b.name))
}
