//! Generate Combinations Use Case
//!
//! Builds the full lattice of a base package: every level is created,
//! persisted and registered on the main package before the next level is
//! derived from it.

use std::sync::Arc;

use crate::config::LatticeConfig;
use crate::domain::entities::Combination;
use crate::domain::ports::{CombinationStore, DependencyResolver, PackageStore};
use crate::domain::services::{CombinationCreator, DEFAULT_NAME_SEPARATOR};
use crate::error::{LatticeError, LatticeResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResult {
    pub package: String,
    /// Every combination of the lattice, level by level.
    pub combinations: Vec<Combination>,
    /// Number of combinations per level, starting at level 0.
    pub per_level: Vec<usize>,
}

impl GenerateResult {
    pub fn total(&self) -> usize {
        self.combinations.len()
    }
}

pub struct GenerateCombinationsUseCase {
    packages: Arc<dyn PackageStore>,
    combinations: Arc<dyn CombinationStore>,
    resolver: Arc<dyn DependencyResolver>,
    name_separator: String,
}

impl GenerateCombinationsUseCase {
    pub fn new(
        packages: Arc<dyn PackageStore>,
        combinations: Arc<dyn CombinationStore>,
        resolver: Arc<dyn DependencyResolver>,
    ) -> Self {
        Self {
            packages,
            combinations,
            resolver,
            name_separator: DEFAULT_NAME_SEPARATOR.to_string(),
        }
    }

    /// Name combinations with the `[combinations]` separator of `config`.
    pub fn from_config(
        packages: Arc<dyn PackageStore>,
        combinations: Arc<dyn CombinationStore>,
        resolver: Arc<dyn DependencyResolver>,
        config: &LatticeConfig,
    ) -> Self {
        Self::new(packages, combinations, resolver)
            .with_name_separator(config.combinations.name_separator.clone())
    }

    pub fn with_name_separator(mut self, separator: impl Into<String>) -> Self {
        self.name_separator = separator.into();
        self
    }

    pub fn execute(&self, package_name: &str) -> LatticeResult<GenerateResult> {
        let mut creator = CombinationCreator::new(
            self.packages.clone(),
            self.combinations.clone(),
            self.resolver.clone(),
        )
        .with_name_separator(self.name_separator.clone());
        creator.setup_for_package(package_name)?;

        let mut result = GenerateResult {
            package: package_name.to_string(),
            ..GenerateResult::default()
        };
        let levels = creator.number_of_optional_packages()?;
        for level in 0..=levels {
            let created = creator.create_combinations_at_level(level)?;
            if created.is_empty() {
                break;
            }
            self.register(&created)?;
            result.per_level.push(created.len());
            result.combinations.extend(created);
        }

        tracing::info!(
            package = package_name,
            combinations = result.total(),
            levels = result.per_level.len(),
            "generated combinations"
        );
        Ok(result)
    }

    /// Persist new combinations and add their ids to the main package.
    /// Combinations already stored keep their data.
    fn register(&self, created: &[Combination]) -> LatticeResult<()> {
        for combination in created {
            if self.combinations.get(&combination.id)?.is_none() {
                self.combinations.set(combination)?;
            }

            let mut package = self
                .packages
                .get(&combination.main_package_name)?
                .ok_or_else(|| LatticeError::PackageNotFound {
                    name: combination.main_package_name.clone(),
                })?;
            if package.add_combination_id(combination.id.clone()) {
                self.packages.set(&package)?;
            }
        }
        Ok(())
    }
}
