//! Combination creator
//!
//! Enumerates the combinations of a base package level by level: level `k`
//! holds the combinations loading exactly `k` optional packages. Optional
//! packages are ranked by `(order, name)`. A child is only ever created by
//! appending an optional package ranked after every optional package already
//! chosen, so each subset has exactly one construction path and is produced
//! once, whatever the orders (zero and ties included).

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Combination, Package};
use crate::domain::ports::{
    CombinationStore, DependencyError, DependencyResolver, PackageStore, StoreError,
};

/// Separator between package names in a combination name.
pub const DEFAULT_NAME_SEPARATOR: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("no base package has been set up for combination creation")]
    NotSetUp,

    #[error("package '{name}' not found")]
    PackageNotFound { name: String },

    #[error(transparent)]
    Dependency(#[from] DependencyError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone)]
struct CreatorSetup {
    base_name: String,
    mandatory: Vec<String>,
    /// Sorted ascending by order, then name.
    optional: Vec<Package>,
}

impl CreatorSetup {
    /// Position of `name` in the sorted optional packages.
    fn rank_of(&self, name: &str) -> Option<usize> {
        self.optional.iter().position(|p| p.name == name)
    }
}

pub struct CombinationCreator {
    packages: Arc<dyn PackageStore>,
    combinations: Arc<dyn CombinationStore>,
    resolver: Arc<dyn DependencyResolver>,
    name_separator: String,
    setup: Option<CreatorSetup>,
}

impl CombinationCreator {
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
            setup: None,
        }
    }

    pub fn with_name_separator(mut self, separator: impl Into<String>) -> Self {
        self.name_separator = separator.into();
        self
    }

    /// Resolve the dependency closures of `package_name` and make it the base
    /// of every following call.
    pub fn setup_for_package(&mut self, package_name: &str) -> Result<(), SetupError> {
        self.require_package(package_name)?;

        let names = vec![package_name.to_string()];
        let mut mandatory = self.resolver.resolve_mandatory(&names)?;
        if !mandatory.iter().any(|n| n == package_name) {
            mandatory.insert(0, package_name.to_string());
        }

        let optional_names = self.resolver.resolve_optional(&names, &mandatory)?;
        let mut optional = Vec::with_capacity(optional_names.len());
        for name in optional_names {
            if mandatory.contains(&name) {
                continue;
            }
            optional.push(self.require_package(&name)?);
        }
        optional.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));

        tracing::debug!(
            package = package_name,
            mandatory = mandatory.len(),
            optional = optional.len(),
            "set up combination creator"
        );

        self.setup = Some(CreatorSetup {
            base_name: package_name.to_string(),
            mandatory,
            optional,
        });
        Ok(())
    }

    pub fn number_of_optional_packages(&self) -> Result<usize, SetupError> {
        Ok(self.setup()?.optional.len())
    }

    /// The combination loading only the mandatory closure.
    pub fn create_base_combination(&self) -> Result<Combination, SetupError> {
        let setup = self.setup()?;
        Ok(self.build(setup, Vec::new()))
    }

    /// Every combination with exactly `level` optional packages.
    ///
    /// Levels above zero expand the level below as found in the base
    /// package's `combination_ids`, so that level must already be registered.
    pub fn create_combinations_at_level(
        &self,
        level: usize,
    ) -> Result<Vec<Combination>, SetupError> {
        let setup = self.setup()?;
        if level == 0 {
            return Ok(vec![self.build(setup, Vec::new())]);
        }

        let base = self.require_package(&setup.base_name)?;
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for id in &base.combination_ids {
            let Some(parent) = self.combinations.get(id)? else {
                tracing::warn!(combination = %id, package = %base.name, "skipping unknown combination id");
                continue;
            };
            if parent.loaded_optional_package_names.len() != level - 1 {
                continue;
            }
            for child in self.create_children(setup, &parent) {
                if seen.insert(child.id.clone()) {
                    result.push(child);
                }
            }
        }

        tracing::debug!(
            package = %setup.base_name,
            level,
            count = result.len(),
            "created combinations"
        );
        Ok(result)
    }

    fn create_children(&self, setup: &CreatorSetup, parent: &Combination) -> Vec<Combination> {
        let first_rank = parent
            .loaded_optional_package_names
            .iter()
            .filter_map(|name| setup.rank_of(name))
            .max()
            .map_or(0, |rank| rank + 1);

        setup
            .optional
            .iter()
            .skip(first_rank)
            .map(|package| {
                let mut chosen = parent.loaded_optional_package_names.clone();
                chosen.push(package.name.clone());
                self.build(setup, chosen)
            })
            .collect()
    }

    fn build(&self, setup: &CreatorSetup, optional: Vec<String>) -> Combination {
        let name = std::iter::once(setup.base_name.as_str())
            .chain(optional.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(&self.name_separator);

        let mut loaded = setup.mandatory.clone();
        loaded.extend(optional.iter().cloned());

        Combination::new(name, setup.base_name.clone(), loaded, optional)
    }

    fn setup(&self) -> Result<&CreatorSetup, SetupError> {
        self.setup.as_ref().ok_or(SetupError::NotSetUp)
    }

    fn require_package(&self, name: &str) -> Result<Package, SetupError> {
        self.packages
            .get(name)?
            .ok_or_else(|| SetupError::PackageNotFound {
                name: name.to_string(),
            })
    }
}
