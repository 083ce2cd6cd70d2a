//! Static dependency resolver
//!
//! Serves dependency closures declared up front, one entry per package.

use std::collections::HashMap;

use crate::domain::ports::{DependencyError, DependencyResolver};

#[derive(Debug, Clone, Default)]
pub struct StaticDependencyResolver {
    mandatory: HashMap<String, Vec<String>>,
    optional: HashMap<String, Vec<String>>,
}

impl StaticDependencyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the closures of `name`. The package itself is always part of
    /// its own mandatory closure.
    pub fn with_package(mut self, name: &str, mandatory: &[&str], optional: &[&str]) -> Self {
        let mut closure = vec![name.to_string()];
        closure.extend(mandatory.iter().map(|n| n.to_string()));
        self.mandatory.insert(name.to_string(), closure);
        self.optional.insert(
            name.to_string(),
            optional.iter().map(|n| n.to_string()).collect(),
        );
        self
    }

    fn declared<'a>(
        map: &'a HashMap<String, Vec<String>>,
        name: &str,
    ) -> Result<&'a Vec<String>, DependencyError> {
        map.get(name).ok_or_else(|| DependencyError::UnknownPackage {
            name: name.to_string(),
        })
    }
}

impl DependencyResolver for StaticDependencyResolver {
    fn resolve_mandatory(&self, names: &[String]) -> Result<Vec<String>, DependencyError> {
        let mut result: Vec<String> = Vec::new();
        for name in names {
            for dependency in Self::declared(&self.mandatory, name)? {
                if !result.contains(dependency) {
                    result.push(dependency.clone());
                }
            }
        }
        Ok(result)
    }

    fn resolve_optional(
        &self,
        names: &[String],
        mandatory_names: &[String],
    ) -> Result<Vec<String>, DependencyError> {
        let mut result: Vec<String> = Vec::new();
        for name in names {
            for dependency in Self::declared(&self.optional, name)? {
                if !mandatory_names.contains(dependency) && !result.contains(dependency) {
                    result.push(dependency.clone());
                }
            }
        }
        Ok(result)
    }
}
