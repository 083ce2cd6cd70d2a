//! DependencyResolver port
//!
//! Dependency closures are computed outside of this crate; the lattice only
//! consumes their results.

pub trait DependencyResolver: Send + Sync {
    /// Names of every package required by `names`, including `names` themselves,
    /// ordered by load order.
    fn resolve_mandatory(&self, names: &[String]) -> Result<Vec<String>, DependencyError>;

    /// Names of the packages that may optionally be loaded alongside
    /// `mandatory_names`, excluding the mandatory ones.
    fn resolve_optional(
        &self,
        names: &[String],
        mandatory_names: &[String],
    ) -> Result<Vec<String>, DependencyError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DependencyError {
    #[error("unknown package '{name}'")]
    UnknownPackage { name: String },

    #[error("failed to resolve dependencies: {message}")]
    ResolutionFailed { message: String },
}
