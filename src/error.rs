//! Error types for the export lattice
//!
//! Each layer reports its own `thiserror` enum; `LatticeError` collects them
//! for callers driving whole use cases.

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::ports::{DependencyError, RegistryError, StoreError};
use crate::domain::services::{MergeError, ParentFinderError, ReducerError, SetupError};
use crate::domain::value_objects::CombinationId;

/// Result type alias for lattice operations
pub type LatticeResult<T> = Result<T, LatticeError>;

#[derive(Error, Debug)]
pub enum LatticeError {
    /// Operation invoked before the required configuration
    #[error("setup error: {0}")]
    Setup(#[from] SetupError),

    /// A registry entry is missing or of the wrong kind
    #[error("merge error: {0}")]
    Merge(#[from] MergeError),

    /// A combination or package could not be reduced
    #[error("reducer error: {0}")]
    Reducer(#[from] ReducerError),

    #[error("parent lookup failed: {0}")]
    ParentFinder(#[from] ParentFinderError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Dependency(#[from] DependencyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("combination {id} not found")]
    CombinationNotFound { id: CombinationId },

    #[error("package '{name}' not found")]
    PackageNotFound { name: String },
}
