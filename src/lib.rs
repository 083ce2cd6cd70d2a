//! Export Lattice - combination lattice and merge/reduce engine for game data exports
//!
//! An export run produces one *combination* per set of loaded packages. Most
//! of what a combination exports is already exported by a smaller one, so
//! this crate:
//!
//! - enumerates the combinations of a base package level by level
//! - finds every ancestor a combination may inherit from
//! - merges those ancestors into a baseline
//! - strips from each combination what the baseline already provides
//!
//! Entities are stored content-addressed in an [`EntityRegistry`] and
//! combinations only carry their hashes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    GenerateCombinationsUseCase, GenerateResult, ReduceCombinationUseCase, ReduceOutcome,
    ReducePackageUseCase,
};
pub use config::{load_or_default, LatticeConfig};
pub use domain::entities::{Combination, Entity, Package};
pub use domain::ports::{CombinationStore, DependencyResolver, EntityRegistry, PackageStore};
pub use domain::services::{
    CombinationCreator, MergerManager, PackageReducer, ParentFinder, ReducerManager,
    ThumbnailReducer,
};
pub use domain::value_objects::{CombinationId, ContentHash, EntityKind};
pub use error::{LatticeError, LatticeResult};
