//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod combination_store;
pub mod dependency_resolver;
pub mod entity_registry;
pub mod package_store;

pub use combination_store::{CombinationStore, StoreError};
pub use dependency_resolver::{DependencyError, DependencyResolver};
pub use entity_registry::{EntityRegistry, RegistryError};
pub use package_store::PackageStore;
