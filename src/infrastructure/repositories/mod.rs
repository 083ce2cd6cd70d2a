//! Repository implementations of the storage ports.

pub mod canonical;
mod fs_registry;
mod memory;

pub use canonical::hash_entity;
pub use fs_registry::FsEntityRegistry;
pub use memory::{InMemoryCombinationStore, InMemoryEntityRegistry, InMemoryPackageStore};
