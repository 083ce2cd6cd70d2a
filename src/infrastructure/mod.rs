//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `repositories/` - Entity registry and package/combination stores
//! - `resolver` - Dependency resolver serving declared closures

pub mod repositories;
pub mod resolver;

pub use repositories::{
    FsEntityRegistry, InMemoryCombinationStore, InMemoryEntityRegistry, InMemoryPackageStore,
};
pub use resolver::StaticDependencyResolver;
