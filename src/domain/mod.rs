//! Domain Layer
//!
//! The lattice core: pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Packages, combinations and the registry entities
//! - `value_objects/` - Immutable value types (ContentHash, CombinationId, EntityKind)
//! - `services/` - Combination creation, parent finding, merging, reducing
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Storage is only reached through trait-defined ports
//! 2. **Immutable entries** - Registry entries are never changed in place;
//!    every modification is written as new content
//! 3. **Clone, then commit** - Merges and reductions work on a copy and only
//!    replace the original once every step succeeded

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
