//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod combination_id;
mod entity_kind;
mod hash;

pub use combination_id::CombinationId;
pub use entity_kind::EntityKind;
pub use hash::ContentHash;
