//! EntityRegistry port
//!
//! Content-addressed storage of entities. Entries are immutable: `set` on
//! content already present returns the existing hash.

use crate::domain::entities::Entity;
use crate::domain::value_objects::ContentHash;

pub trait EntityRegistry: Send + Sync {
    fn get(&self, hash: &ContentHash) -> Result<Option<Entity>, RegistryError>;
    fn set(&self, entity: &Entity) -> Result<ContentHash, RegistryError>;
    fn remove(&self, hash: &ContentHash) -> Result<(), RegistryError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Failed to access registry: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize entity: {message}")]
    SerializationError { message: String },

    #[error("registry entry {hash} is corrupted: {message}")]
    Corrupted { hash: ContentHash, message: String },
}
