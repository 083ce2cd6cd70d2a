//! Canonical entity encoding
//!
//! Registry adapters key entities by the SHA-256 of their JSON encoding.
//! Struct fields serialize in declaration order and translation maps are
//! ordered, so equal entities always encode to equal bytes.

use crate::domain::entities::Entity;
use crate::domain::ports::RegistryError;
use crate::domain::value_objects::ContentHash;

pub fn encode_entity(entity: &Entity) -> Result<Vec<u8>, RegistryError> {
    serde_json::to_vec(entity).map_err(|e| RegistryError::SerializationError {
        message: e.to_string(),
    })
}

pub fn hash_entity(entity: &Entity) -> Result<ContentHash, RegistryError> {
    Ok(ContentHash::from_bytes(&encode_entity(entity)?))
}
