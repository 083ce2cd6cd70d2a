//! CombinationStore port
//!
//! Persists combinations by id. Used to resolve the ids a package lists and
//! to drop combinations that were pruned.

use crate::domain::entities::Combination;
use crate::domain::value_objects::CombinationId;

pub trait CombinationStore: Send + Sync {
    fn get(&self, id: &CombinationId) -> Result<Option<Combination>, StoreError>;
    fn set(&self, combination: &Combination) -> Result<(), StoreError>;
    /// Remove a combination. Removing an unknown id is not an error.
    fn remove(&self, id: &CombinationId) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access store: {message}")]
    AccessError { message: String },
}
