//! Thumbnail reducer
//!
//! Copies a package's thumbnail icon from the raw registry into the reduced
//! one. Packages without a thumbnail pass through unchanged.

use std::sync::Arc;

use crate::domain::entities::{Entity, Package};
use crate::domain::ports::EntityRegistry;

use super::ReducerError;

pub struct ThumbnailReducer {
    raw: Arc<dyn EntityRegistry>,
    reduced: Arc<dyn EntityRegistry>,
}

impl ThumbnailReducer {
    pub fn new(raw: Arc<dyn EntityRegistry>, reduced: Arc<dyn EntityRegistry>) -> Self {
        Self { raw, reduced }
    }

    /// Returns the package with its thumbnail hash as assigned by the reduced
    /// registry.
    pub fn reduce(&self, package: &Package) -> Result<Package, ReducerError> {
        let Some(hash) = &package.thumbnail_hash else {
            return Ok(package.clone());
        };

        let entity = self
            .raw
            .get(hash)?
            .ok_or_else(|| ReducerError::MissingThumbnail {
                package: package.name.clone(),
                hash: hash.clone(),
            })?;
        if !matches!(entity, Entity::Icon(_)) {
            return Err(ReducerError::InvalidThumbnail {
                package: package.name.clone(),
                hash: hash.clone(),
                found: entity.kind(),
            });
        }

        let stored = self.reduced.set(&entity)?;
        Ok(Package {
            thumbnail_hash: Some(stored),
            ..package.clone()
        })
    }
}
