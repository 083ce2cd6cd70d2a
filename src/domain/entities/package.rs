//! Package ("mod") entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CombinationId, ContentHash};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    /// Position in the global load order, assigned by dependency resolution.
    pub order: u32,
    /// Combinations whose main package is this one.
    #[serde(default)]
    pub combination_ids: Vec<CombinationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_hash: Option<ContentHash>,
}

impl Package {
    pub fn new(name: &str, order: u32) -> Self {
        Self {
            name: name.to_string(),
            order,
            combination_ids: Vec::new(),
            thumbnail_hash: None,
        }
    }

    pub fn with_thumbnail(mut self, hash: ContentHash) -> Self {
        self.thumbnail_hash = Some(hash);
        self
    }

    /// Register a combination id, ignoring ids already known.
    ///
    /// Returns `true` when the id was new.
    pub fn add_combination_id(&mut self, id: CombinationId) -> bool {
        if self.combination_ids.contains(&id) {
            return false;
        }
        self.combination_ids.push(id);
        true
    }
}
