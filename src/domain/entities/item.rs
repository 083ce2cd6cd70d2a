//! Item entity

use serde::{Deserialize, Serialize};

use super::entity::{Entity, IdentifiedEntity};
use super::translations::Translations;
use crate::domain::value_objects::{ContentHash, EntityKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Item,
    Fluid,
}

/// Business identifier of an item: items and fluids live in separate
/// namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId {
    pub item_type: ItemType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_type: ItemType,
    pub name: String,
    #[serde(default)]
    pub translations: Translations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_hash: Option<ContentHash>,
}

impl Item {
    pub fn new(item_type: ItemType, name: &str) -> Self {
        Self {
            item_type,
            name: name.to_string(),
            translations: Translations::default(),
            icon_hash: None,
        }
    }

    pub fn with_translations(mut self, translations: Translations) -> Self {
        self.translations = translations;
        self
    }

    pub fn with_icon(mut self, hash: ContentHash) -> Self {
        self.icon_hash = Some(hash);
        self
    }
}

impl IdentifiedEntity for Item {
    type Id = ItemId;
    const KIND: EntityKind = EntityKind::Item;

    fn identifier(&self) -> ItemId {
        ItemId {
            item_type: self.item_type,
            name: self.name.clone(),
        }
    }

    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Item(item) => Ok(item),
            other => Err(other),
        }
    }

    fn into_entity(self) -> Entity {
        Entity::Item(self)
    }
}
