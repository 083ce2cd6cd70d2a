//! Recipe entity

use serde::{Deserialize, Serialize};

use super::entity::{Entity, IdentifiedEntity};
use super::item::ItemType;
use super::translations::Translations;
use crate::domain::value_objects::{ContentHash, EntityKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeMode {
    Normal,
    Expensive,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeId {
    pub name: String,
    pub mode: RecipeMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item_type: ItemType,
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub item_type: ItemType,
    pub name: String,
    pub amount_min: f64,
    pub amount_max: f64,
    pub probability: f64,
}

/// What a recipe consumes and produces. Replaced as a whole by merges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeData {
    pub ingredients: Vec<Ingredient>,
    pub products: Vec<Product>,
    pub craft_time: f64,
    pub crafting_category: String,
}

impl RecipeData {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.products.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub mode: RecipeMode,
    #[serde(default)]
    pub translations: Translations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_hash: Option<ContentHash>,
    #[serde(default)]
    pub data: RecipeData,
}

impl Recipe {
    pub fn new(name: &str, mode: RecipeMode) -> Self {
        Self {
            name: name.to_string(),
            mode,
            translations: Translations::default(),
            icon_hash: None,
            data: RecipeData::default(),
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

    pub fn with_data(mut self, data: RecipeData) -> Self {
        self.data = data;
        self
    }
}

impl IdentifiedEntity for Recipe {
    type Id = RecipeId;
    const KIND: EntityKind = EntityKind::Recipe;

    fn identifier(&self) -> RecipeId {
        RecipeId {
            name: self.name.clone(),
            mode: self.mode,
        }
    }

    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Recipe(recipe) => Ok(recipe),
            other => Err(other),
        }
    }

    fn into_entity(self) -> Entity {
        Entity::Recipe(self)
    }
}
