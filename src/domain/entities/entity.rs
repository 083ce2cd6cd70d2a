//! Registry entities
//!
//! `Entity` is the closed set of values the registry stores. Adding a kind is
//! a compile-time checked change: every `match` on it must be extended.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::icon::Icon;
use super::item::Item;
use super::machine::Machine;
use super::recipe::Recipe;
use crate::domain::value_objects::EntityKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Icon(Icon),
    Item(Item),
    Machine(Machine),
    Recipe(Recipe),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Icon(_) => EntityKind::Icon,
            Entity::Item(_) => EntityKind::Item,
            Entity::Machine(_) => EntityKind::Machine,
            Entity::Recipe(_) => EntityKind::Recipe,
        }
    }
}

/// An entity with a stable business identifier.
///
/// Two values with the same identifier are the same logical entity even when
/// their content (and therefore their hash) differs.
pub trait IdentifiedEntity: Clone + Debug + Sized {
    type Id: Clone + Debug + Eq + Hash;
    const KIND: EntityKind;

    fn identifier(&self) -> Self::Id;

    /// Project a registry entity onto this kind, handing it back on mismatch.
    fn from_entity(entity: Entity) -> Result<Self, Entity>;

    fn into_entity(self) -> Entity;
}

impl From<Icon> for Entity {
    fn from(icon: Icon) -> Self {
        Entity::Icon(icon)
    }
}

impl From<Item> for Entity {
    fn from(item: Item) -> Self {
        Entity::Item(item)
    }
}

impl From<Machine> for Entity {
    fn from(machine: Machine) -> Self {
        Entity::Machine(machine)
    }
}

impl From<Recipe> for Entity {
    fn from(recipe: Recipe) -> Self {
        Entity::Recipe(recipe)
    }
}
