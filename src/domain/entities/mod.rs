//! Domain Entities
//!
//! - `Package` - An add-on package ("mod") with its load order
//! - `Combination` - One exported set of loaded packages and its entity hashes
//! - `Entity` - The registry values: icons, items, machines and recipes

mod combination;
mod entity;
mod icon;
mod item;
mod machine;
mod package;
mod recipe;
mod translations;

pub use combination::Combination;
pub use entity::{Entity, IdentifiedEntity};
pub use icon::{Color, Icon, IconLayer};
pub use item::{Item, ItemId, ItemType};
pub use machine::{Machine, MachineData};
pub use package::Package;
pub use recipe::{Ingredient, Product, Recipe, RecipeData, RecipeId, RecipeMode};
pub use translations::Translations;
