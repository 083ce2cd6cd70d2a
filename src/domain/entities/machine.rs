//! Machine entity

use serde::{Deserialize, Serialize};

use super::entity::{Entity, IdentifiedEntity};
use super::translations::Translations;
use crate::domain::value_objects::{ContentHash, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub name: String,
    #[serde(default)]
    pub translations: Translations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_hash: Option<ContentHash>,
    #[serde(default)]
    pub data: MachineData,
}

/// Crafting capabilities of a machine. Replaced as a whole by merges, never
/// field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineData {
    pub crafting_categories: Vec<String>,
    pub crafting_speed: f64,
    pub item_slots: u32,
    pub fluid_input_slots: u32,
    pub fluid_output_slots: u32,
    pub module_slots: u32,
    pub energy_usage: f64,
    pub energy_usage_unit: String,
}

impl MachineData {
    pub fn is_empty(&self) -> bool {
        self.crafting_categories.is_empty()
    }
}

impl Machine {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            translations: Translations::default(),
            icon_hash: None,
            data: MachineData::default(),
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

    pub fn with_data(mut self, data: MachineData) -> Self {
        self.data = data;
        self
    }
}

impl IdentifiedEntity for Machine {
    type Id = String;
    const KIND: EntityKind = EntityKind::Machine;

    fn identifier(&self) -> String {
        self.name.clone()
    }

    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Machine(machine) => Ok(machine),
            other => Err(other),
        }
    }

    fn into_entity(self) -> Entity {
        Entity::Machine(self)
    }
}
