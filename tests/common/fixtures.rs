//! Reusable entities for lattice tests.

use export_lattice::domain::entities::{
    Entity, Icon, Item, ItemType, Machine, MachineData, Recipe, RecipeMode, Translations,
};

pub fn item(name: &str, label: &str) -> Entity {
    Item::new(ItemType::Item, name)
        .with_translations(Translations::new().with_label("en", label))
        .into()
}

pub fn item_with_labels(name: &str, labels: &[(&str, &str)]) -> Entity {
    let translations = labels
        .iter()
        .fold(Translations::new(), |t, (locale, text)| t.with_label(locale, text));
    Item::new(ItemType::Item, name)
        .with_translations(translations)
        .into()
}

pub fn icon(layers: &[&str]) -> Entity {
    layers
        .iter()
        .fold(Icon::new(32), |icon, layer| icon.with_layer(layer))
        .into()
}

pub fn machine(name: &str, categories: &[&str]) -> Entity {
    Machine::new(name)
        .with_data(MachineData {
            crafting_categories: categories.iter().map(|c| c.to_string()).collect(),
            crafting_speed: 1.0,
            ..MachineData::default()
        })
        .into()
}

pub fn recipe(name: &str, label: &str) -> Entity {
    Recipe::new(name, RecipeMode::Normal)
        .with_translations(Translations::new().with_label("en", label))
        .into()
}
