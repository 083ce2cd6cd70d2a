//! Entity kinds stored in a combination.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Icon,
    Item,
    Machine,
    Recipe,
}

impl EntityKind {
    /// Every kind, in the order mergers and reducers process them.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Icon,
        EntityKind::Item,
        EntityKind::Machine,
        EntityKind::Recipe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Icon => "icon",
            EntityKind::Item => "item",
            EntityKind::Machine => "machine",
            EntityKind::Recipe => "recipe",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
