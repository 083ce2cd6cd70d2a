//! Localised labels and descriptions of an entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Locale-keyed texts. Empty strings carry no data and are never kept by
/// `merged_with` or `reduced_against`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub descriptions: BTreeMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, locale: &str, text: &str) -> Self {
        self.labels.insert(locale.to_string(), text.to_string());
        self
    }

    pub fn with_description(mut self, locale: &str, text: &str) -> Self {
        self.descriptions
            .insert(locale.to_string(), text.to_string());
        self
    }

    /// Whether at least one label or description is non-empty.
    pub fn has_content(&self) -> bool {
        self.labels.values().any(|v| !v.is_empty())
            || self.descriptions.values().any(|v| !v.is_empty())
    }

    /// Overlay `source` locale by locale. Returns `self` unchanged when the
    /// source carries no text at all.
    pub fn merged_with(&self, source: &Translations) -> Translations {
        if !source.has_content() {
            return self.clone();
        }
        Translations {
            labels: overlay(&self.labels, &source.labels),
            descriptions: overlay(&self.descriptions, &source.descriptions),
        }
    }

    /// Drop every locale whose text is identical to the parent's.
    pub fn reduced_against(&self, parent: &Translations) -> Translations {
        Translations {
            labels: strip(&self.labels, &parent.labels),
            descriptions: strip(&self.descriptions, &parent.descriptions),
        }
    }
}

fn overlay(
    base: &BTreeMap<String, String>,
    source: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut result = base.clone();
    for (locale, text) in source {
        if !text.is_empty() {
            result.insert(locale.clone(), text.clone());
        }
    }
    result
}

fn strip(
    own: &BTreeMap<String, String>,
    parent: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    own.iter()
        .filter(|(locale, text)| !text.is_empty() && parent.get(*locale) != Some(*text))
        .map(|(locale, text)| (locale.clone(), text.clone()))
        .collect()
}
