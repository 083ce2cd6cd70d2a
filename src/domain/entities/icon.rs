//! Icon entity
//!
//! Icons have no business identifier: two icons are the same icon exactly
//! when their content hashes match.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub size: u32,
    pub rendered_size: u32,
    pub layers: Vec<IconLayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconLayer {
    pub file_name: String,
    #[serde(default)]
    pub offset: (i32, i32),
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl Icon {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            rendered_size: size,
            layers: Vec::new(),
        }
    }

    pub fn with_layer(mut self, file_name: &str) -> Self {
        self.layers.push(IconLayer {
            file_name: file_name.to_string(),
            offset: (0, 0),
            scale: default_scale(),
            tint: None,
        });
        self
    }
}
