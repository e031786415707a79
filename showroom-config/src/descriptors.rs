//! Model and texture descriptors
//!
//! Descriptors are created at config-load time, never mutated, and live for
//! the process lifetime.

use serde::{Deserialize, Serialize};

/// Configuration entry naming a loadable 3D asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDescriptor {
    /// Display name shown in the selector and in status messages
    pub name: String,
    /// Primary asset path
    pub path: String,
    /// Optional second-chance path, tried once if the primary load fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// Tags classifying a texture variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextureTags {
    /// Texture type grouping variants in the UI, e.g. "brick" or "stone"
    #[serde(rename = "type")]
    pub kind: String,
}

/// Configuration entry naming a loadable texture asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextureDescriptor {
    /// Display name shown in the variant selector
    pub name: String,
    /// Asset path of the texture's carrier scene
    pub path: String,
    pub tags: TextureTags,
}
