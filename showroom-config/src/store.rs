//! The boot-time configuration store

use std::collections::HashMap;

use serde::Deserialize;
use tracing::info;

use crate::descriptors::{ModelDescriptor, TextureDescriptor};
use crate::error::ConfigError;
use crate::source::ConfigSource;

/// Wire shape of the configuration document
///
/// Both sections are optional; a document without one behaves as if it were
/// present and empty.
#[derive(Debug, Deserialize, Default)]
struct ConfigDocument {
    #[serde(default)]
    models: HashMap<String, ModelDescriptor>,
    #[serde(default)]
    textures: HashMap<String, TextureDescriptor>,
}

/// Immutable model and texture catalogs, loaded once at startup
#[derive(Debug, Default)]
pub struct ConfigStore {
    models: HashMap<String, ModelDescriptor>,
    textures: HashMap<String, TextureDescriptor>,
}

impl ConfigStore {
    /// Fetch and parse the configuration resource
    ///
    /// One-shot: there are no retries, and a failure means the caller must
    /// present a permanent error state.
    pub fn load(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let raw = source.fetch()?;
        let store = Self::from_json_str(&raw)?;
        info!(
            models = store.models.len(),
            textures = store.textures.len(),
            "configuration loaded"
        );
        Ok(store)
    }

    /// Parse an already-fetched configuration document
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let doc: ConfigDocument = serde_json::from_str(raw)?;
        Ok(Self {
            models: doc.models,
            textures: doc.textures,
        })
    }

    /// Look up a model descriptor by key
    pub fn model(&self, key: &str) -> Option<&ModelDescriptor> {
        self.models.get(key)
    }

    /// Look up a texture descriptor by key
    pub fn texture(&self, key: &str) -> Option<&TextureDescriptor> {
        self.textures.get(key)
    }

    /// All models as (key, descriptor), sorted by key for stable UI listings
    pub fn model_entries(&self) -> Vec<(&str, &ModelDescriptor)> {
        let mut entries: Vec<_> = self
            .models
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_by_key(|(k, _)| *k);
        entries
    }

    /// Texture variants of one type, sorted by key
    pub fn textures_by_type(&self, kind: &str) -> Vec<(&str, &TextureDescriptor)> {
        let mut entries: Vec<_> = self
            .textures
            .iter()
            .filter(|(_, cfg)| cfg.tags.kind == kind)
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_by_key(|(k, _)| *k);
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::LiteralSource;

    const SAMPLE: &str = r#"{
        "models": {
            "house-a": { "name": "Alpine House", "path": "models/house_a.glb" },
            "house-b": {
                "name": "Beach House",
                "path": "models/house_b.glb",
                "fallback": "models/house_b_lowres.glb"
            }
        },
        "textures": {
            "brick-red": {
                "name": "Red Brick",
                "path": "textures/brick_red.glb",
                "tags": { "type": "brick" }
            },
            "brick-sand": {
                "name": "Sand Brick",
                "path": "textures/brick_sand.glb",
                "tags": { "type": "brick" }
            },
            "stone-grey": {
                "name": "Grey Stone",
                "path": "textures/stone_grey.glb",
                "tags": { "type": "stone" }
            }
        }
    }"#;

    #[test]
    fn parses_models_and_textures() {
        let store = ConfigStore::load(&LiteralSource(SAMPLE.to_string())).unwrap();

        let a = store.model("house-a").unwrap();
        assert_eq!(a.name, "Alpine House");
        assert!(a.fallback.is_none());

        let b = store.model("house-b").unwrap();
        assert_eq!(b.fallback.as_deref(), Some("models/house_b_lowres.glb"));

        assert_eq!(store.texture("brick-red").unwrap().tags.kind, "brick");
        assert!(store.model("no-such-key").is_none());
        assert!(store.texture("no-such-key").is_none());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let store = ConfigStore::from_json_str("{}").unwrap();
        assert!(store.is_empty());
        assert!(store.model_entries().is_empty());

        let store = ConfigStore::from_json_str(r#"{ "models": {} }"#).unwrap();
        assert!(store.textures_by_type("brick").is_empty());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = ConfigStore::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unreachable_source_is_reported() {
        let source = crate::source::FileSource::new("/nonexistent/config.json");
        let err = ConfigStore::load(&source).unwrap_err();
        assert!(matches!(err, ConfigError::Unreachable(_)));
    }

    #[test]
    fn model_entries_are_sorted_for_listing() {
        let store = ConfigStore::from_json_str(SAMPLE).unwrap();
        let keys: Vec<_> = store.model_entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["house-a", "house-b"]);
    }

    #[test]
    fn textures_filter_by_type() {
        let store = ConfigStore::from_json_str(SAMPLE).unwrap();

        let bricks: Vec<_> = store
            .textures_by_type("brick")
            .iter()
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(bricks, vec!["brick-red", "brick-sand"]);

        assert!(store.textures_by_type("wood").is_empty());
    }
}
