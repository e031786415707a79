//! The session controller state machine
//!
//! Owns the zero-or-one loaded model and enforces the rules around loading,
//! the single fallback attempt, the one-shot texture swap, and unconditional
//! resource release between transitions.

use std::path::Path;

use showroom_config::ConfigStore;
use showroom_core::{channel, AssetGraph};
use tracing::{info, warn};

use crate::error::SessionError;
use crate::index::MaterialIndex;
use crate::loader::AssetLoader;
use crate::status::Status;
use crate::viewport::ViewportHost;

/// The material every texture swap targets, independent of configuration
pub const DEFAULT_TARGET_MATERIAL: &str = "Bricks026";

/// Lifecycle of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No model loaded
    Empty,
    /// A load is in flight
    Loading,
    /// Model present, texture swap still available
    Loaded,
    /// Model present, one-shot texture swap consumed
    Textured,
}

/// The active asset graph and the load generation it was installed under
#[derive(Debug)]
pub struct LoadedModel {
    graph: AssetGraph,
    generation: u64,
}

impl LoadedModel {
    pub fn graph(&self) -> &AssetGraph {
        &self.graph
    }

    /// Which load installed this model; stale results from a superseded load
    /// would carry an older generation
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Drives model loads and texture swaps against abstract collaborators
pub struct SessionController {
    config: ConfigStore,
    loader: Box<dyn AssetLoader>,
    viewport: Box<dyn ViewportHost>,
    target_material: String,
    model: Option<LoadedModel>,
    materials: MaterialIndex,
    state: SessionState,
    generation: u64,
}

impl SessionController {
    pub fn new(
        config: ConfigStore,
        loader: Box<dyn AssetLoader>,
        viewport: Box<dyn ViewportHost>,
    ) -> Self {
        Self::with_target_material(config, loader, viewport, DEFAULT_TARGET_MATERIAL)
    }

    /// Build a session targeting a non-default material name
    pub fn with_target_material(
        config: ConfigStore,
        loader: Box<dyn AssetLoader>,
        viewport: Box<dyn ViewportHost>,
        target_material: impl Into<String>,
    ) -> Self {
        Self {
            config,
            loader,
            viewport,
            target_material: target_material.into(),
            model: None,
            materials: MaterialIndex::new(),
            state: SessionState::Empty,
            generation: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn model(&self) -> Option<&LoadedModel> {
        self.model.as_ref()
    }

    pub fn materials(&self) -> &MaterialIndex {
        &self.materials
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn target_material(&self) -> &str {
        &self.target_material
    }

    /// How many loads have been initiated over the session's lifetime
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Load the model configured under `key`, replacing any current model
    ///
    /// The current model is released in full before the new load is
    /// attempted, so a failed load never leaves a half-torn-down session:
    /// failure lands in `Empty`. One fallback attempt is made if the
    /// descriptor carries a fallback path; if both fail, the primary
    /// attempt's error is the one surfaced.
    pub fn load_model(&mut self, key: &str) -> Result<Status, SessionError> {
        let descriptor = match self.config.model(key) {
            Some(d) => d.clone(),
            None => {
                return Err(SessionError::UnknownModelKey {
                    key: key.to_string(),
                })
            }
        };

        self.generation += 1;
        let generation = self.generation;
        self.state = SessionState::Loading;
        self.unload_current();

        let graph = match self.loader.load(Path::new(&descriptor.path)) {
            Ok(graph) => graph,
            Err(primary) => {
                let recovered = descriptor.fallback.as_ref().and_then(|fallback| {
                    warn!(model = %descriptor.name, %fallback, "primary load failed, trying fallback");
                    self.loader.load(Path::new(fallback)).ok()
                });
                match recovered {
                    Some(graph) => graph,
                    None => {
                        self.state = SessionState::Empty;
                        return Err(SessionError::AssetLoad {
                            name: descriptor.name,
                            reason: primary.to_string(),
                        });
                    }
                }
            }
        };

        let materials = MaterialIndex::build(&graph);
        self.viewport.fit_to_object(&graph);

        let material_count = materials.len();
        self.materials = materials;
        self.model = Some(LoadedModel { graph, generation });
        self.state = SessionState::Loaded;

        info!(model = %descriptor.name, materials = material_count, generation, "model loaded");
        Ok(Status::ModelLoaded {
            name: descriptor.name,
            materials: material_count,
        })
    }

    /// Apply the texture configured under `texture_key` to the target
    /// material, at most once per model-load cycle
    ///
    /// The texture asset's first mesh provides the source material; each of
    /// the five channel maps present on it is cloned onto the target, absent
    /// channels leave the target untouched. The temporary asset graph is
    /// released afterwards. A failed load leaves the gate unconsumed so the
    /// swap can be retried.
    pub fn apply_texture_once(&mut self, texture_key: &str) -> Result<Status, SessionError> {
        match self.state {
            SessionState::Textured => return Ok(Status::TextureAlreadyApplied),
            SessionState::Empty | SessionState::Loading => return Ok(Status::NoModelLoaded),
            SessionState::Loaded => {}
        }

        let descriptor = match self.config.texture(texture_key) {
            Some(d) => d.clone(),
            None => {
                return Err(SessionError::UnknownTextureKey {
                    key: texture_key.to_string(),
                })
            }
        };

        let target = self.materials.get(&self.target_material).ok_or_else(|| {
            SessionError::MaterialNotFound {
                material: self.target_material.clone(),
            }
        })?;

        let mut source_graph =
            self.loader
                .load(Path::new(&descriptor.path))
                .map_err(|err| SessionError::AssetLoad {
                    name: descriptor.name.clone(),
                    reason: err.to_string(),
                })?;

        let source = match source_graph.first_material() {
            Some(material) => material,
            None => {
                source_graph.release_resources();
                return Err(SessionError::AssetLoad {
                    name: descriptor.name,
                    reason: "no mesh in texture asset".to_string(),
                });
            }
        };

        {
            let source = source.borrow();
            let mut target = target.borrow_mut();
            for slot in channel::PBR_CHANNELS {
                if let Some(texture) = source.texture(slot) {
                    target.set_texture(slot, texture.clone_for_upload());
                }
            }
            target.mark_needs_update();
        }

        drop(source);
        source_graph.release_resources();

        self.state = SessionState::Textured;
        info!(texture = %descriptor.name, material = %self.target_material, "texture applied");
        Ok(Status::TextureApplied {
            material: self.target_material.clone(),
        })
    }

    /// Release everything and return to the initial state. Idempotent.
    pub fn reset(&mut self) -> Status {
        self.unload_current();
        self.state = SessionState::Empty;
        info!("session reset");
        Status::SelectionReset
    }

    /// One frame of the render loop; reads state only
    pub fn render_frame(&mut self) {
        self.viewport.render();
    }

    /// Forward a surface size change to the viewport
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
    }

    /// Unconditional release of the current model, identical on every path
    fn unload_current(&mut self) {
        if let Some(mut model) = self.model.take() {
            model.graph.release_resources();
        }
        self.materials.clear();
    }
}
