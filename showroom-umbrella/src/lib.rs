//! # showroom
//!
//! A session library for a configurable 3D house-model viewer.
//!
//! This is the umbrella crate that provides convenient access to the whole
//! stack: scene-graph types, the configuration store, the model/texture
//! session state machine, and a concrete viewport host.
//!
//! ## Crates
//!
//! - **Core**: scene nodes, geometry, materials, textures, release discipline
//! - **Config**: the one-shot JSON model/texture catalogs
//! - **Session**: the state machine driving loads, fallback, and the
//!   one-shot texture swap
//! - **Viewport**: perspective camera with fit-to-object framing
//!
//! ## Quick start
//!
//! ```no_run
//! use showroom::prelude::*;
//! use std::path::Path;
//!
//! struct MyLoader;
//!
//! impl AssetLoader for MyLoader {
//!     fn load(&mut self, path: &Path) -> showroom::Result<AssetGraph> {
//!         Err(Error::Unsupported(format!("decode {} here", path.display())))
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigStore::load(&FileSource::new("config.json"))?;
//!     let mut session = SessionController::new(
//!         config,
//!         Box::new(MyLoader),
//!         Box::new(Viewport::new(1280, 720)),
//!     );
//!
//!     match session.load_model("house-a") {
//!         Ok(status) => println!("{status}"),
//!         Err(err) => println!("{err}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature flags
//!
//! - `default`: enables config, session, and viewport
//! - `config`: the configuration store (serde/serde_json)
//! - `session`: the session state machine (implies `config`)
//! - `viewport`: the concrete camera host (implies `session`)

// Re-export core functionality
pub use showroom_core::*;

// Re-export sub-crates
#[cfg(feature = "config")]
pub use showroom_config as config;

#[cfg(feature = "session")]
pub use showroom_session as session;

#[cfg(feature = "viewport")]
pub use showroom_viewport as viewport;

/// Convenient imports for common use cases
pub mod prelude {
    pub use showroom_core::*;

    #[cfg(feature = "config")]
    pub use showroom_config::*;

    #[cfg(feature = "session")]
    pub use showroom_session::*;

    #[cfg(feature = "viewport")]
    pub use showroom_viewport::*;
}
