//! Model/texture session state machine
//!
//! The session controller owns the one loaded model, the index of material
//! names discovered in it, and the one-shot texture-application gate. It
//! drives an abstract [`AssetLoader`] and notifies a [`ViewportHost`] when a
//! freshly loaded model should be framed.

pub mod controller;
pub mod error;
pub mod index;
pub mod loader;
pub mod status;
pub mod viewport;

pub use controller::*;
pub use error::*;
pub use index::*;
pub use loader::*;
pub use status::*;
pub use viewport::*;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
