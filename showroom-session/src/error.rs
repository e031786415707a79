//! Error types for session operations
//!
//! Every variant is user-facing: the `Display` text is what lands in the
//! status line. Nothing here is retried automatically except the single
//! model-fallback attempt handled inside the controller.

use thiserror::Error;

/// Errors surfaced by session operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("unknown model key: {key}")]
    UnknownModelKey { key: String },

    #[error("unknown texture key: {key}")]
    UnknownTextureKey { key: String },

    #[error("failed to load \"{name}\": {reason}")]
    AssetLoad { name: String, reason: String },

    #[error("material \"{material}\" not found in the loaded model")]
    MaterialNotFound { material: String },
}
