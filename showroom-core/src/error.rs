//! Error types for showroom-core

use thiserror::Error;

/// Main error type for asset and scene-graph operations
///
/// This is the canonical cause type at the loader boundary: asset loader
/// implementations fail with it, and the session converts it into the
/// user-visible status line.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid asset: {0}")]
    InvalidAsset(String),

    #[error("Asset not found: {path}")]
    AssetNotFound { path: String },

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type alias for showroom-core operations
pub type Result<T> = std::result::Result<T, Error>;
