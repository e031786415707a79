//! Error types for configuration loading

use thiserror::Error;

/// Errors raised while fetching or parsing the configuration resource
///
/// Configuration loads exactly once at startup and is never retried; any of
/// these leaves the viewer in a permanent error state.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration unreachable: {0}")]
    Unreachable(#[from] std::io::Error),

    #[error("configuration not parseable: {0}")]
    Parse(#[from] serde_json::Error),
}
