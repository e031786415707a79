//! Configuration for the showroom viewer
//!
//! One JSON document, fetched once at startup, describes every loadable
//! model and every texture variant. This crate parses it into the lookup
//! tables the session consults; nothing here is mutated after boot.

pub mod descriptors;
pub mod error;
pub mod source;
pub mod store;

pub use descriptors::*;
pub use error::*;
pub use source::*;
pub use store::*;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
