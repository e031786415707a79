//! Where the configuration document comes from

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// A fetchable configuration resource
///
/// The store performs exactly one fetch at boot; a source does not need to
/// support repeated reads.
pub trait ConfigSource {
    /// Fetch the raw configuration document
    fn fetch(&self) -> Result<String, ConfigError>;
}

/// Configuration read from a local file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigSource for FileSource {
    fn fetch(&self) -> Result<String, ConfigError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Configuration held in memory, used by tests and embedded defaults
#[derive(Debug, Clone)]
pub struct LiteralSource(pub String);

impl ConfigSource for LiteralSource {
    fn fetch(&self) -> Result<String, ConfigError> {
        Ok(self.0.clone())
    }
}
