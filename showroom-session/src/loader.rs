//! The asset-loading collaborator boundary

use std::path::Path;

use showroom_core::AssetGraph;

/// Resolves an asset path into a loaded asset graph
///
/// One attempt per call: retry and fallback orchestration live in the
/// session controller, never in the loader. Failures use the core error
/// type, which the session turns into the user-visible status line.
pub trait AssetLoader {
    /// Load the asset at `path`, or fail with the underlying cause
    fn load(&mut self, path: &Path) -> showroom_core::Result<AssetGraph>;
}
