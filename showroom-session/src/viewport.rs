//! The viewport collaborator boundary

use showroom_core::AssetGraph;

/// Owns the camera, render surface, and per-frame tick
///
/// The render tick runs independently of the session and only reads state;
/// it must tolerate a session with nothing loaded.
pub trait ViewportHost {
    /// Reframe the camera so the given object fills the view
    fn fit_to_object(&mut self, graph: &AssetGraph);

    /// The hosting surface changed size
    fn resize(&mut self, width: u32, height: u32);

    /// One frame of the continuous render loop
    fn render(&mut self);
}
