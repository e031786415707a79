//! Viewport hosting for the showroom viewer
//!
//! A concrete [`showroom_session::ViewportHost`]: a perspective camera with
//! fit-to-object framing, orbit-control limits, and surface sizing with a
//! capped pixel ratio. No rendering backend lives here; the session only
//! needs something that frames models and tracks the surface.

pub mod camera;
pub mod host;

pub use camera::*;
pub use host::*;
