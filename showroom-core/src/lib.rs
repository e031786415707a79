//! Core data structures for the showroom viewer
//!
//! This crate provides the scene-graph types a viewing session works with:
//! nodes, geometry, materials with named texture slots, textures, and the
//! resource-release discipline that keeps GPU-side handles from leaking.

pub mod error;
pub mod geometry;
pub mod material;
pub mod scene;
pub mod texture;
pub mod traits;

pub use error::*;
pub use geometry::*;
pub use material::*;
pub use scene::*;
pub use texture::*;
pub use traits::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
