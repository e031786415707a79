//! The concrete viewport host

use nalgebra::Point3;
use showroom_core::{AssetGraph, Bounded};
use showroom_session::ViewportHost;
use tracing::{debug, warn};

use crate::camera::{Camera, DEFAULT_FIT_OFFSET};

/// Pixel ratios above this waste fill rate without visible gain
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Orbit-control limits derived from the framed object
#[derive(Debug, Clone)]
pub struct OrbitLimits {
    pub target: Point3<f32>,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            target: Point3::origin(),
            min_distance: 0.1,
            max_distance: 100_000.0,
        }
    }
}

/// Camera, surface size, and orbit limits for one viewing surface
#[derive(Debug)]
pub struct Viewport {
    camera: Camera,
    orbit: OrbitLimits,
    width: u32,
    height: u32,
    pixel_ratio: f32,
    frames: u64,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let mut viewport = Self {
            camera: Camera::default(),
            orbit: OrbitLimits::default(),
            width: 1,
            height: 1,
            pixel_ratio: 1.0,
            frames: 0,
        };
        viewport.resize(width, height);
        viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn orbit(&self) -> &OrbitLimits {
        &self.orbit
    }

    /// Logical surface size
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Physical surface size after the pixel ratio is applied
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width as f32 * self.pixel_ratio) as u32,
            (self.height as f32 * self.pixel_ratio) as u32,
        )
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Set the device pixel ratio, capped at [`MAX_PIXEL_RATIO`]
    ///
    /// Only the top is capped; zoomed-out displays legitimately report
    /// ratios below 1. A missing or nonsensical ratio falls back to 1.
    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        let ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        };
        self.pixel_ratio = ratio.min(MAX_PIXEL_RATIO);
    }

    /// Frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl ViewportHost for Viewport {
    fn fit_to_object(&mut self, graph: &AssetGraph) {
        let Some((min, max)) = graph.bounding_box() else {
            // nothing to frame; fall back to the boot pose
            warn!("fit requested for an empty object");
            self.camera.reset_pose();
            self.orbit = OrbitLimits::default();
            return;
        };

        match self.camera.fit_bounds(min, max, DEFAULT_FIT_OFFSET) {
            Some(camera_z) => {
                self.orbit.target = self.camera.target;
                self.orbit.max_distance = camera_z * 10.0;
                debug!(camera_z, "camera framed object");
            }
            None => warn!("fit requested for a zero-extent object"),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.camera.aspect_ratio = self.width as f32 / self.height as f32;
    }

    fn render(&mut self) {
        // reads state only; an empty session draws nothing extra
        self.frames += 1;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}
