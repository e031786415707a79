//! Perspective camera with fit-to-object framing

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

/// Vertical field of view of the viewer camera, radians
pub const DEFAULT_FOV: f32 = 60.0 * std::f32::consts::PI / 180.0;

/// Extra breathing room around a framed object
pub const DEFAULT_FIT_OFFSET: f32 = 1.5;

const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 50_000.0;

fn default_position() -> Point3<f32> {
    Point3::new(0.0, 2.0, 5.0)
}

/// A perspective camera for framing loaded models
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far).into_inner()
    }

    /// Return to the default pose used before anything is loaded
    pub fn reset_pose(&mut self) {
        self.position = default_position();
        self.target = Point3::origin();
        self.near = DEFAULT_NEAR;
        self.far = DEFAULT_FAR;
    }

    /// Frame an axis-aligned bounding box
    ///
    /// Places the eye above and in front of the box center at a distance
    /// derived from the field of view, and tightens the clipping planes to
    /// the framed distance. Returns the framing distance so the caller can
    /// derive orbit limits, or `None` for a degenerate (zero-extent) box,
    /// which leaves the camera unchanged.
    pub fn fit_bounds(
        &mut self,
        min: Point3<f32>,
        max: Point3<f32>,
        offset: f32,
    ) -> Option<f32> {
        let size = max - min;
        let center = Point3::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        );

        let max_dim = size.x.max(size.y).max(size.z);
        if max_dim <= 0.0 {
            return None;
        }

        let camera_z = (max_dim / (2.0 * (self.fov / 2.0).tan())) * offset;

        self.position = Point3::new(center.x, center.y + max_dim * 0.5, center.z + camera_z);
        self.target = center;
        self.near = (camera_z / 100.0).max(0.01);
        self.far = (camera_z * 5.0).max(100.0);

        Some(camera_z)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: default_position(),
            target: Point3::origin(),
            up: Vector3::y(),
            fov: DEFAULT_FOV,
            aspect_ratio: 16.0 / 9.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fit_bounds_places_eye_at_derived_distance() {
        let mut camera = Camera::default();
        let camera_z = camera
            .fit_bounds(
                Point3::new(-1.0, 0.0, -1.0),
                Point3::new(1.0, 2.0, 1.0),
                DEFAULT_FIT_OFFSET,
            )
            .unwrap();

        let expected = (2.0 / (2.0 * (DEFAULT_FOV / 2.0).tan())) * DEFAULT_FIT_OFFSET;
        assert_relative_eq!(camera_z, expected, epsilon = 1e-5);

        assert_relative_eq!(camera.target.x, 0.0);
        assert_relative_eq!(camera.target.y, 1.0);
        assert_relative_eq!(camera.position.y, 1.0 + 1.0); // center.y + max_dim/2
        assert_relative_eq!(camera.position.z, camera_z, epsilon = 1e-5);

        // clipping planes follow the framing distance, with floors
        assert_relative_eq!(camera.near, (camera_z / 100.0).max(0.01), epsilon = 1e-6);
        assert_relative_eq!(camera.far, (camera_z * 5.0).max(100.0), epsilon = 1e-3);
    }

    #[test]
    fn degenerate_box_leaves_camera_unchanged() {
        let mut camera = Camera::default();
        let before = camera.clone();
        let p = Point3::new(3.0, 3.0, 3.0);

        assert!(camera.fit_bounds(p, p, DEFAULT_FIT_OFFSET).is_none());
        assert_eq!(camera.position, before.position);
        assert_eq!(camera.target, before.target);
    }

    #[test]
    fn reset_pose_restores_defaults() {
        let mut camera = Camera::default();
        camera
            .fit_bounds(
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(100.0, 100.0, 100.0),
                DEFAULT_FIT_OFFSET,
            )
            .unwrap();

        camera.reset_pose();
        assert_eq!(camera.position, Point3::new(0.0, 2.0, 5.0));
        assert_eq!(camera.target, Point3::origin());
        assert_relative_eq!(camera.near, 0.1);
        assert_relative_eq!(camera.far, 50_000.0);
    }

    #[test]
    fn matrices_are_well_formed() {
        let camera = Camera::default();
        let view = camera.view_matrix();
        let proj = camera.projection_matrix();

        // the default pose looks at the origin, so it maps to a point on the
        // negative z axis in view space
        let origin = view.transform_point(&Point3::origin());
        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-6);
        assert!(origin.z < 0.0);

        assert!(proj[(0, 0)] > 0.0);
        assert!(proj[(1, 1)] > 0.0);
    }
}
