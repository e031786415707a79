//! Core traits for showroom

use nalgebra::Point3;

/// Trait for resources that own GPU-side allocations
///
/// Disposal is idempotent: calling [`Disposable::dispose`] on an already
/// disposed resource has no effect.
pub trait Disposable {
    /// Release the resource's backing allocation
    fn dispose(&self);

    /// Whether the resource has been released
    fn is_disposed(&self) -> bool;
}

/// Trait for objects with a spatial extent
pub trait Bounded {
    /// Get the axis-aligned bounding box, or `None` for empty objects
    fn bounding_box(&self) -> Option<(Point3<f32>, Point3<f32>)>;

    /// Get the center point of the bounding box, or `None` for empty objects
    fn center(&self) -> Option<Point3<f32>> {
        self.bounding_box().map(|(min, max)| {
            Point3::new(
                (min.x + max.x) / 2.0,
                (min.y + max.y) / 2.0,
                (min.z + max.z) / 2.0,
            )
        })
    }
}
