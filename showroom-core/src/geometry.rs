//! Mesh geometry buffers

use std::cell::RefCell;

use nalgebra::Point3;

use crate::traits::{Bounded, Disposable};

/// Vertex and index buffers for one mesh
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    pub positions: Vec<Point3<f32>>,
    pub indices: Vec<[u32; 3]>,
}

/// Geometry owned by a single mesh node
///
/// Disposal drops the buffers in place; the node structure survives so a
/// traversal over a released graph stays well defined.
#[derive(Debug)]
pub struct Geometry {
    data: RefCell<Option<GeometryData>>,
}

impl Geometry {
    pub fn new(positions: Vec<Point3<f32>>, indices: Vec<[u32; 3]>) -> Self {
        Self {
            data: RefCell::new(Some(GeometryData { positions, indices })),
        }
    }

    /// Number of vertices, zero after disposal
    pub fn vertex_count(&self) -> usize {
        self.data
            .borrow()
            .as_ref()
            .map_or(0, |d| d.positions.len())
    }

    /// Number of triangles, zero after disposal
    pub fn triangle_count(&self) -> usize {
        self.data.borrow().as_ref().map_or(0, |d| d.indices.len())
    }

    /// Copy of the buffers, if not disposed
    pub fn data(&self) -> Option<GeometryData> {
        self.data.borrow().clone()
    }
}

impl Disposable for Geometry {
    fn dispose(&self) {
        self.data.borrow_mut().take();
    }

    fn is_disposed(&self) -> bool {
        self.data.borrow().is_none()
    }
}

impl Bounded for Geometry {
    fn bounding_box(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let data = self.data.borrow();
        let positions = &data.as_ref()?.positions;
        let first = *positions.first()?;

        let mut min = first;
        let mut max = first;
        for p in positions {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Geometry {
        Geometry::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn bounding_box_covers_all_vertices() {
        let geo = unit_triangle();
        let (min, max) = geo.bounding_box().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(geo.center().unwrap(), Point3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn dispose_clears_buffers_and_bounds() {
        let geo = unit_triangle();
        assert_eq!(geo.vertex_count(), 3);

        geo.dispose();
        assert!(geo.is_disposed());
        assert_eq!(geo.vertex_count(), 0);
        assert_eq!(geo.triangle_count(), 0);
        assert!(geo.bounding_box().is_none());
    }
}
