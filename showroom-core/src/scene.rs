//! Scene graph nodes and the loaded asset graph

use nalgebra::Point3;
use tracing::debug;

use crate::geometry::Geometry;
use crate::material::MaterialHandle;
use crate::traits::{Bounded, Disposable};

/// A non-leaf node grouping child nodes
#[derive(Debug)]
pub struct GroupNode {
    pub name: String,
    pub children: Vec<SceneNode>,
}

impl GroupNode {
    pub fn new(name: impl Into<String>, children: Vec<SceneNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

/// A renderable node carrying geometry and one or more shared materials
#[derive(Debug)]
pub struct MeshNode {
    pub name: String,
    pub geometry: Geometry,
    pub materials: Vec<MaterialHandle>,
}

impl MeshNode {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: MaterialHandle) -> Self {
        Self {
            name: name.into(),
            geometry,
            materials: vec![material],
        }
    }

    /// A mesh with multiple material groups
    pub fn with_materials(
        name: impl Into<String>,
        geometry: Geometry,
        materials: Vec<MaterialHandle>,
    ) -> Self {
        Self {
            name: name.into(),
            geometry,
            materials,
        }
    }
}

/// Closed set of node variants in an asset graph
#[derive(Debug)]
pub enum SceneNode {
    Group(GroupNode),
    Mesh(MeshNode),
}

impl SceneNode {
    pub fn name(&self) -> &str {
        match self {
            SceneNode::Group(g) => &g.name,
            SceneNode::Mesh(m) => &m.name,
        }
    }

    /// Depth-first visit of every mesh under this node
    pub fn visit_meshes<F: FnMut(&MeshNode)>(&self, f: &mut F) {
        match self {
            SceneNode::Mesh(mesh) => f(mesh),
            SceneNode::Group(group) => {
                for child in &group.children {
                    child.visit_meshes(f);
                }
            }
        }
    }
}

/// The hierarchical scene representation returned by an asset loader
#[derive(Debug)]
pub struct AssetGraph {
    root: SceneNode,
}

impl AssetGraph {
    pub fn new(root: SceneNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &SceneNode {
        &self.root
    }

    /// Depth-first visit of every mesh in the graph
    pub fn visit_meshes<F: FnMut(&MeshNode)>(&self, mut f: F) {
        self.root.visit_meshes(&mut f);
    }

    /// The first mesh's first material, in traversal order
    ///
    /// Texture assets are expected to hold exactly one mesh; this picks its
    /// material without requiring the caller to traverse.
    pub fn first_material(&self) -> Option<MaterialHandle> {
        let mut found = None;
        self.visit_meshes(|mesh| {
            if found.is_none() {
                found = mesh.materials.first().cloned();
            }
        });
        found
    }

    pub fn mesh_count(&self) -> usize {
        let mut n = 0;
        self.visit_meshes(|_| n += 1);
        n
    }

    /// Release every resource owned by this graph
    ///
    /// For each mesh: the geometry buffer, then every texture reachable from
    /// each of its materials' slots, then the material itself. Runs the same
    /// regardless of why the graph is being torn down.
    pub fn release_resources(&mut self) {
        let mut meshes = 0;
        self.root.visit_meshes(&mut |mesh| {
            mesh.geometry.dispose();
            for material in &mesh.materials {
                material.borrow_mut().dispose();
            }
            meshes += 1;
        });
        debug!(meshes, "released asset graph resources");
    }
}

impl Bounded for AssetGraph {
    fn bounding_box(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let mut bounds: Option<(Point3<f32>, Point3<f32>)> = None;
        self.visit_meshes(|mesh| {
            if let Some((lo, hi)) = mesh.geometry.bounding_box() {
                bounds = Some(match bounds {
                    None => (lo, hi),
                    Some((min, max)) => (
                        Point3::new(min.x.min(lo.x), min.y.min(lo.y), min.z.min(lo.z)),
                        Point3::new(max.x.max(hi.x), max.y.max(hi.y), max.z.max(hi.z)),
                    ),
                });
            }
        });
        bounds
    }
}
