//! Material name index over the loaded model

use std::collections::HashMap;

use showroom_core::{AssetGraph, MaterialHandle, WeakMaterialHandle};
use tracing::debug;

/// Mapping from material name to a non-owning material handle
///
/// Rebuilt on every (re)load and cleared on unload. Entries point into the
/// loaded model's own resources, so releasing the model invalidates them;
/// an entry that no longer upgrades is treated as absent.
#[derive(Debug, Default)]
pub struct MaterialIndex {
    by_name: HashMap<String, WeakMaterialHandle>,
}

impl MaterialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a freshly loaded graph for named materials
    ///
    /// Duplicate names resolve last-write-wins in traversal order.
    pub fn build(graph: &AssetGraph) -> Self {
        let mut by_name = HashMap::new();
        graph.visit_meshes(|mesh| {
            for material in &mesh.materials {
                let name = material.borrow().name().to_string();
                if !name.is_empty() {
                    by_name.insert(name, std::rc::Rc::downgrade(material));
                }
            }
        });
        debug!(materials = by_name.len(), "material index rebuilt");
        Self { by_name }
    }

    /// Resolve a material by name, if it is still alive
    pub fn get(&self, name: &str) -> Option<MaterialHandle> {
        self.by_name.get(name).and_then(|weak| weak.upgrade())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names of all indexed materials, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use showroom_core::{AssetGraph, Geometry, GroupNode, Material, MeshNode, SceneNode};
    use std::rc::Rc;

    fn geometry() -> Geometry {
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
    fn indexes_every_named_material() {
        let walls = Material::shared("Bricks026");
        let roof = Material::shared("RoofTiles");
        let graph = AssetGraph::new(SceneNode::Group(GroupNode::new(
            "house",
            vec![
                SceneNode::Mesh(MeshNode::new("walls", geometry(), walls.clone())),
                SceneNode::Mesh(MeshNode::new("roof", geometry(), roof)),
            ],
        )));

        let index = MaterialIndex::build(&graph);
        assert_eq!(index.names(), vec!["Bricks026", "RoofTiles"]);
        assert!(Rc::ptr_eq(&index.get("Bricks026").unwrap(), &walls));
    }

    #[test]
    fn duplicate_names_resolve_last_write_wins() {
        let first = Material::shared("Bricks026");
        let second = Material::shared("Bricks026");
        let graph = AssetGraph::new(SceneNode::Group(GroupNode::new(
            "house",
            vec![
                SceneNode::Mesh(MeshNode::new("a", geometry(), first)),
                SceneNode::Mesh(MeshNode::new("b", geometry(), second.clone())),
            ],
        )));

        let index = MaterialIndex::build(&graph);
        assert_eq!(index.len(), 1);
        assert!(Rc::ptr_eq(&index.get("Bricks026").unwrap(), &second));
    }

    #[test]
    fn dropped_model_invalidates_entries() {
        let mat = Material::shared("Bricks026");
        let graph = AssetGraph::new(SceneNode::Mesh(MeshNode::new("walls", geometry(), mat)));

        let index = MaterialIndex::build(&graph);
        assert!(index.contains("Bricks026"));

        drop(graph);
        assert!(index.get("Bricks026").is_none());
        assert!(!index.contains("Bricks026"));
    }
}
