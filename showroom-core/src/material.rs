//! Materials with named texture slots
//!
//! Materials are shared by reference between the meshes of one asset graph.
//! Texture-valued properties live in an open slot map rather than fixed
//! fields: material variants carry different slot sets, and release must
//! cover whatever a material actually holds.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::texture::TextureHandle;
use crate::traits::Disposable;

/// Well-known texture channel slot names
pub mod channel {
    pub const BASE_COLOR: &str = "base_color";
    pub const NORMAL: &str = "normal";
    pub const AMBIENT_OCCLUSION: &str = "ambient_occlusion";
    pub const ROUGHNESS: &str = "roughness";
    pub const METALNESS: &str = "metalness";

    /// The channels transferred during a texture swap
    pub const PBR_CHANNELS: [&str; 5] = [
        BASE_COLOR,
        NORMAL,
        AMBIENT_OCCLUSION,
        ROUGHNESS,
        METALNESS,
    ];
}

/// A named surface-appearance object
#[derive(Debug)]
pub struct Material {
    name: String,
    slots: BTreeMap<String, TextureHandle>,
    needs_update: bool,
    disposed: bool,
}

/// Shared, mutable handle to a material
pub type MaterialHandle = Rc<RefCell<Material>>;

/// Non-owning handle into a loaded model's materials
pub type WeakMaterialHandle = Weak<RefCell<Material>>;

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: BTreeMap::new(),
            needs_update: false,
            disposed: false,
        }
    }

    /// Create a shared handle directly
    pub fn shared(name: impl Into<String>) -> MaterialHandle {
        Rc::new(RefCell::new(Self::new(name)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install a texture into a named slot, replacing any previous holder
    pub fn set_texture(&mut self, slot: impl Into<String>, texture: TextureHandle) {
        self.slots.insert(slot.into(), texture);
    }

    /// The texture in a named slot, if any
    pub fn texture(&self, slot: &str) -> Option<TextureHandle> {
        self.slots.get(slot).cloned()
    }

    /// Every texture-valued slot this material currently carries
    pub fn slots(&self) -> impl Iterator<Item = (&str, &TextureHandle)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Flag the material for GPU re-upload
    pub fn mark_needs_update(&mut self) {
        self.needs_update = true;
    }

    /// Release every texture reachable from this material, then the material
    ///
    /// Scans all slots rather than an enumerated channel list, so texture
    /// properties added by richer material variants are covered too.
    /// Idempotent.
    pub fn dispose(&mut self) {
        for texture in self.slots.values() {
            texture.dispose();
        }
        self.slots.clear();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::{Texture, TextureImage};

    #[test]
    fn dispose_releases_every_slot() {
        let diffuse = Texture::shared("diffuse", TextureImage::solid([255, 0, 0, 255]));
        let sheen = Texture::shared("sheen", TextureImage::solid([0, 255, 0, 255]));

        let mat = Material::shared("Bricks026");
        mat.borrow_mut()
            .set_texture(channel::BASE_COLOR, diffuse.clone());
        // a slot outside the enumerated channel set must be released too
        mat.borrow_mut().set_texture("sheen_color", sheen.clone());

        mat.borrow_mut().dispose();

        assert!(mat.borrow().is_disposed());
        assert_eq!(mat.borrow().slot_count(), 0);
        assert!(diffuse.is_disposed());
        assert!(sheen.is_disposed());
    }

    #[test]
    fn set_texture_replaces_previous_holder() {
        let first = Texture::shared("a", TextureImage::solid([1, 1, 1, 255]));
        let second = Texture::shared("b", TextureImage::solid([2, 2, 2, 255]));

        let mat = Material::shared("Roof");
        mat.borrow_mut().set_texture(channel::NORMAL, first);
        mat.borrow_mut().set_texture(channel::NORMAL, second.clone());

        let held = mat.borrow().texture(channel::NORMAL).unwrap();
        assert!(Rc::ptr_eq(&held, &second));
    }
}
