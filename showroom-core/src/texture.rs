//! Texture resources
//!
//! Textures are shared by reference between materials, so the backing image
//! lives behind interior mutability and disposal is observable from every
//! holder of the handle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::traits::Disposable;

/// Decoded image payload backing a texture
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A 1x1 placeholder image, useful in tests and procedural assets
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: rgba.to_vec(),
        }
    }
}

/// A named texture resource
///
/// The image payload is dropped on [`dispose`](Disposable::dispose); the
/// handle itself stays valid so late readers observe a released resource
/// instead of dangling.
#[derive(Debug)]
pub struct Texture {
    name: String,
    image: RefCell<Option<TextureImage>>,
    needs_update: Cell<bool>,
}

/// Shared handle to a texture
pub type TextureHandle = Rc<Texture>;

impl Texture {
    pub fn new(name: impl Into<String>, image: TextureImage) -> Self {
        Self {
            name: name.into(),
            image: RefCell::new(Some(image)),
            needs_update: Cell::new(false),
        }
    }

    /// Create a shared handle directly
    pub fn shared(name: impl Into<String>, image: TextureImage) -> TextureHandle {
        Rc::new(Self::new(name, image))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy of the current image payload, if not disposed
    pub fn image(&self) -> Option<TextureImage> {
        self.image.borrow().clone()
    }

    /// Whether the texture is flagged for GPU re-upload
    pub fn needs_update(&self) -> bool {
        self.needs_update.get()
    }

    pub fn mark_needs_update(&self) {
        self.needs_update.set(true);
    }

    /// Clone into an independent texture flagged for upload
    ///
    /// The clone owns its own copy of the image, so mutating or disposing the
    /// source asset later cannot affect the clone.
    pub fn clone_for_upload(&self) -> TextureHandle {
        let clone = Texture {
            name: self.name.clone(),
            image: RefCell::new(self.image.borrow().clone()),
            needs_update: Cell::new(true),
        };
        Rc::new(clone)
    }
}

impl Disposable for Texture {
    fn dispose(&self) {
        self.image.borrow_mut().take();
    }

    fn is_disposed(&self) -> bool {
        self.image.borrow().is_none()
    }
}
