//! Status outcomes shown to the user
//!
//! Successful operations and deliberate no-ops both produce a [`Status`];
//! its `Display` text is the status line the UI shows.

use std::fmt;

/// Outcome of a session operation that did not error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// A model was installed and framed
    ModelLoaded { name: String, materials: usize },
    /// The texture swap landed on the target material
    TextureApplied { material: String },
    /// The one-shot gate was already consumed for this model
    TextureAlreadyApplied,
    /// A texture operation was requested with nothing loaded
    NoModelLoaded,
    /// The session returned to its initial state
    SelectionReset,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::ModelLoaded { name, materials } => {
                write!(f, "Loaded model: {name} ({materials} materials)")
            }
            Status::TextureApplied { material } => {
                write!(f, "Texture applied to \"{material}\" (once)")
            }
            Status::TextureAlreadyApplied => write!(f, "Texture already applied (once only)"),
            Status::NoModelLoaded => write!(f, "Load a model first"),
            Status::SelectionReset => write!(f, "Selection reset"),
        }
    }
}
