//! Theme and animation tables for Folio widgets.
//!
//! This crate holds the static descriptor tables a disclosure list resolves
//! its per-item visuals from:
//!
//! - **Themes**: `default`, `dark`, `gradient` surface and text classes
//! - **Animations**: `slide`, `fade`, `scale`, `elastic` start/end classes
//!   with duration and easing intent
//! - **Descriptors**: the resolved class lists for one item status
//!
//! Table lookups by name are lenient: an unknown theme resolves to
//! `default` and an unknown animation to `slide`.
//!
//! # Example
//!
//! ```
//! use folio_style::prelude::*;
//!
//! let desc = resolve(ThemeKind::Dark, AnimationKind::Fade, ItemStatus::Open);
//! assert!(desc.style.title.contains("text-blue-300"));
//! println!("class=\"{}\"", desc.animation.region);
//! ```

pub mod animation;
pub mod descriptor;
pub mod theme;
pub mod types;

mod error;

pub use animation::{AnimationDescriptor, AnimationKind, Easing};
pub use descriptor::{AnimationClasses, ItemStatus, StyleClasses, VisualDescriptor, resolve};
pub use error::{Error, Result};
pub use theme::{ThemeDescriptor, ThemeKind};
pub use types::ClassList;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::animation::{AnimationKind, Easing};
    pub use crate::descriptor::{ItemStatus, VisualDescriptor, resolve};
    pub use crate::theme::ThemeKind;
    pub use crate::types::ClassList;
}
