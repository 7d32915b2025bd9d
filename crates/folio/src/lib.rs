//! Folio - a rendering-agnostic disclosure list for portfolio sites.
//!
//! This is the umbrella crate: it provides the [`DisclosureList`] widget and
//! re-exports the core and style crates.
//!
//! # Example
//!
//! ```
//! use folio::prelude::*;
//!
//! let mut list = DisclosureList::new(
//!     vec![
//!         DisclosureItem::new("Experience", "Five years of backend work"),
//!         DisclosureItem::new("Projects", "Open-source tooling"),
//!         DisclosureItem::new("Contact", "hello@example.com"),
//!     ],
//!     DisclosureConfig::new(Exclusivity::Single).with_theme(ThemeKind::Gradient),
//! );
//!
//! list.toggle(1)?;
//! list.toggle(0)?;
//!
//! for entry in list.entries() {
//!     println!(
//!         "{} [{}] class=\"{}\"",
//!         entry.item.title(),
//!         entry.status,
//!         entry.descriptor.style.container
//!     );
//! }
//! assert_eq!(list.open_indices(), vec![0]);
//! # Ok::<(), folio::DisclosureError>(())
//! ```

pub use folio_core::*;

/// Theme and animation tables.
pub mod style {
    pub use folio_style::*;
}

pub mod config;
pub mod prelude;
pub mod widget;

pub use config::{ConfigError, DisclosureConfig, DisclosureDefinition, Exclusivity};
pub use widget::{DisclosureItem, DisclosureList};
