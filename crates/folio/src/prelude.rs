//! Prelude module for Folio.
//!
//! ```ignore
//! use folio::prelude::*;
//! ```

pub use crate::config::{DisclosureConfig, DisclosureDefinition, Exclusivity};
pub use crate::signal::{ConnectionId, Signal};
pub use crate::widget::{
    DisclosureEntry, DisclosureItem, DisclosureKey, DisclosureList, ItemTransition,
};
pub use crate::{DisclosureError, Result};
pub use folio_style::prelude::*;
