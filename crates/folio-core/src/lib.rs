//! Core systems for Folio.
//!
//! This crate provides the foundational pieces shared by Folio widgets:
//!
//! - **Errors**: The [`DisclosureError`] taxonomy and index validation
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Logging**: `tracing` targets and span names for filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use folio_core::Signal;
//!
//! let item_toggled = Signal::<(i32, bool)>::new();
//!
//! let conn_id = item_toggled.connect(|&(index, open)| {
//!     println!("item {index} is now {}", if open { "open" } else { "closed" });
//! });
//!
//! item_toggled.emit((1, true));
//! item_toggled.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{DisclosureError, Result, checked_index};
pub use signal::{ConnectionId, Signal};
