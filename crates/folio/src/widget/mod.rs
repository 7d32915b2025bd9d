//! Widget system for Folio.
//!
//! Folio widgets are headless: they own interaction state and resolve what
//! each part should look like, and leave drawing to whatever rendering layer
//! hosts them.
//!
//! - [`DisclosureList`]: An accordion of titled items under an exclusivity policy
//! - [`DisclosureItem`]: One title/content record
//! - [`DisclosureKey`]: The keys a focused list responds to
//! - [`HeaderAccessibility`]: ARIA attributes for a header and its panel

mod accessibility;
mod disclosure_list;
mod item;
mod keyboard;

pub use accessibility::{AccessibleRole, HeaderAccessibility};
pub use disclosure_list::{DEFAULT_LIST_ID, DisclosureEntry, DisclosureList, ItemTransition};
pub use item::DisclosureItem;
pub use keyboard::DisclosureKey;
