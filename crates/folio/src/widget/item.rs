//! Disclosure item records.

use serde::{Deserialize, Serialize};

/// One entry in a disclosure list.
///
/// The title is always visible; the content only while the item is open.
/// Items are immutable once handed to a list, and are identified by their
/// position in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureItem {
    title: String,
    content: String,
}

impl DisclosureItem {
    /// Create an item.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The header text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The body text.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<T: Into<String>, C: Into<String>> From<(T, C)> for DisclosureItem {
    fn from((title, content): (T, C)) -> Self {
        Self::new(title, content)
    }
}
