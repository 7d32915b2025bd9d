//! ARIA contract for disclosure headers and panels.
//!
//! Folio does not build an accessibility tree. It hands the renderer the
//! attributes each header and panel must carry so assistive technology sees
//! a standard disclosure pattern: a button that reports `aria-expanded` and
//! points at the region it controls.

use std::fmt;

/// Accessibility roles used by a disclosure list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessibleRole {
    /// An item header.
    Button,
    /// An item's content panel.
    Region,
}

impl AccessibleRole {
    /// The ARIA role name.
    pub fn aria_name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Region => "region",
        }
    }
}

impl fmt::Display for AccessibleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.aria_name())
    }
}

/// Accessibility attributes for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderAccessibility {
    /// Role of the header element.
    pub role: AccessibleRole,
    /// Accessible name (the item title).
    pub name: String,
    /// Whether the controlled panel is expanded.
    pub expanded: bool,
    /// Element id of the header.
    pub header_id: String,
    /// Element id of the panel the header controls.
    pub controls: String,
}

impl HeaderAccessibility {
    pub(crate) fn new(list_id: &str, index: usize, title: &str, expanded: bool) -> Self {
        Self {
            role: AccessibleRole::Button,
            name: title.to_string(),
            expanded,
            header_id: format!("{list_id}-header-{index}"),
            controls: format!("{list_id}-panel-{index}"),
        }
    }

    /// Attributes for the header element.
    pub fn header_attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.header_id.clone()),
            ("role", self.role.aria_name().to_string()),
            ("aria-expanded", self.expanded.to_string()),
            ("aria-controls", self.controls.clone()),
        ]
    }

    /// Attributes for the panel element.
    pub fn panel_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("id", self.controls.clone()),
            ("role", AccessibleRole::Region.aria_name().to_string()),
            ("aria-labelledby", self.header_id.clone()),
        ];
        if !self.expanded {
            attrs.push(("hidden", String::new()));
        }
        attrs
    }
}
