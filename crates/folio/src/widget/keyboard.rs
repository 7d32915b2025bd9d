//! Keyboard contract for disclosure headers.

/// Keys a disclosure list responds to while one of its headers has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisclosureKey {
    /// Focus the previous header, wrapping to the last.
    ArrowUp,
    /// Focus the next header, wrapping to the first.
    ArrowDown,
    /// Focus the first header.
    Home,
    /// Focus the last header.
    End,
    /// Toggle the focused header.
    Enter,
    /// Toggle the focused header.
    Space,
}

impl DisclosureKey {
    /// Check if this key activates (toggles) the focused header.
    pub fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Where focus lands after a navigation key, for a list of `count` headers.
///
/// Returns `None` for activation keys and for empty lists.
pub(crate) fn next_focus(key: DisclosureKey, current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let last = count - 1;
    match key {
        DisclosureKey::ArrowDown => Some(match current {
            Some(i) if i < last => i + 1,
            Some(_) => 0,
            None => 0,
        }),
        DisclosureKey::ArrowUp => Some(match current {
            Some(0) | None => last,
            Some(i) => i - 1,
        }),
        DisclosureKey::Home => Some(0),
        DisclosureKey::End => Some(last),
        DisclosureKey::Enter | DisclosureKey::Space => None,
    }
}
