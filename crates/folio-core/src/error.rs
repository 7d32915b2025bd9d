//! Error types for Folio widgets.

/// Errors reported by disclosure list operations.
///
/// The only failure a disclosure list can produce is a caller handing it an
/// index outside `[0, len)`. Indices are never clamped: a clamped index would
/// silently change a different item than the one requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DisclosureError {
    /// The index does not address an item in the list.
    #[error("Invalid item index {index} (list has {len} items)")]
    InvalidIndex {
        /// The index the caller supplied.
        index: i32,
        /// The number of items in the list at the time of the call.
        len: usize,
    },
}

impl DisclosureError {
    /// Create an invalid-index error.
    pub fn invalid_index(index: i32, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }
}

/// A specialized Result type for disclosure operations.
pub type Result<T> = std::result::Result<T, DisclosureError>;

/// Validate `index` against a list of `len` items.
///
/// Returns the index as a `usize` when it addresses an existing item.
pub fn checked_index(index: i32, len: usize) -> Result<usize> {
    if index < 0 || index as usize >= len {
        return Err(DisclosureError::invalid_index(index, len));
    }
    Ok(index as usize)
}
