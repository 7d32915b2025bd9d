//! Disclosure list implementation.
//!
//! This module provides [`DisclosureList`], an accordion-style list of items
//! with clickable headers. Which items are expanded is governed by an
//! [`Exclusivity`] policy: `Single` keeps at most one item open, `Multiple`
//! lets every item toggle independently.
//!
//! The list never draws anything. A renderer enumerates
//! [`entries`](DisclosureList::entries), applies each entry's
//! [`VisualDescriptor`] and ARIA attributes, and forwards header clicks as
//! [`toggle`](DisclosureList::toggle) calls.
//!
//! # Example
//!
//! ```
//! use folio::widget::{DisclosureItem, DisclosureList};
//! use folio::config::DisclosureConfig;
//!
//! let items = vec![
//!     DisclosureItem::new("Rust", "Systems programming"),
//!     DisclosureItem::new("TypeScript", "Front-end work"),
//! ];
//! let mut list = DisclosureList::new(items, DisclosureConfig::default());
//!
//! list.item_toggled.connect(|t| {
//!     println!("item {} is now {}", t.index, t.to);
//! });
//!
//! list.toggle(1)?;
//! assert!(list.is_open(1)?);
//! # Ok::<(), folio::DisclosureError>(())
//! ```

use std::collections::BTreeSet;
use std::time::Duration;

use folio_core::logging::{format_open_set, span_names, targets};
use folio_core::{Result, Signal, checked_index};
use folio_style::{AnimationKind, Easing, ItemStatus, ThemeKind, VisualDescriptor, resolve};

use super::accessibility::HeaderAccessibility;
use super::item::DisclosureItem;
use super::keyboard::{DisclosureKey, next_focus};
use crate::config::{DisclosureConfig, Exclusivity};

/// Default element id prefix for headers and panels.
pub const DEFAULT_LIST_ID: &str = "disclosure";

/// One item's status change, emitted after the list has committed it.
///
/// Carries the animation contract for the change: the renderer animates the
/// item from `from` to `to` over `duration` with `easing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTransition {
    /// Index of the item that changed.
    pub index: usize,
    /// Status before the change.
    pub from: ItemStatus,
    /// Status after the change.
    pub to: ItemStatus,
    /// Intended transition duration.
    pub duration: Duration,
    /// Intended easing curve.
    pub easing: Easing,
}

/// A renderable snapshot of one item.
#[derive(Debug, Clone)]
pub struct DisclosureEntry<'a> {
    /// Position of the item in the list.
    pub index: usize,
    /// The item itself.
    pub item: &'a DisclosureItem,
    /// Open or closed.
    pub status: ItemStatus,
    /// Whether the item's header has keyboard focus.
    pub focused: bool,
    /// Resolved classes for the current status.
    pub descriptor: VisualDescriptor,
    /// ARIA attributes for header and panel.
    pub accessibility: HeaderAccessibility,
}

impl DisclosureEntry<'_> {
    /// Check if the item is open.
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

/// An accordion-style list of disclosure items.
///
/// # Features
///
/// - Single or multiple open items, fixed at construction
/// - Theme and animation tables, replaceable via [`reconfigure`](Self::reconfigure)
/// - Keyboard navigation between headers
/// - Per-item ARIA attributes
///
/// # Atomicity
///
/// Every toggle computes the complete new open set, commits it, and only then
/// emits [`item_toggled`](Self::item_toggled). Slots therefore never observe
/// an intermediate state; under `Single`, switching from item `i` to item `j`
/// is seen as one step with exactly one item open on either side.
///
/// # Signals
///
/// - `item_toggled(ItemTransition)`: Emitted once per item whose status changed
pub struct DisclosureList {
    /// Items, in display order.
    items: Vec<DisclosureItem>,

    /// Indices of expanded items.
    open: BTreeSet<usize>,

    /// Exclusivity policy plus theme and animation selectors.
    config: DisclosureConfig,

    /// Header with keyboard focus, if any.
    focused: Option<usize>,

    /// Prefix for generated element ids.
    list_id: String,

    /// Signal emitted when an item opens or closes.
    pub item_toggled: Signal<ItemTransition>,
}

impl DisclosureList {
    /// Create a list with every item closed.
    pub fn new(items: impl IntoIterator<Item = DisclosureItem>, config: DisclosureConfig) -> Self {
        Self::with_initial_open(items, config, [])
    }

    /// Create a list with some items initially open.
    ///
    /// Indices outside the item range are dropped. Under
    /// [`Exclusivity::Single`] only the lowest remaining index is kept; under
    /// [`Exclusivity::Multiple`] all of them are.
    pub fn with_initial_open(
        items: impl IntoIterator<Item = DisclosureItem>,
        config: DisclosureConfig,
        initial_open: impl IntoIterator<Item = i32>,
    ) -> Self {
        let items: Vec<DisclosureItem> = items.into_iter().collect();
        let open = trim_initial_open(initial_open, items.len(), config.exclusivity);

        tracing::debug!(
            target: targets::DISCLOSURE,
            items = items.len(),
            exclusivity = ?config.exclusivity,
            theme = %config.theme,
            animation = %config.animation,
            open = %format_open_set(&open),
            "disclosure list created"
        );

        Self {
            items,
            open,
            config,
            focused: None,
            list_id: DEFAULT_LIST_ID.to_string(),
            item_toggled: Signal::new(),
        }
    }

    /// Set the element id prefix using builder pattern.
    pub fn with_list_id(mut self, list_id: impl Into<String>) -> Self {
        self.list_id = list_id.into();
        self
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in display order.
    pub fn items(&self) -> &[DisclosureItem] {
        &self.items
    }

    /// Get the item at an index.
    pub fn item(&self, index: i32) -> Result<&DisclosureItem> {
        let index = checked_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    /// The element id prefix.
    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    // =========================================================================
    // Open State
    // =========================================================================

    /// Check if the item at `index` is open.
    pub fn is_open(&self, index: i32) -> Result<bool> {
        let index = checked_index(index, self.items.len())?;
        Ok(self.open.contains(&index))
    }

    /// Indices of open items, ascending.
    pub fn open_indices(&self) -> Vec<usize> {
        self.open.iter().copied().collect()
    }

    /// Toggle the item at `index`.
    ///
    /// An open item closes under either policy. A closed item opens; under
    /// [`Exclusivity::Single`] every other item closes in the same step.
    /// Out-of-range indices fail with
    /// [`DisclosureError::InvalidIndex`](folio_core::DisclosureError::InvalidIndex)
    /// and change nothing.
    pub fn toggle(&mut self, index: i32) -> Result<()> {
        let _span = tracing::trace_span!(target: targets::DISCLOSURE, span_names::TOGGLE, index).entered();
        let index = checked_index(index, self.items.len()).inspect_err(|err| {
            tracing::debug!(target: targets::DISCLOSURE, %err, "toggle rejected");
        })?;

        let next = self.toggled_open_set(index);
        let transitions = self.transitions_to(&next);
        self.open = next;

        tracing::debug!(
            target: targets::DISCLOSURE,
            index,
            open = %format_open_set(&self.open),
            "item toggled"
        );

        for transition in transitions {
            self.item_toggled.emit(transition);
        }
        Ok(())
    }

    /// The open set that results from toggling `index`.
    fn toggled_open_set(&self, index: usize) -> BTreeSet<usize> {
        if self.open.contains(&index) {
            let mut next = self.open.clone();
            next.remove(&index);
            return next;
        }

        match self.config.exclusivity {
            Exclusivity::Multiple => {
                let mut next = self.open.clone();
                next.insert(index);
                next
            }
            Exclusivity::Single => BTreeSet::from([index]),
        }
    }

    /// Transitions between the current open set and `next`.
    ///
    /// Closings come before openings so a renderer can start collapsing the
    /// old item before expanding the new one.
    fn transitions_to(&self, next: &BTreeSet<usize>) -> Vec<ItemTransition> {
        let animation = self.config.animation.descriptor();
        let make = |index: usize, to: ItemStatus| ItemTransition {
            index,
            from: to.toggled(),
            to,
            duration: animation.duration,
            easing: animation.easing,
        };

        let closed = self.open.difference(next).map(|&i| make(i, ItemStatus::Closed));
        let opened = next.difference(&self.open).map(|&i| make(i, ItemStatus::Open));
        closed.chain(opened).collect()
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Get the configuration.
    pub fn config(&self) -> &DisclosureConfig {
        &self.config
    }

    /// Get the exclusivity policy.
    pub fn exclusivity(&self) -> Exclusivity {
        self.config.exclusivity
    }

    /// Get the theme selector.
    pub fn theme(&self) -> ThemeKind {
        self.config.theme
    }

    /// Get the animation selector.
    pub fn animation(&self) -> AnimationKind {
        self.config.animation
    }

    /// Replace the theme and/or animation selectors.
    ///
    /// The open set and the exclusivity policy are left untouched; build a
    /// new list to change the policy.
    pub fn reconfigure(&mut self, theme: Option<ThemeKind>, animation: Option<AnimationKind>) {
        if let Some(theme) = theme {
            self.config.theme = theme;
        }
        if let Some(animation) = animation {
            self.config.animation = animation;
        }
        tracing::debug!(
            target: targets::DISCLOSURE,
            theme = %self.config.theme,
            animation = %self.config.animation,
            "disclosure list reconfigured"
        );
    }

    /// Resolve the visual descriptor for the item at `index`.
    pub fn describe(&self, index: i32) -> Result<VisualDescriptor> {
        let open = self.is_open(index)?;
        Ok(self.descriptor_for(open))
    }

    fn descriptor_for(&self, open: bool) -> VisualDescriptor {
        resolve(
            self.config.theme,
            self.config.animation,
            ItemStatus::from_open(open),
        )
    }

    /// Snapshot every item with its status, focus, descriptor and ARIA
    /// attributes.
    pub fn entries(&self) -> Vec<DisclosureEntry<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let open = self.open.contains(&index);
                DisclosureEntry {
                    index,
                    item,
                    status: ItemStatus::from_open(open),
                    focused: self.focused == Some(index),
                    descriptor: self.descriptor_for(open),
                    accessibility: HeaderAccessibility::new(&self.list_id, index, item.title(), open),
                }
            })
            .collect()
    }

    // =========================================================================
    // Focus & Keyboard
    // =========================================================================

    /// Header with keyboard focus, if any.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Move keyboard focus to a header. Never changes which items are open.
    pub fn set_focus(&mut self, index: i32) -> Result<()> {
        let index = checked_index(index, self.items.len())?;
        self.focused = Some(index);
        Ok(())
    }

    /// Drop keyboard focus.
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Handle a key pressed while the list has focus.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: DisclosureKey) -> Result<bool> {
        let _span = tracing::trace_span!(target: targets::DISCLOSURE, span_names::KEY, ?key).entered();
        if self.items.is_empty() {
            return Ok(false);
        }

        if key.is_activation() {
            let Some(focused) = self.focused else {
                return Ok(false);
            };
            self.toggle(focused as i32)?;
            return Ok(true);
        }

        match next_focus(key, self.focused, self.items.len()) {
            Some(next) => {
                self.focused = Some(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Drop invalid indices and apply the exclusivity policy.
fn trim_initial_open(
    initial_open: impl IntoIterator<Item = i32>,
    len: usize,
    exclusivity: Exclusivity,
) -> BTreeSet<usize> {
    let mut valid = BTreeSet::new();
    for index in initial_open {
        match checked_index(index, len) {
            Ok(index) => {
                valid.insert(index);
            }
            Err(err) => {
                tracing::warn!(target: targets::DISCLOSURE, %err, "dropping initial open index");
            }
        }
    }

    if exclusivity == Exclusivity::Single && valid.len() > 1 {
        let lowest = valid.first().copied();
        tracing::warn!(
            target: targets::DISCLOSURE,
            requested = %format_open_set(&valid),
            kept = ?lowest,
            "single exclusivity keeps only the lowest initial open index"
        );
        valid = lowest.into_iter().collect();
    }

    valid
}

// Ensure DisclosureList is Send + Sync
static_assertions::assert_impl_all!(DisclosureList: Send, Sync);
