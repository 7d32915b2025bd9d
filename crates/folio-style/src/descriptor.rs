//! Visual descriptor resolution.
//!
//! A [`VisualDescriptor`] is the pure output of looking up a theme table and
//! an animation table for one item status. Nothing here is stored or
//! mutated; renderers call [`resolve`] (usually through a widget's
//! `describe`) after each state change and apply the result.

use std::fmt;
use std::time::Duration;

use crate::animation::{AnimationKind, Easing};
use crate::theme::ThemeKind;
use crate::types::ClassList;

// Chrome shared by every theme.
const CONTAINER_BASE: &str = "border rounded-xl shadow-sm transition-all duration-500 ease-out hover:shadow-lg";
const CONTAINER_OPEN: &str = "ring-2 ring-blue-500 ring-opacity-20 shadow-lg";
const CONTAINER_CLOSED: &str = "hover:shadow-md";
const HEADER_BASE: &str = "flex justify-between items-center w-full py-5 px-6 transition-all duration-500 ease-out";
const TITLE_BASE: &str = "font-semibold text-lg transition-all duration-500 ease-out";
const ICON_BASE: &str = "w-6 h-6 relative";
const CONTENT_BASE: &str = "py-5 px-6";

// Motion shared by every animation.
const ICON_TRANSITION: &str = "transition-all duration-700 ease-out";
const HALO_BASE: &str = "absolute inset-0 bg-blue-500 rounded-full transition-all duration-500 ease-out";
const REVEAL_TRANSITION: &str = "transition-all duration-700 ease-out";

/// Whether an item is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemStatus {
    /// Only the header is visible.
    #[default]
    Closed,
    /// Header and content are visible.
    Open,
}

impl ItemStatus {
    /// Status from an open flag.
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Check if this is [`ItemStatus::Open`].
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Closed => "closed",
        })
    }
}

/// Theme-derived classes for each part of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleClasses {
    /// The item's outer surface.
    pub container: ClassList,
    /// The clickable header row.
    pub header: ClassList,
    /// The title text inside the header.
    pub title: ClassList,
    /// The chevron icon.
    pub icon: ClassList,
    /// The content panel.
    pub content: ClassList,
}

/// Animation-derived classes and timing for each moving part of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationClasses {
    /// The collapsible region wrapping the content.
    pub region: ClassList,
    /// Chevron rotation.
    pub icon: ClassList,
    /// Backdrop behind the chevron.
    pub icon_halo: ClassList,
    /// Content slide-in inside the region.
    pub content_reveal: ClassList,
    /// Duration of the region transition.
    pub duration: Duration,
    /// Easing of the region transition.
    pub easing: Easing,
}

/// Resolved style and animation classes for one item's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualDescriptor {
    /// The status these classes were resolved for.
    pub status: ItemStatus,
    /// Theme classes.
    pub style: StyleClasses,
    /// Animation classes.
    pub animation: AnimationClasses,
}

/// Resolve the descriptor for an item in `status`.
pub fn resolve(theme: ThemeKind, animation: AnimationKind, status: ItemStatus) -> VisualDescriptor {
    VisualDescriptor {
        status,
        style: resolve_style(theme, status),
        animation: resolve_animation(animation, status),
    }
}

fn resolve_style(theme: ThemeKind, status: ItemStatus) -> StyleClasses {
    let table = theme.descriptor();
    let open = status.is_open();

    let container = if open {
        ClassList::parse(CONTAINER_BASE)
            .with(table.header_open)
            .with(CONTAINER_OPEN)
    } else {
        ClassList::parse(CONTAINER_BASE)
            .with(table.header)
            .with(CONTAINER_CLOSED)
    };

    StyleClasses {
        container,
        header: ClassList::parse(HEADER_BASE).with(if open { "rounded-t-xl" } else { "rounded-xl" }),
        title: ClassList::parse(TITLE_BASE).with(if open { table.text_open } else { table.text }),
        icon: ClassList::parse(ICON_BASE).with(if open { table.icon_open } else { table.icon }),
        content: ClassList::parse(CONTENT_BASE).with(table.content),
    }
}

fn resolve_animation(animation: AnimationKind, status: ItemStatus) -> AnimationClasses {
    let table = animation.descriptor();

    let (end_state, icon, halo, reveal) = match status {
        ItemStatus::Open => (
            table.open,
            "rotate-180 scale-110",
            "scale-150 opacity-10",
            "translate-y-0 opacity-100 delay-150",
        ),
        ItemStatus::Closed => (
            table.closed,
            "rotate-0 scale-100",
            "scale-0 opacity-0",
            "translate-y-4 opacity-0",
        ),
    };

    AnimationClasses {
        region: ClassList::parse(table.transition).with(end_state),
        icon: ClassList::parse(ICON_TRANSITION).with(icon),
        icon_halo: ClassList::parse(HALO_BASE).with(halo),
        content_reveal: ClassList::parse(REVEAL_TRANSITION).with(reveal),
        duration: table.duration,
        easing: table.easing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_default_slide() {
        let desc = resolve(ThemeKind::Default, AnimationKind::Slide, ItemStatus::Open);
        assert_eq!(desc.status, ItemStatus::Open);
        assert!(desc.style.container.contains("bg-blue-50"));
        assert!(desc.style.container.contains("ring-2"));
        assert!(desc.style.header.contains("rounded-t-xl"));
        assert!(desc.style.title.contains("text-blue-700"));
        assert!(desc.animation.region.contains("max-h-[500px]"));
        assert!(desc.animation.icon.contains("rotate-180"));
        assert!(desc.animation.content_reveal.contains("delay-150"));
    }

    #[test]
    fn test_closed_dark_fade() {
        let desc = resolve(ThemeKind::Dark, AnimationKind::Fade, ItemStatus::Closed);
        assert!(desc.style.container.contains("bg-gray-800"));
        assert!(desc.style.container.contains("hover:bg-gray-700"));
        assert!(!desc.style.container.contains("ring-2"));
        assert!(desc.style.header.contains("rounded-xl"));
        assert!(desc.style.icon.contains("text-gray-400"));
        assert!(desc.animation.region.contains("-translate-y-2"));
        assert!(desc.animation.icon_halo.contains("scale-0"));
        assert_eq!(desc.animation.duration, Duration::from_millis(700));
        assert_eq!(desc.animation.easing, Easing::EaseInOut);
    }

    #[test]
    fn test_content_surface_ignores_status() {
        for theme in ThemeKind::ALL {
            let open = resolve(theme, AnimationKind::Slide, ItemStatus::Open);
            let closed = resolve(theme, AnimationKind::Slide, ItemStatus::Closed);
            assert_eq!(open.style.content, closed.style.content);
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let a = resolve(ThemeKind::Gradient, AnimationKind::Elastic, ItemStatus::Open);
        let b = resolve(ThemeKind::Gradient, AnimationKind::Elastic, ItemStatus::Open);
        assert_eq!(a, b);
    }

    #[test]
    fn test_status_helpers() {
        assert_eq!(ItemStatus::from_open(true), ItemStatus::Open);
        assert_eq!(ItemStatus::Open.toggled(), ItemStatus::Closed);
        assert_eq!(ItemStatus::Closed.to_string(), "closed");
    }
}
