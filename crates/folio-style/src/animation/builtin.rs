//! Built-in animation tables.

use std::time::Duration;

use super::{AnimationKind, Easing};

/// Timing and transform classes for the expanding content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDescriptor {
    /// The animation this table belongs to.
    pub kind: AnimationKind,
    /// How long the open/close transition runs.
    pub duration: Duration,
    /// The intended easing curve.
    pub easing: Easing,
    /// Transition classes applied in both states.
    pub transition: &'static str,
    /// End state classes when open.
    pub open: &'static str,
    /// End state classes when closed.
    pub closed: &'static str,
}

static SLIDE: AnimationDescriptor = AnimationDescriptor {
    kind: AnimationKind::Slide,
    duration: Duration::from_millis(500),
    easing: Easing::EaseOut,
    transition: "transition-all duration-500 ease-out",
    open: "max-h-[500px] opacity-100",
    closed: "max-h-0 opacity-0",
};

static FADE: AnimationDescriptor = AnimationDescriptor {
    kind: AnimationKind::Fade,
    duration: Duration::from_millis(700),
    easing: Easing::EaseInOut,
    transition: "transition-all duration-700 ease-in-out",
    open: "max-h-[500px] opacity-100 translate-y-0",
    closed: "max-h-0 opacity-0 -translate-y-2",
};

static SCALE: AnimationDescriptor = AnimationDescriptor {
    kind: AnimationKind::Scale,
    duration: Duration::from_millis(600),
    easing: Easing::EaseOut,
    transition: "transition-all duration-600 ease-out",
    open: "max-h-[500px] opacity-100 scale-100",
    closed: "max-h-0 opacity-0 scale-95",
};

// Same end states as slide; the longer run is what reads as "elastic".
static ELASTIC: AnimationDescriptor = AnimationDescriptor {
    kind: AnimationKind::Elastic,
    duration: Duration::from_millis(800),
    easing: Easing::EaseOut,
    transition: "transition-all duration-800 ease-out",
    open: "max-h-[500px] opacity-100",
    closed: "max-h-0 opacity-0",
};

pub(super) fn table(kind: AnimationKind) -> &'static AnimationDescriptor {
    match kind {
        AnimationKind::Slide => &SLIDE,
        AnimationKind::Fade => &FADE,
        AnimationKind::Scale => &SCALE,
        AnimationKind::Elastic => &ELASTIC,
    }
}
