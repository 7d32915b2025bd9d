//! Animation selection for expanding and collapsing content.
//!
//! Each [`AnimationKind`] names a static table of start/end classes plus the
//! duration and easing the renderer should use to get between them.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use folio_style::animation::{AnimationKind, Easing};
//!
//! let fade = AnimationKind::Fade.descriptor();
//! assert_eq!(fade.duration, Duration::from_millis(700));
//! assert_eq!(fade.easing, Easing::EaseInOut);
//! ```

mod builtin;
mod easing;

pub use builtin::AnimationDescriptor;
pub use easing::Easing;

use std::fmt;
use std::str::FromStr;

use folio_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A named animation table.
///
/// Unknown names resolve to [`AnimationKind::Slide`] through
/// [`AnimationKind::from_name`] and through deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnimationKind {
    /// Height and opacity.
    #[default]
    Slide,
    /// Opacity with a small vertical drift.
    Fade,
    /// Opacity with a slight zoom.
    Scale,
    /// Slide with a longer run.
    Elastic,
}

impl AnimationKind {
    /// All built-in animations, in table order.
    pub const ALL: [AnimationKind; 4] = [
        AnimationKind::Slide,
        AnimationKind::Fade,
        AnimationKind::Scale,
        AnimationKind::Elastic,
    ];

    /// The table key for this animation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Slide => "slide",
            Self::Fade => "fade",
            Self::Scale => "scale",
            Self::Elastic => "elastic",
        }
    }

    /// Look up an animation by name, falling back to [`AnimationKind::Slide`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(target: targets::STYLE_LOOKUP, name, "unknown animation, using slide");
            Self::Slide
        })
    }

    /// The descriptor table for this animation.
    pub fn descriptor(self) -> &'static AnimationDescriptor {
        builtin::table(self)
    }
}

impl FromStr for AnimationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_animation(name))
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for AnimationKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<AnimationKind> for String {
    fn from(kind: AnimationKind) -> Self {
        kind.name().to_string()
    }
}
