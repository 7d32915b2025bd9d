//! Error types for the styling tables.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from strict name parsing.
///
/// The lenient lookups ([`ThemeKind::from_name`](crate::ThemeKind::from_name),
/// [`AnimationKind::from_name`](crate::AnimationKind::from_name)) never fail;
/// these errors only come out of the `FromStr` implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No theme table has this name.
    #[error("Unknown theme '{0}' (expected default, dark or gradient)")]
    UnknownTheme(String),

    /// No animation table has this name.
    #[error("Unknown animation '{0}' (expected slide, fade, scale or elastic)")]
    UnknownAnimation(String),

    /// No easing curve has this name.
    #[error("Unknown easing '{0}'")]
    UnknownEasing(String),
}

impl Error {
    /// Create an unknown-theme error.
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme(name.into())
    }

    /// Create an unknown-animation error.
    pub fn unknown_animation(name: impl Into<String>) -> Self {
        Self::UnknownAnimation(name.into())
    }

    /// Create an unknown-easing error.
    pub fn unknown_easing(name: impl Into<String>) -> Self {
        Self::UnknownEasing(name.into())
    }
}
