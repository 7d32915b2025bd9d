//! Theme selection with built-in descriptor tables.

mod builtin;

pub use builtin::ThemeDescriptor;

use std::fmt;
use std::str::FromStr;

use folio_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A named theme table.
///
/// Unknown names resolve to [`ThemeKind::Default`] through
/// [`ThemeKind::from_name`] and through deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeKind {
    /// Light surfaces with blue accents.
    #[default]
    Default,
    /// Dark gray surfaces.
    Dark,
    /// Gray-to-purple gradient headers.
    Gradient,
}

impl ThemeKind {
    /// All built-in themes, in table order.
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Default, ThemeKind::Dark, ThemeKind::Gradient];

    /// The table key for this theme.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Gradient => "gradient",
        }
    }

    /// Look up a theme by name, falling back to [`ThemeKind::Default`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(target: targets::STYLE_LOOKUP, name, "unknown theme, using default");
            Self::Default
        })
    }

    /// The descriptor table for this theme.
    pub fn descriptor(self) -> &'static ThemeDescriptor {
        builtin::table(self)
    }
}

impl FromStr for ThemeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_theme(name))
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for ThemeKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ThemeKind> for String {
    fn from(kind: ThemeKind) -> Self {
        kind.name().to_string()
    }
}
