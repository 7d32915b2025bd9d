//! Built-in theme tables.

use super::ThemeKind;

/// Style classes contributed by a theme, split by item status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// The theme this table belongs to.
    pub kind: ThemeKind,
    /// Item surface while closed.
    pub header: &'static str,
    /// Item surface while open.
    pub header_open: &'static str,
    /// Title text while closed.
    pub text: &'static str,
    /// Title text while open.
    pub text_open: &'static str,
    /// Chevron color while closed.
    pub icon: &'static str,
    /// Chevron color while open.
    pub icon_open: &'static str,
    /// Content panel surface.
    pub content: &'static str,
}

static DEFAULT: ThemeDescriptor = ThemeDescriptor {
    kind: ThemeKind::Default,
    header: "bg-white hover:bg-gray-50 border-gray-200",
    header_open: "bg-blue-50 border-blue-200",
    text: "text-gray-800",
    text_open: "text-blue-700",
    icon: "text-gray-500",
    icon_open: "text-blue-600",
    content: "bg-white text-gray-700",
};

static DARK: ThemeDescriptor = ThemeDescriptor {
    kind: ThemeKind::Dark,
    header: "bg-gray-800 hover:bg-gray-700 border-gray-600",
    header_open: "bg-blue-900 border-blue-500",
    text: "text-gray-200",
    text_open: "text-blue-300",
    icon: "text-gray-400",
    icon_open: "text-blue-400",
    content: "bg-gray-800 text-gray-300",
};

static GRADIENT: ThemeDescriptor = ThemeDescriptor {
    kind: ThemeKind::Gradient,
    header: "bg-gradient-to-r from-gray-50 to-gray-100 hover:from-blue-50 hover:to-purple-50 border-gray-200",
    header_open: "bg-gradient-to-r from-blue-50 to-purple-50 border-blue-200",
    text: "text-gray-800",
    text_open: "text-blue-700",
    icon: "text-gray-500",
    icon_open: "text-purple-600",
    content: "bg-white text-gray-700",
};

pub(super) fn table(kind: ThemeKind) -> &'static ThemeDescriptor {
    match kind {
        ThemeKind::Default => &DEFAULT,
        ThemeKind::Dark => &DARK,
        ThemeKind::Gradient => &GRADIENT,
    }
}
