//! Disclosure list configuration and TOML definitions.
//!
//! A [`DisclosureConfig`] is fixed when a list is built: its exclusivity
//! never changes afterwards, while theme and animation may be swapped through
//! [`DisclosureList::reconfigure`].
//!
//! Page-composition code usually describes a whole list, items included, in
//! a [`DisclosureDefinition`]:
//!
//! ```toml
//! exclusivity = "multiple"
//! theme = "dark"
//! animation = "fade"
//! initial_open = [0]
//! list_id = "experience"
//!
//! [[items]]
//! title = "Rust"
//! content = "Systems programming"
//! ```
//!
//! Unknown `theme` and `animation` names fall back to `default` and `slide`.
//! An unknown `exclusivity` is a parse error.

use std::path::{Path, PathBuf};

use folio_core::logging::{span_names, targets};
use folio_style::{AnimationKind, ThemeKind};
use serde::{Deserialize, Serialize};

use crate::widget::{DEFAULT_LIST_ID, DisclosureItem, DisclosureList};

/// Result type alias for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors from loading a disclosure definition.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The definition file could not be read.
    #[error("Failed to read disclosure definition '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The definition text is not valid.
    #[error("Invalid disclosure definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// The definition file is not valid.
    #[error("Invalid disclosure definition '{path}': {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The definition could not be written out.
    #[error("Failed to serialize disclosure definition: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Whether opening one item closes the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exclusivity {
    /// At most one item open at a time.
    #[default]
    Single,
    /// Items open and close independently.
    Multiple,
}

/// Construction-time configuration for a disclosure list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosureConfig {
    /// Exclusivity policy.
    pub exclusivity: Exclusivity,
    /// Theme table selector.
    pub theme: ThemeKind,
    /// Animation table selector.
    pub animation: AnimationKind,
}

impl DisclosureConfig {
    /// Create a configuration with the given policy and default tables.
    pub fn new(exclusivity: Exclusivity) -> Self {
        Self {
            exclusivity,
            ..Self::default()
        }
    }

    /// Set exclusivity using builder pattern.
    pub fn with_exclusivity(mut self, exclusivity: Exclusivity) -> Self {
        self.exclusivity = exclusivity;
        self
    }

    /// Set theme using builder pattern.
    pub fn with_theme(mut self, theme: ThemeKind) -> Self {
        self.theme = theme;
        self
    }

    /// Set animation using builder pattern.
    pub fn with_animation(mut self, animation: AnimationKind) -> Self {
        self.animation = animation;
        self
    }
}

/// A complete list description: configuration, items and initial state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisclosureDefinition {
    /// Policy and table selectors.
    #[serde(flatten)]
    pub config: DisclosureConfig,
    /// Indices open when the list is built.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_open: Vec<i32>,
    /// Element id prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    /// Items, in display order.
    #[serde(default)]
    pub items: Vec<DisclosureItem>,
}

impl DisclosureDefinition {
    /// Parse a definition from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(Self::parse(text)?)
    }

    /// Load a definition from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let _span = tracing::trace_span!(
            target: targets::CONFIG,
            span_names::CONFIG_LOAD,
            path = %path.display()
        )
        .entered();

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let definition: Self = toml::from_str(text)?;
        tracing::debug!(
            target: targets::CONFIG,
            items = definition.items.len(),
            "parsed disclosure definition"
        );
        Ok(definition)
    }

    /// Render the definition as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the list this definition describes.
    pub fn into_list(self) -> DisclosureList {
        let list = DisclosureList::with_initial_open(self.items, self.config, self.initial_open);
        list.with_list_id(self.list_id.unwrap_or_else(|| DEFAULT_LIST_ID.to_string()))
    }
}
