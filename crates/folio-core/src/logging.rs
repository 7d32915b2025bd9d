//! Logging facilities for Folio.
//!
//! Folio uses the `tracing` crate for instrumentation. The library crates only
//! emit events; to see them, install a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("folio::disclosure=debug")
//!         .init();
//!
//!     // Build and drive disclosure lists...
//! }
//! ```
//!
//! # Levels
//!
//! - `trace`: signal emission, every toggle call
//! - `debug`: committed open-set changes, rejected indices
//! - `warn`: lenient fallbacks (unknown theme or animation names, trimmed
//!   initial-open indices)

/// Span names used throughout Folio for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "folio::signal";
    /// Disclosure list toggle span.
    pub const TOGGLE: &str = "folio::disclosure::toggle";
    /// Keyboard handling span.
    pub const KEY: &str = "folio::disclosure::key";
    /// Definition loading span.
    pub const CONFIG_LOAD: &str = "folio::config::load";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "folio_core::signal";
    /// Disclosure list state target.
    pub const DISCLOSURE: &str = "folio::disclosure";
    /// Definition loading target.
    pub const CONFIG: &str = "folio::config";
    /// Descriptor table lookup target.
    pub const STYLE_LOOKUP: &str = "folio_style::lookup";
}

/// Render an open set for log fields, e.g. `{0, 2}`.
pub fn format_open_set<'a>(indices: impl IntoIterator<Item = &'a usize>) -> String {
    let parts: Vec<String> = indices.into_iter().map(|i| i.to_string()).collect();
    format!("{{{}}}", parts.join(", "))
}
