//! candlekit: deterministic financial chart rendering.
//!
//! A pure pipeline from an OHLCV bar series, indicator requests, drawing
//! primitives, and a color theme to a self-contained SVG document. The
//! engine performs no I/O and renders byte-identically for identical
//! configuration.

pub mod api;
pub mod core;
pub mod error;
pub mod indicators;
pub mod layout;
pub mod overlay;
pub mod render;
pub mod telemetry;
pub mod theme;

pub use crate::api::Chart;
pub use crate::core::{Bar, Viewport};
pub use crate::error::{ChartError, ChartResult};
pub use crate::theme::{RuntimeTheme, UITheme};

/// Static build identifier.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
