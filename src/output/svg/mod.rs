//! SVG chart generation primitives.
//!
//! Provides building blocks for standalone, responsive SVG charts:
//! - viewBox-based scaling (renders at any size)
//! - Explicit colors; no document-wide styling state
//! - Accessibility: `<title>` elements for screen readers

mod builder;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use element::{Axis, AxisOrientation, Colorbar, Dot, SvgElement};
pub use format::{format_tick, html_escape, truncate_label};
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
