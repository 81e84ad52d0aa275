//! Dot-chart rendering.
//!
//! Rendering is split into a pure layout step ([`RenderPlan`]) and SVG
//! drawing ([`DotChart`]). [`render_dot_chart`] ties coordinate generation,
//! theme resolution and drawing together.

mod chart;
mod options;
mod plan;

pub use chart::DotChart;
pub use options::{MIN_CANVAS_SIZE, RenderOptions};
pub use plan::{ColorbarPlan, PlannedDot, PlotArea, RenderPlan};

use std::io::Write;

use crate::dotchart::{DotCoordinates, GenerateOptions, generate_coordinates};
use crate::error::{DotplotError, Result};
use crate::output::ErrorOutput;
use crate::output::svg::SvgElement;
use crate::series::Value;
use crate::theme::ThemeSelection;

/// Everything needed to draw one chart.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub x: &'a [Value],
    pub color_by: Option<&'a [Value]>,
    pub generate: GenerateOptions,
    pub options: &'a RenderOptions,
}

impl<'a> RenderRequest<'a> {
    #[must_use]
    pub fn new(x: &'a [Value], options: &'a RenderOptions) -> Self {
        Self {
            x,
            color_by: None,
            generate: GenerateOptions::default(),
            options,
        }
    }

    #[must_use]
    pub const fn with_color_by(mut self, color_by: &'a [Value]) -> Self {
        self.color_by = Some(color_by);
        self
    }

    #[must_use]
    pub const fn with_generate(mut self, generate: GenerateOptions) -> Self {
        self.generate = generate;
        self
    }

    /// Generate the coordinates for this request.
    ///
    /// # Errors
    /// Returns `InvalidInput` for empty or mismatched series.
    pub fn coordinates(&self) -> Result<DotCoordinates<Value, Value>> {
        generate_coordinates(self.x, self.color_by, &self.generate)
    }
}

/// What a render call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The SVG was written.
    Rendered {
        recommended_ymax: usize,
        /// Y-axis bound actually used.
        ymax: usize,
    },
    /// The theme name did not resolve; nothing was written.
    Skipped { theme: String },
}

/// Render a dot chart as SVG into `out`.
///
/// An unknown theme or colormap is not fatal: it is reported to `diagnostics`
/// and the call returns [`RenderOutcome::Skipped`] without writing.
///
/// # Errors
/// Returns `InvalidInput` for bad series or options, `Io` if writing fails.
pub fn render_dot_chart<W: Write, D: Write>(
    out: &mut W,
    request: &RenderRequest<'_>,
    reporter: &ErrorOutput,
    diagnostics: &mut D,
) -> Result<RenderOutcome> {
    let coords = request.coordinates()?;
    request
        .options
        .validate()
        .map_err(DotplotError::InvalidInput)?;

    let selection = match ThemeSelection::resolve(request.options.theme.as_deref()) {
        Ok(selection) => selection,
        Err(DotplotError::UnsupportedTheme { name }) => {
            let error = DotplotError::UnsupportedTheme { name: name.clone() };
            reporter.report(diagnostics, &error);
            return Ok(RenderOutcome::Skipped { theme: name });
        }
        Err(error) => return Err(error),
    };

    let plan = RenderPlan::build(&coords, request.options, selection.style());
    let ymax = plan.ymax;
    out.write_all(DotChart::new(plan).render().as_bytes())?;

    Ok(RenderOutcome::Rendered {
        recommended_ymax: coords.recommended_ymax,
        ymax,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
