//! Pure layout step: coordinates + options + style -> positioned chart.

use indexmap::IndexSet;

use crate::dotchart::DotCoordinates;
use crate::output::svg::{ChartColor, format_tick, truncate_label};
use crate::series::Value;
use crate::theme::ChartStyle;

use super::RenderOptions;

/// Number of segments used to draw a colorbar.
pub(crate) const COLORBAR_SEGMENTS: usize = 32;
/// Categories beyond this count get thinned-out tick labels.
const MAX_CATEGORY_LABELS: usize = 40;
const CATEGORY_LABEL_CHARS: usize = 12;
const MAX_Y_TICKS: usize = 10;
const MAX_X_TICKS: usize = 12;

/// Plot area inside the canvas, in SVG coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// One positioned dot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDot {
    pub cx: f64,
    pub cy: f64,
    pub color: ChartColor,
    pub label: String,
}

/// Colorbar contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorbarPlan {
    pub segments: Vec<ChartColor>,
    pub min_label: String,
    pub max_label: String,
}

/// Everything needed to draw the chart, with no further decisions left.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub width: f64,
    pub height: f64,
    pub style: ChartStyle,
    pub area: PlotArea,
    /// Y-axis upper bound actually used.
    pub ymax: usize,
    /// Tick positions as fractions of the axis length.
    pub x_ticks: Vec<(f64, String)>,
    pub y_ticks: Vec<(f64, String)>,
    pub dots: Vec<PlannedDot>,
    pub radius: f64,
    pub colorbar: Option<ColorbarPlan>,
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub colorbar_label: String,
}

impl RenderPlan {
    /// Lay out `coords` on a canvas described by `options`, colored by `style`.
    #[must_use]
    pub fn build(
        coords: &DotCoordinates<Value, Value>,
        options: &RenderOptions,
        style: ChartStyle,
    ) -> Self {
        let colors = coords
            .color
            .as_deref()
            .map(|keys| ColorScale::from_keys(keys, style));
        let show_colorbar = options.colorbar && colors.is_some();
        let area = plot_area(options, show_colorbar);

        let ymax = select_ymax(coords, options.ylim);
        let x_scale = XScale::from_values(&coords.x);

        let dots = coords
            .x
            .iter()
            .zip(&coords.y)
            .enumerate()
            .map(|(i, (x, count))| {
                let key = coords.color.as_ref().map(|keys| &keys[i]);
                PlannedDot {
                    cx: x_scale.position(x).mul_add(area.width, area.left),
                    cy: y_position(*count, ymax).mul_add(-area.height, area.bottom()),
                    color: colors
                        .as_ref()
                        .zip(key)
                        .map_or(style.dot, |(scale, key)| scale.color(key)),
                    label: dot_label(x, *count, key),
                }
            })
            .collect();

        let colorbar = if show_colorbar {
            colors.as_ref().map(ColorScale::colorbar)
        } else {
            None
        };

        Self {
            width: options.width,
            height: options.height,
            style,
            area,
            ymax,
            x_ticks: x_scale.ticks(),
            y_ticks: y_ticks(ymax),
            dots,
            radius: options.dot_radius(),
            colorbar,
            title: options.title.clone(),
            xlabel: options.xlabel.clone(),
            ylabel: options.ylabel.clone(),
            colorbar_label: options.colorbar_label.clone(),
        }
    }
}

/// Y-axis bound: the override or the recommendation, never below the tallest stack.
fn select_ymax<C>(coords: &DotCoordinates<Value, C>, ylim: Option<usize>) -> usize {
    ylim.unwrap_or(coords.recommended_ymax)
        .max(coords.max_count())
        .max(1)
}

fn plot_area(options: &RenderOptions, colorbar: bool) -> PlotArea {
    let left = 64.0;
    let right = if colorbar { 110.0 } else { 30.0 };
    let top = if options.title.is_empty() { 24.0 } else { 52.0 };
    let bottom = if options.xlabel.is_empty() { 40.0 } else { 60.0 };
    PlotArea {
        left,
        top,
        width: (options.width - left - right).max(1.0),
        height: (options.height - top - bottom).max(1.0),
    }
}

#[allow(clippy::cast_precision_loss)]
fn y_position(count: usize, ymax: usize) -> f64 {
    count as f64 / ymax as f64
}

#[allow(clippy::cast_precision_loss)]
fn y_ticks(ymax: usize) -> Vec<(f64, String)> {
    let step = ymax.div_ceil(MAX_Y_TICKS).max(1);
    (0..=ymax)
        .step_by(step)
        .map(|tick| (tick as f64 / ymax as f64, tick.to_string()))
        .collect()
}

fn dot_label(x: &Value, count: usize, key: Option<&Value>) -> String {
    key.map_or_else(
        || format!("{x} (#{count})"),
        |key| format!("{x} (#{count}), {key}"),
    )
}

/// Finite numeric view of a slice, or `None` if any element is not a finite number.
fn finite_numbers(values: &[Value]) -> Option<Vec<f64>> {
    values
        .iter()
        .map(|v| v.as_f64().filter(|f| f.is_finite()))
        .collect()
}

fn min_max(numbers: &[f64]) -> (f64, f64) {
    numbers
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Horizontal placement of x values.
enum XScale {
    /// Numeric domain, already padded.
    Linear { lo: f64, hi: f64 },
    /// Distinct values in first-appearance order, one band each.
    Categorical { categories: IndexSet<Value> },
}

impl XScale {
    fn from_values(values: &[Value]) -> Self {
        if let Some(numbers) = finite_numbers(values) {
            let (min, max) = min_max(&numbers);
            let magnitude = min.abs().max(max.abs()).max(1.0);
            // A spread lost in rounding is widened relative to the magnitude.
            let (min, max) = if max - min <= magnitude * 1e-9 {
                let widen = (magnitude * 1e-6).max(1.0);
                (min - widen, max + widen)
            } else {
                (min, max)
            };
            let pad = (max - min) * 0.05;
            let (lo, hi) = (min - pad, max + pad);
            if (hi - lo).is_finite() && hi > lo {
                return Self::Linear { lo, hi };
            }
        }
        Self::Categorical {
            categories: values.iter().cloned().collect(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn position(&self, value: &Value) -> f64 {
        match self {
            Self::Linear { lo, hi } => {
                value.as_f64().map_or(0.5, |v| (v - lo) / (hi - lo))
            }
            Self::Categorical { categories } => {
                let index = categories.get_index_of(value).unwrap_or(0);
                (index as f64 + 0.5) / categories.len().max(1) as f64
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn ticks(&self) -> Vec<(f64, String)> {
        match self {
            Self::Linear { lo, hi } => {
                let step = nice_step((hi - lo) / 5.0);
                let first = (lo / step).ceil() * step;
                (0..)
                    .map(|k| f64::from(k).mul_add(step, first))
                    .take_while(|tick| tick <= hi)
                    .take(MAX_X_TICKS)
                    .map(|tick| ((tick - lo) / (hi - lo), format_tick(tick)))
                    .collect()
            }
            Self::Categorical { categories } => {
                let every = categories.len().div_ceil(MAX_CATEGORY_LABELS).max(1);
                let count = categories.len() as f64;
                categories
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| i % every == 0)
                    .map(|(i, value)| {
                        (
                            (i as f64 + 0.5) / count,
                            truncate_label(&value.to_string(), CATEGORY_LABEL_CHARS),
                        )
                    })
                    .collect()
            }
        }
    }
}

/// Round a raw step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Mapping from color keys to colors.
struct ColorScale {
    kind: ColorScaleKind,
    style: ChartStyle,
}

enum ColorScaleKind {
    Numeric { min: f64, max: f64 },
    /// Distinct keys in ascending order.
    Ranked { keys: Vec<Value> },
}

impl ColorScale {
    fn from_keys(keys: &[Value], style: ChartStyle) -> Self {
        let kind = if let Some(numbers) = finite_numbers(keys) {
            let (min, max) = min_max(&numbers);
            ColorScaleKind::Numeric { min, max }
        } else {
            let mut distinct = keys.to_vec();
            distinct.sort();
            distinct.dedup();
            ColorScaleKind::Ranked { keys: distinct }
        };
        Self { kind, style }
    }

    #[allow(clippy::cast_precision_loss)]
    fn fraction(&self, key: &Value) -> f64 {
        match &self.kind {
            ColorScaleKind::Numeric { min, max } => {
                if (max - min).abs() < f64::EPSILON {
                    0.5
                } else {
                    key.as_f64().map_or(0.5, |v| (v - min) / (max - min))
                }
            }
            ColorScaleKind::Ranked { keys } => {
                if keys.len() < 2 {
                    return 0.5;
                }
                let rank = keys.binary_search(key).unwrap_or(0);
                rank as f64 / (keys.len() - 1) as f64
            }
        }
    }

    fn color(&self, key: &Value) -> ChartColor {
        self.style.colormap.sample(self.fraction(key))
    }

    fn colorbar(&self) -> ColorbarPlan {
        let (min_label, max_label) = match &self.kind {
            ColorScaleKind::Numeric { min, max } => (format_tick(*min), format_tick(*max)),
            ColorScaleKind::Ranked { keys } => (
                keys.first().map(ToString::to_string).unwrap_or_default(),
                keys.last().map(ToString::to_string).unwrap_or_default(),
            ),
        };
        ColorbarPlan {
            segments: self.style.colormap.gradient(COLORBAR_SEGMENTS),
            min_label,
            max_label,
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
