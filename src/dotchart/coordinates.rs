//! Output of the coordinate generator.

use serde::Serialize;

/// Parallel x / y / color sequences for a dot chart.
///
/// `C` defaults to `()` for charts generated without color keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DotCoordinates<T, C = ()> {
    /// Input values in traversal order (sorted by color key when one was given).
    pub x: Vec<T>,
    /// 1-based running occurrence count of each `x` value.
    pub y: Vec<usize>,
    /// Color keys reordered alongside `x`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<C>>,
    /// Advisory y-axis upper bound.
    pub recommended_ymax: usize,
    /// Scale used to derive `recommended_ymax`.
    pub ymax_scale: f64,
}

impl<T, C> DotCoordinates<T, C> {
    pub(crate) const fn new(
        x: Vec<T>,
        y: Vec<usize>,
        color: Option<Vec<C>>,
        recommended_ymax: usize,
        ymax_scale: f64,
    ) -> Self {
        Self {
            x,
            y,
            color,
            recommended_ymax,
            ymax_scale,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Height of the tallest stack.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.y.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub const fn has_color(&self) -> bool {
        self.color.is_some()
    }

    /// Split into `(x_out, y, color_out)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Vec<usize>, Option<Vec<C>>) {
        (self.x, self.y, self.color)
    }

    /// Human-readable y-limit recommendation.
    #[must_use]
    pub fn ylim_advice(&self) -> String {
        format!(
            "For better visibility, set the y-axis limits to [0, {}]. Fine tune appropriately.",
            self.recommended_ymax
        )
    }
}

impl<T> DotCoordinates<T> {
    /// Re-type an uncolored result so it can be handled like a colored one.
    #[must_use]
    pub fn without_color<C>(self) -> DotCoordinates<T, C> {
        DotCoordinates::new(
            self.x,
            self.y,
            None,
            self.recommended_ymax,
            self.ymax_scale,
        )
    }
}

#[cfg(test)]
#[path = "coordinates_tests.rs"]
mod tests;
