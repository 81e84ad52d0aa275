//! Dot-chart coordinate generation.
//!
//! A dot chart stacks repeated x-values vertically: the k-th occurrence of a
//! value is drawn at height k. Optionally the points are first ordered by a
//! color key so that later colors paint over earlier ones predictably.

mod coordinates;

pub use coordinates::DotCoordinates;

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{DotplotError, Result};
use crate::series::Series;

/// Default factor applied to the tallest stack to get the advisory y-axis bound.
pub const DEFAULT_YMAX_SCALE: f64 = 1.25;

/// Factor used by earlier releases; kept for callers relying on the old headroom.
pub const LEGACY_YMAX_SCALE: f64 = 1.5;

/// Options for coordinate generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    /// Sort color keys descending instead of ascending. Ignored without color keys.
    pub reverse: bool,
    /// Multiplier for the recommended y-axis bound.
    pub ymax_scale: f64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            reverse: false,
            ymax_scale: DEFAULT_YMAX_SCALE,
        }
    }
}

impl GenerateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub const fn with_ymax_scale(mut self, scale: f64) -> Self {
        self.ymax_scale = scale;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.ymax_scale.is_finite() || self.ymax_scale <= 0.0 {
            return Err(DotplotError::InvalidInput(format!(
                "ymax scale must be a positive finite number, got {}",
                self.ymax_scale
            )));
        }
        Ok(())
    }
}

/// `floor(max_count * scale)`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn recommended_ymax(max_count: usize, scale: f64) -> usize {
    (max_count as f64 * scale).floor() as usize
}

/// Generate dot-chart coordinates for `x` in its original order.
///
/// # Errors
/// Returns `InvalidInput` if `x` is empty or the scale is not a positive
/// finite number.
pub fn generate_dot_coordinates<X>(
    x: &X,
    options: &GenerateOptions,
) -> Result<DotCoordinates<X::Item>>
where
    X: Series + ?Sized,
    X::Item: Clone + Eq + Hash,
{
    options.validate()?;
    ensure_non_empty(x.len())?;

    let ordered: Vec<X::Item> = x.values().cloned().collect();
    let (x_out, y, max_count) = stack_occurrences(ordered);

    Ok(DotCoordinates::new(
        x_out,
        y,
        None,
        recommended_ymax(max_count, options.ymax_scale),
        options.ymax_scale,
    ))
}

/// Generate dot-chart coordinates for `x` ordered by `color_by`.
///
/// Pairs are stable-sorted by color key, ascending unless `options.reverse`.
/// Equal keys keep their original relative order.
///
/// # Errors
/// Returns `InvalidInput` if `x` is empty, the lengths differ, or the scale is
/// not a positive finite number.
pub fn generate_colored_dot_coordinates<X, C>(
    x: &X,
    color_by: &C,
    options: &GenerateOptions,
) -> Result<DotCoordinates<X::Item, C::Item>>
where
    X: Series + ?Sized,
    X::Item: Clone + Eq + Hash,
    C: Series + ?Sized,
    C::Item: Clone + Ord,
{
    options.validate()?;
    ensure_non_empty(x.len())?;
    if x.len() != color_by.len() {
        return Err(DotplotError::InvalidInput(format!(
            "x and color_by must have the same length ({} vs {})",
            x.len(),
            color_by.len()
        )));
    }

    let mut pairs: Vec<(X::Item, C::Item)> = x
        .values()
        .cloned()
        .zip(color_by.values().cloned())
        .collect();
    if options.reverse {
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
    } else {
        pairs.sort_by(|a, b| a.1.cmp(&b.1));
    }
    let (ordered, color_out): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();

    let (x_out, y, max_count) = stack_occurrences(ordered);

    Ok(DotCoordinates::new(
        x_out,
        y,
        Some(color_out),
        recommended_ymax(max_count, options.ymax_scale),
        options.ymax_scale,
    ))
}

/// Colored coordinates when `color_by` is given, plain ones otherwise.
///
/// # Errors
/// Same as [`generate_colored_dot_coordinates`].
pub fn generate_coordinates<T, C>(
    x: &[T],
    color_by: Option<&[C]>,
    options: &GenerateOptions,
) -> Result<DotCoordinates<T, C>>
where
    T: Clone + Eq + Hash,
    C: Clone + Ord,
{
    match color_by {
        Some(keys) => generate_colored_dot_coordinates(x, keys, options),
        None => generate_dot_coordinates(x, options).map(DotCoordinates::without_color),
    }
}

fn ensure_non_empty(len: usize) -> Result<()> {
    if len == 0 {
        return Err(DotplotError::InvalidInput(
            "x must contain at least one value".to_string(),
        ));
    }
    Ok(())
}

/// Single left-to-right pass assigning each element its running occurrence count.
fn stack_occurrences<T: Clone + Eq + Hash>(ordered: Vec<T>) -> (Vec<T>, Vec<usize>, usize) {
    let mut seen: HashMap<T, usize> = HashMap::with_capacity(ordered.len());
    let mut y = Vec::with_capacity(ordered.len());
    let mut max_count = 0;

    for value in &ordered {
        let count = seen.entry(value.clone()).or_insert(0);
        *count += 1;
        max_count = max_count.max(*count);
        y.push(*count);
    }

    (ordered, y, max_count)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
