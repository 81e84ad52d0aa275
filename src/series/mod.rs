//! Ordered, indexable sequences accepted by the dot-chart generator.
//!
//! Anything that can report its length and iterate its values in order is a
//! series. Plain vectors, slices and arrays qualify, as does [`LabeledSeries`],
//! which pairs every value with an index label.

mod value;

pub use value::Value;

use crate::error::{DotplotError, Result};

/// Capability contract for an ordered sequence of values.
pub trait Series {
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values in sequence order.
    fn values(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T> Series for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Series for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Series for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

/// A series whose values carry index labels.
///
/// Labels travel with the data but never take part in counting or sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSeries<T> {
    labels: Vec<String>,
    values: Vec<T>,
}

impl<T> LabeledSeries<T> {
    /// Build a labeled series from parallel label and value vectors.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the two vectors differ in length.
    pub fn new(labels: Vec<String>, values: Vec<T>) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(DotplotError::InvalidInput(format!(
                "labeled series has {} labels but {} values",
                labels.len(),
                values.len()
            )));
        }
        Ok(Self { labels, values })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Drop the labels, keeping values in order.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Look up a value by its label (first match).
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&T> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| &self.values[i])
    }
}

impl<T> FromIterator<(String, T)> for LabeledSeries<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

impl<T> Series for LabeledSeries<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
