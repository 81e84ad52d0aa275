//! Presentation options for a rendered dot chart.

use serde::{Deserialize, Serialize};

/// Presentation options. Also the `[render]` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    /// Built-in theme or colormap name; `None` selects the default theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Draw a colorbar when color keys are present.
    #[serde(default = "default_true")]
    pub colorbar: bool,

    #[serde(default)]
    pub xlabel: String,

    #[serde(default = "default_ylabel")]
    pub ylabel: String,

    #[serde(default)]
    pub title: String,

    /// Caption above the colorbar.
    #[serde(default)]
    pub colorbar_label: String,

    /// Marker area; the dot radius is `sqrt(dot_size) / 2`.
    #[serde(default = "default_dot_size")]
    pub dot_size: f64,

    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Fixed y-axis upper bound instead of the recommended one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ylim: Option<usize>,
}

const fn default_true() -> bool {
    true
}

fn default_ylabel() -> String {
    "Count".to_string()
}

const fn default_dot_size() -> f64 {
    60.0
}

const fn default_width() -> f64 {
    800.0
}

const fn default_height() -> f64 {
    500.0
}

/// Smallest accepted canvas side.
pub const MIN_CANVAS_SIZE: f64 = 100.0;

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: None,
            colorbar: true,
            xlabel: String::new(),
            ylabel: default_ylabel(),
            title: String::new(),
            colorbar_label: String::new(),
            dot_size: default_dot_size(),
            width: default_width(),
            height: default_height(),
            ylim: None,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    #[must_use]
    pub fn with_labels(mut self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self.ylabel = ylabel.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn with_colorbar(mut self, colorbar: bool) -> Self {
        self.colorbar = colorbar;
        self
    }

    #[must_use]
    pub const fn with_dot_size(mut self, dot_size: f64) -> Self {
        self.dot_size = dot_size;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_ylim(mut self, ylim: usize) -> Self {
        self.ylim = Some(ylim);
        self
    }

    /// Dot radius derived from the marker area.
    #[must_use]
    pub fn dot_radius(&self) -> f64 {
        self.dot_size.sqrt() / 2.0
    }

    /// Check the numeric options. The theme name is resolved separately.
    ///
    /// # Errors
    /// Returns a description of the first invalid option.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.dot_size.is_finite() || self.dot_size <= 0.0 {
            return Err(format!("dot_size must be positive, got {}", self.dot_size));
        }
        if !self.width.is_finite() || self.width < MIN_CANVAS_SIZE {
            return Err(format!(
                "width must be at least {MIN_CANVAS_SIZE}, got {}",
                self.width
            ));
        }
        if !self.height.is_finite() || self.height < MIN_CANVAS_SIZE {
            return Err(format!(
                "height must be at least {MIN_CANVAS_SIZE}, got {}",
                self.height
            ));
        }
        if self.ylim == Some(0) {
            return Err("ylim must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
