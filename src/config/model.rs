use serde::{Deserialize, Serialize};

use crate::dotchart::{DEFAULT_YMAX_SCALE, GenerateOptions};
use crate::render::RenderOptions;

/// Contents of `.dotplot.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub render: RenderOptions,
}

/// `[generate]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Multiplier for the recommended y-axis bound.
    #[serde(default = "default_ymax_scale")]
    pub ymax_scale: f64,

    /// Sort color keys descending.
    #[serde(default)]
    pub reverse: bool,
}

const fn default_ymax_scale() -> f64 {
    DEFAULT_YMAX_SCALE
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            ymax_scale: default_ymax_scale(),
            reverse: false,
        }
    }
}

impl GenerateConfig {
    #[must_use]
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions::new()
            .with_reverse(self.reverse)
            .with_ymax_scale(self.ymax_scale)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
