mod error_output;
mod json;
pub mod svg;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::dotchart::DotCoordinates;
use crate::error::Result;
use crate::series::Value;

/// Trait for formatting dot coordinates into various output formats.
pub trait CoordsFormatter {
    /// Format the coordinates into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, coords: &DotCoordinates<Value, Value>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl OutputFormat {
    /// Formatter for this format.
    #[must_use]
    pub fn formatter(self, mode: ColorMode) -> Box<dyn CoordsFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(mode)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
