use std::fmt::Write;

use crate::dotchart::DotCoordinates;
use crate::error::Result;
use crate::series::Value;

use super::{ColorMode, CoordsFormatter, ansi};

/// Plain-text table of coordinates, one point per row.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::BOLD, ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl CoordsFormatter for TextFormatter {
    fn format(&self, coords: &DotCoordinates<Value, Value>) -> Result<String> {
        let x_labels: Vec<String> = coords.x.iter().map(ToString::to_string).collect();
        let x_width = x_labels
            .iter()
            .map(|s| s.chars().count())
            .chain(std::iter::once(1))
            .max()
            .unwrap_or(1);
        let y_width = coords.max_count().to_string().len().max(1);

        let mut output = String::new();
        let mut header = format!("{:<x_width$}  {:>y_width$}", "x", "y");
        if coords.has_color() {
            header.push_str("  color");
        }
        writeln!(output, "{}", self.header(header.trim_end())).ok();

        for (i, (x, y)) in x_labels.iter().zip(&coords.y).enumerate() {
            let mut row = format!("{x:<x_width$}  {y:>y_width$}");
            if let Some(key) = coords.color.as_ref().and_then(|keys| keys.get(i)) {
                write!(row, "  {key}").ok();
            }
            writeln!(output, "{row}").ok();
        }

        writeln!(output).ok();
        writeln!(
            output,
            "{} points, tallest stack {}, recommended ymax {}",
            coords.len(),
            coords.max_count(),
            coords.recommended_ymax
        )
        .ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
