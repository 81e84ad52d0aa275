use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::theme::{ColormapKind, Theme};

#[must_use]
pub fn run_themes() -> i32 {
    print!("{}", format_themes());
    EXIT_SUCCESS
}

/// Listing of every name accepted by `--theme`.
#[must_use]
pub fn format_themes() -> String {
    let mut output = String::new();

    writeln!(output, "Themes:").ok();
    for theme in Theme::ALL {
        let marker = if theme == Theme::default() { " (default)" } else { "" };
        writeln!(
            output,
            "  {:<10} {}{marker}",
            theme.name(),
            theme.description()
        )
        .ok();
    }

    writeln!(output).ok();
    writeln!(output, "Colormaps (append _r to reverse):").ok();
    for kind in ColormapKind::ALL {
        writeln!(output, "  {}", kind.name()).ok();
    }

    output
}

#[cfg(test)]
#[path = "themes_tests.rs"]
mod tests;
