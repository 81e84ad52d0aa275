use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::ErrorOutput;
use crate::{DotplotError, EXIT_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print(&e);
            EXIT_ERROR
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DotplotError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# dotplot configuration file

[generate]
# Recommended y-axis bound = floor(tallest stack * ymax_scale) (default: 1.25)
# Earlier releases used 1.5.
ymax_scale = 1.25

# Sort color keys descending instead of ascending (default: false)
reverse = false

[render]
# Built-in theme (classic, lavender, dark, minimal) or colormap name
# (viridis, plasma, inferno, magma, cividis, RdYlGn, coolwarm, Blues, Greys;
# append _r to reverse). Run `dotplot themes` for the full list.
# theme = "classic"

# Draw a colorbar when color keys are given (default: true)
colorbar = true

xlabel = ""
ylabel = "Count"
title = ""
# colorbar_label = ""

# Marker area in square pixels (default: 60)
dot_size = 60.0

# Canvas size in pixels (minimum 100)
width = 800.0
height = 500.0

# Fixed y-axis upper bound instead of the recommended one
# ylim = 10
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
