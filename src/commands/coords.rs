use crate::cli::{Cli, CoordsArgs};
use crate::config::Config;
use crate::dotchart::{DotCoordinates, generate_coordinates};
use crate::output::{ColorMode, ErrorOutput};
use crate::series::Value;
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

use super::context::{generate_options, load_config, load_input, write_output};

#[must_use]
pub fn run_coords(args: &CoordsArgs, cli: &Cli) -> i32 {
    let reporter = ErrorOutput::new(cli.color.into());
    match run_coords_impl(args, cli, &reporter) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            reporter.print(&e);
            EXIT_ERROR
        }
    }
}

/// Prints coordinates, then the y-limit recommendation unless `--quiet`.
///
/// # Errors
/// Returns an error if config or input loading fails, the input is invalid,
/// or the output cannot be written.
pub(crate) fn run_coords_impl(args: &CoordsArgs, cli: &Cli, reporter: &ErrorOutput) -> Result<i32> {
    let config = load_config(args.series.config.as_deref(), cli.no_config)?;
    let coords = compute_coordinates(args, &config)?;

    let color_mode = if args.output.is_some() {
        ColorMode::Never
    } else {
        cli.color.into()
    };
    let output = args.format.formatter(color_mode).format(&coords)?;
    write_output(args.output.as_deref(), output.as_bytes())?;

    if !cli.quiet {
        reporter.print_warning(&coords.ylim_advice(), None);
    }
    Ok(EXIT_SUCCESS)
}

pub(crate) fn compute_coordinates(
    args: &CoordsArgs,
    config: &Config,
) -> Result<DotCoordinates<Value, Value>> {
    let input = load_input(&args.series)?;
    let options = generate_options(config, &args.series);
    generate_coordinates(&input.x, input.color_by.as_deref(), &options)
}

#[cfg(test)]
#[path = "coords_tests.rs"]
mod tests;
