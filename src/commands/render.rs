use crate::cli::{Cli, RenderArgs};
use crate::config::Config;
use crate::output::ErrorOutput;
use crate::render::{RenderOptions, RenderOutcome, RenderRequest, render_dot_chart};
use crate::{EXIT_ERROR, EXIT_RENDER_SKIPPED, EXIT_SUCCESS, Result};

use super::context::{generate_options, load_config, load_input, write_output};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    let reporter = ErrorOutput::new(cli.color.into());
    match run_render_impl(args, cli, &reporter) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            reporter.print(&e);
            EXIT_ERROR
        }
    }
}

/// Renders the chart to a file or stdout.
///
/// Returns `EXIT_RENDER_SKIPPED` when the theme name does not resolve.
///
/// # Errors
/// Returns an error if config or input loading fails, the input or options
/// are invalid, or the SVG cannot be written.
pub(crate) fn run_render_impl(
    args: &RenderArgs,
    cli: &Cli,
    reporter: &ErrorOutput,
) -> Result<i32> {
    let config = load_config(args.series.config.as_deref(), cli.no_config)?;
    let input = load_input(&args.series)?;
    let options = render_options(&config, args);

    let mut request =
        RenderRequest::new(&input.x, &options).with_generate(generate_options(&config, &args.series));
    if let Some(keys) = &input.color_by {
        request = request.with_color_by(keys);
    }

    let mut svg = Vec::new();
    let mut stderr = std::io::stderr().lock();
    match render_dot_chart(&mut svg, &request, reporter, &mut stderr)? {
        RenderOutcome::Rendered { ymax, .. } => {
            write_output(args.output.as_deref(), &svg)?;
            if let Some(path) = &args.output
                && !cli.quiet
            {
                eprintln!("Wrote {} (y-axis 0..{ymax})", path.display());
            }
            Ok(EXIT_SUCCESS)
        }
        RenderOutcome::Skipped { .. } => Ok(EXIT_RENDER_SKIPPED),
    }
}

/// Config `[render]` values overridden by command-line flags.
pub(crate) fn render_options(config: &Config, args: &RenderArgs) -> RenderOptions {
    let mut options = config.render.clone();
    if let Some(theme) = &args.theme {
        options.theme = Some(theme.clone());
    }
    if args.no_colorbar {
        options.colorbar = false;
    }
    if let Some(xlabel) = &args.xlabel {
        options.xlabel.clone_from(xlabel);
    }
    if let Some(ylabel) = &args.ylabel {
        options.ylabel.clone_from(ylabel);
    }
    if let Some(title) = &args.title {
        options.title.clone_from(title);
    }
    if let Some(label) = &args.colorbar_label {
        options.colorbar_label.clone_from(label);
    }
    if let Some(dot_size) = args.dot_size {
        options.dot_size = dot_size;
    }
    if let Some(width) = args.width {
        options.width = width;
    }
    if let Some(height) = args.height {
        options.height = height;
    }
    if args.ylim.is_some() {
        options.ylim = args.ylim;
    }
    options
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
