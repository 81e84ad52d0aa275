//! Loading steps shared by `coords` and `render`.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::Result;
use crate::cli::SeriesArgs;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::dotchart::GenerateOptions;
use crate::input::{SeriesInput, load_series};

/// Load the effective configuration.
///
/// # Errors
/// Returns an error if an explicit or discovered config file is unreadable or invalid.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Load the x series and, when given, the separate color series.
///
/// # Errors
/// Returns an error if either source cannot be read or parsed.
pub fn load_input(args: &SeriesArgs) -> Result<SeriesInput> {
    let input = load_series(&args.input, args.input_format)?;
    match &args.color_by {
        Some(path) => {
            let keys = load_series(path, args.input_format)?;
            input.with_color_by(keys.x)
        }
        None => Ok(input),
    }
}

/// Config values overridden by command-line flags.
#[must_use]
pub fn generate_options(config: &Config, args: &SeriesArgs) -> GenerateOptions {
    let mut options = config.generate.options();
    if args.reverse {
        options = options.with_reverse(true);
    }
    if let Some(scale) = args.ymax_scale {
        options = options.with_ymax_scale(scale);
    }
    options
}

/// Write to a file, or to stdout when no path is given.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_output(output_path: Option<&Path>, content: &[u8]) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
