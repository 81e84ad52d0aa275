use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, validate_config_semantics};
use crate::output::ErrorOutput;
use crate::{DotplotError, EXIT_ERROR, EXIT_SUCCESS, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let reporter = ErrorOutput::new(cli.color.into());
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            if !cli.quiet {
                println!("Configuration is valid: {}", config.display());
            }
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config)
                .map(|output| print!("{output}"))
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            reporter.print(&e);
            EXIT_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(DotplotError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    validate_config_semantics(&config)
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    let render = &config.render;

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[generate]\n");
    let _ = writeln!(output, "  ymax_scale = {}", config.generate.ymax_scale);
    let _ = writeln!(output, "  reverse = {}", config.generate.reverse);

    output.push_str("\n[render]\n");
    let _ = writeln!(
        output,
        "  theme = \"{}\"",
        render.theme.as_deref().unwrap_or("classic")
    );
    let _ = writeln!(output, "  colorbar = {}", render.colorbar);
    let _ = writeln!(output, "  xlabel = {:?}", render.xlabel);
    let _ = writeln!(output, "  ylabel = {:?}", render.ylabel);
    let _ = writeln!(output, "  title = {:?}", render.title);
    if !render.colorbar_label.is_empty() {
        let _ = writeln!(output, "  colorbar_label = {:?}", render.colorbar_label);
    }
    let _ = writeln!(output, "  dot_size = {}", render.dot_size);
    let _ = writeln!(output, "  width = {}", render.width);
    let _ = writeln!(output, "  height = {}", render.height);
    match render.ylim {
        Some(ylim) => {
            let _ = writeln!(output, "  ylim = {ylim}");
        }
        None => output.push_str("  ylim = (recommended)\n"),
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
