//! Configuration semantic validation.
//!
//! Range checks that TOML parsing alone cannot express.

use crate::config::Config;
use crate::theme::ThemeSelection;
use crate::{DotplotError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns a `Config` error naming the first invalid key.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_generate_section(config)?;
    validate_render_section(config)?;
    Ok(())
}

fn validate_generate_section(config: &Config) -> Result<()> {
    let scale = config.generate.ymax_scale;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(DotplotError::Config(format!(
            "generate.ymax_scale must be a positive number, got {scale}"
        )));
    }
    Ok(())
}

fn validate_render_section(config: &Config) -> Result<()> {
    config
        .render
        .validate()
        .map_err(|msg| DotplotError::Config(format!("render.{msg}")))?;

    if let Some(theme) = &config.render.theme {
        ThemeSelection::parse(theme).map_err(|_| {
            DotplotError::Config(format!(
                "render.theme '{theme}' is not a known theme or colormap"
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
