use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DotplotError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported theme or colormap: {name}")]
    UnsupportedTheme { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl DotplotError {
    /// Short category name used as the diagnostic heading.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "Input",
            Self::UnsupportedTheme { .. } => "Theme",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileAccess { .. } | Self::Io(_) => "IO",
            Self::JsonParse(_) => "JSON",
        }
    }

    /// Message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput(msg) | Self::Config(msg) => msg.clone(),
            Self::UnsupportedTheme { name } => format!("'{name}' is not a known theme or colormap"),
            Self::FileAccess { path, .. } => format!("cannot read {}", path.display()),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonParse(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedTheme { .. } => Some("Run 'dotplot themes' to list available names"),
            Self::TomlParse(_) => Some("Check the TOML syntax of your configuration file"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DotplotError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
