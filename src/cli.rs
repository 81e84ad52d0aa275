use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::input::InputFormat;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dotplot")]
#[command(author, version, about = "Dot chart coordinates and SVG rendering")]
#[command(long_about = "Stack repeated values into dot-chart coordinates and render them as SVG.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Render skipped (unknown theme or colormap)\n  \
    2 - Input, configuration or I/O error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print dot-chart coordinates for a series
    Coords(CoordsArgs),

    /// Render a dot chart as SVG
    Render(RenderArgs),

    /// List built-in themes and colormaps
    Themes,

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Options shared by `coords` and `render`.
#[derive(Args, Debug)]
pub struct SeriesArgs {
    /// Input file with the x series ("-" for stdin)
    pub input: PathBuf,

    /// File with color keys, one per x value
    #[arg(long)]
    pub color_by: Option<PathBuf>,

    /// Input format [possible values: auto, json, text]
    #[arg(long, default_value = "auto")]
    pub input_format: InputFormat,

    /// Sort color keys descending
    #[arg(long)]
    pub reverse: bool,

    /// Multiplier for the recommended y-axis bound (overrides config)
    #[arg(long)]
    pub ymax_scale: Option<f64>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CoordsArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Theme or colormap name (see `dotplot themes`)
    #[arg(long)]
    pub theme: Option<String>,

    /// Do not draw a colorbar
    #[arg(long)]
    pub no_colorbar: bool,

    /// X-axis label
    #[arg(long)]
    pub xlabel: Option<String>,

    /// Y-axis label
    #[arg(long)]
    pub ylabel: Option<String>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,

    /// Caption above the colorbar
    #[arg(long)]
    pub colorbar_label: Option<String>,

    /// Marker area in square pixels
    #[arg(long)]
    pub dot_size: Option<f64>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<f64>,

    /// Fixed y-axis upper bound instead of the recommended one
    #[arg(long)]
    pub ylim: Option<usize>,

    /// Write SVG to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".dotplot.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a configuration file
    Validate {
        /// Path to configuration file
        #[arg(default_value = ".dotplot.toml")]
        config: PathBuf,
    },

    /// Show the effective configuration
    Show {
        /// Path to configuration file (defaults to the discovered one)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigOutputFormat {
    /// TOML as it would appear in a config file
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
