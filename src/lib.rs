pub mod cli;
pub mod commands;
pub mod config;
pub mod dotchart;
pub mod error;
pub mod input;
pub mod output;
pub mod render;
pub mod series;
pub mod theme;

pub use dotchart::{
    DotCoordinates, GenerateOptions, generate_colored_dot_coordinates, generate_dot_coordinates,
};
pub use error::{DotplotError, Result};
pub use render::{RenderOptions, RenderOutcome, RenderRequest, render_dot_chart};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RENDER_SKIPPED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
