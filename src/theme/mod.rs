//! Presentation variants for dot charts.
//!
//! A chart is styled either by a named built-in theme or by a colormap name.
//! Both resolve to a [`ChartStyle`]; any other name is an `UnsupportedTheme`.

mod colormap;

pub use colormap::{Colormap, ColormapKind};

use crate::error::{DotplotError, Result};
use crate::output::svg::ChartColor;

/// Colors used to draw one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub background: ChartColor,
    pub text: ChartColor,
    pub axis: ChartColor,
    /// Horizontal grid lines; `None` draws no grid.
    pub grid: Option<ChartColor>,
    /// Dot color when no color keys are given.
    pub dot: ChartColor,
    /// Colormap for color keys.
    pub colormap: Colormap,
}

/// Built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Classic,
    Lavender,
    Dark,
    Minimal,
}

impl Theme {
    pub const ALL: [Self; 4] = [Self::Classic, Self::Lavender, Self::Dark, Self::Minimal];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Lavender => "lavender",
            Self::Dark => "dark",
            Self::Minimal => "minimal",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Classic => "white background, light grid, viridis colors",
            Self::Lavender => "lavender background, white grid, red-yellow-green colors",
            Self::Dark => "dark slate background, plasma colors",
            Self::Minimal => "white background, no grid, greyscale colors",
        }
    }

    #[must_use]
    pub const fn style(self) -> ChartStyle {
        match self {
            Self::Classic => ChartStyle {
                background: ChartColor::rgb(0xff, 0xff, 0xff),
                text: ChartColor::rgb(0x1e, 0x29, 0x3b),
                axis: ChartColor::rgb(0x64, 0x74, 0x8b),
                grid: Some(ChartColor::rgb(0xe2, 0xe8, 0xf0)),
                dot: ChartColor::rgb(0x3b, 0x82, 0xf6),
                colormap: Colormap::new(ColormapKind::Viridis),
            },
            Self::Lavender => ChartStyle {
                background: ChartColor::rgb(0xe6, 0xe6, 0xfa),
                text: ChartColor::rgb(0x1e, 0x29, 0x3b),
                axis: ChartColor::rgb(0x47, 0x55, 0x69),
                grid: Some(ChartColor::rgb(0xff, 0xff, 0xff)),
                dot: ChartColor::rgb(0x6d, 0x28, 0xd9),
                colormap: Colormap::new(ColormapKind::RdYlGn),
            },
            Self::Dark => ChartStyle {
                background: ChartColor::rgb(0x0f, 0x17, 0x2a),
                text: ChartColor::rgb(0xe2, 0xe8, 0xf0),
                axis: ChartColor::rgb(0x94, 0xa3, 0xb8),
                grid: Some(ChartColor::rgb(0x1e, 0x29, 0x3b)),
                dot: ChartColor::rgb(0x38, 0xbd, 0xf8),
                colormap: Colormap::new(ColormapKind::Plasma),
            },
            Self::Minimal => ChartStyle {
                background: ChartColor::rgb(0xff, 0xff, 0xff),
                text: ChartColor::rgb(0x11, 0x18, 0x27),
                axis: ChartColor::rgb(0x6b, 0x72, 0x80),
                grid: None,
                dot: ChartColor::rgb(0x11, 0x18, 0x27),
                colormap: Colormap::new(ColormapKind::Greys),
            },
        }
    }
}

/// A resolved theme request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSelection {
    Builtin(Theme),
    Colormap(Colormap),
}

impl Default for ThemeSelection {
    fn default() -> Self {
        Self::Builtin(Theme::default())
    }
}

impl ThemeSelection {
    /// Resolve a theme or colormap name. Built-in theme names win over colormaps.
    ///
    /// # Errors
    /// Returns `UnsupportedTheme` if `name` matches neither.
    pub fn parse(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if let Some(theme) = Theme::from_name(trimmed) {
            return Ok(Self::Builtin(theme));
        }
        Colormap::from_name(trimmed)
            .map(Self::Colormap)
            .ok_or_else(|| DotplotError::UnsupportedTheme {
                name: name.to_string(),
            })
    }

    /// Resolve an optional name; `None` selects the default theme.
    ///
    /// # Errors
    /// Returns `UnsupportedTheme` for an unknown name.
    pub fn resolve(name: Option<&str>) -> Result<Self> {
        name.map_or_else(|| Ok(Self::default()), Self::parse)
    }

    /// Colormap requests keep the default theme's chrome and swap the colors.
    #[must_use]
    pub const fn style(&self) -> ChartStyle {
        match self {
            Self::Builtin(theme) => theme.style(),
            Self::Colormap(colormap) => {
                let mut style = Theme::Classic.style();
                style.colormap = *colormap;
                style
            }
        }
    }

    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Builtin(theme) => theme.name().to_string(),
            Self::Colormap(colormap) => colormap.name(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
