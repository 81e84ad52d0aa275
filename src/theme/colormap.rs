//! Named colormaps, sampled from evenly spaced control points.

use crate::output::svg::ChartColor;

/// Built-in colormaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColormapKind {
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    RdYlGn,
    Coolwarm,
    Blues,
    Greys,
}

impl ColormapKind {
    pub const ALL: [Self; 9] = [
        Self::Viridis,
        Self::Plasma,
        Self::Inferno,
        Self::Magma,
        Self::Cividis,
        Self::RdYlGn,
        Self::Coolwarm,
        Self::Blues,
        Self::Greys,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
            Self::RdYlGn => "RdYlGn",
            Self::Coolwarm => "coolwarm",
            Self::Blues => "Blues",
            Self::Greys => "Greys",
        }
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    fn stops(self) -> &'static [ChartColor] {
        match self {
            Self::Viridis => &VIRIDIS,
            Self::Plasma => &PLASMA,
            Self::Inferno => &INFERNO,
            Self::Magma => &MAGMA,
            Self::Cividis => &CIVIDIS,
            Self::RdYlGn => &RDYLGN,
            Self::Coolwarm => &COOLWARM,
            Self::Blues => &BLUES,
            Self::Greys => &GREYS,
        }
    }
}

const fn c(r: u8, g: u8, b: u8) -> ChartColor {
    ChartColor::rgb(r, g, b)
}

static VIRIDIS: [ChartColor; 5] = [
    c(0x44, 0x01, 0x54),
    c(0x3b, 0x52, 0x8b),
    c(0x21, 0x91, 0x8c),
    c(0x5e, 0xc9, 0x62),
    c(0xfd, 0xe7, 0x25),
];
static PLASMA: [ChartColor; 5] = [
    c(0x0d, 0x08, 0x87),
    c(0x7e, 0x03, 0xa8),
    c(0xcc, 0x47, 0x78),
    c(0xf8, 0x95, 0x40),
    c(0xf0, 0xf9, 0x21),
];
static INFERNO: [ChartColor; 5] = [
    c(0x00, 0x00, 0x04),
    c(0x57, 0x10, 0x6e),
    c(0xbc, 0x37, 0x54),
    c(0xf9, 0x8e, 0x09),
    c(0xfc, 0xff, 0xa4),
];
static MAGMA: [ChartColor; 5] = [
    c(0x00, 0x00, 0x04),
    c(0x51, 0x12, 0x7c),
    c(0xb7, 0x37, 0x79),
    c(0xfc, 0x89, 0x61),
    c(0xfc, 0xfd, 0xbf),
];
static CIVIDIS: [ChartColor; 5] = [
    c(0x00, 0x22, 0x4e),
    c(0x3d, 0x4d, 0x6a),
    c(0x7c, 0x7b, 0x78),
    c(0xbc, 0xaf, 0x6f),
    c(0xfe, 0xe8, 0x38),
];
static RDYLGN: [ChartColor; 5] = [
    c(0xa5, 0x00, 0x26),
    c(0xf4, 0x6d, 0x43),
    c(0xff, 0xff, 0xbf),
    c(0x66, 0xbd, 0x63),
    c(0x00, 0x68, 0x37),
];
static COOLWARM: [ChartColor; 5] = [
    c(0x3b, 0x4c, 0xc0),
    c(0x8d, 0xb0, 0xfe),
    c(0xdd, 0xdd, 0xdd),
    c(0xf4, 0x9a, 0x7b),
    c(0xb4, 0x04, 0x26),
];
static BLUES: [ChartColor; 5] = [
    c(0xf7, 0xfb, 0xff),
    c(0xc6, 0xdb, 0xef),
    c(0x6b, 0xae, 0xd6),
    c(0x21, 0x71, 0xb5),
    c(0x08, 0x30, 0x6b),
];
static GREYS: [ChartColor; 5] = [
    c(0xff, 0xff, 0xff),
    c(0xd9, 0xd9, 0xd9),
    c(0x96, 0x96, 0x96),
    c(0x52, 0x52, 0x52),
    c(0x00, 0x00, 0x00),
];

/// A colormap, optionally reversed (`_r` suffix).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colormap {
    pub kind: ColormapKind,
    pub reversed: bool,
}

impl Colormap {
    #[must_use]
    pub const fn new(kind: ColormapKind) -> Self {
        Self {
            kind,
            reversed: false,
        }
    }

    #[must_use]
    pub const fn reversed(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }

    /// Parse `name` or `name_r`, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(kind) = ColormapKind::from_name(name) {
            return Some(Self::new(kind));
        }
        let base = name
            .strip_suffix("_r")
            .or_else(|| name.strip_suffix("_R"))?;
        ColormapKind::from_name(base).map(|kind| Self::new(kind).reversed())
    }

    #[must_use]
    pub fn name(&self) -> String {
        if self.reversed {
            format!("{}_r", self.kind.name())
        } else {
            self.kind.name().to_string()
        }
    }

    /// Color at position `t` in [0, 1]; out-of-range and NaN positions are clamped.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn sample(&self, t: f64) -> ChartColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };

        let stops = self.kind.stops();
        let span = (stops.len() - 1) as f64;
        let scaled = t * span;
        let index = (scaled.floor() as usize).min(stops.len() - 2);
        stops[index].lerp(stops[index + 1], scaled - index as f64)
    }

    /// `count` evenly spaced samples from the low end to the high end.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gradient(&self, count: usize) -> Vec<ChartColor> {
        match count {
            0 => Vec::new(),
            1 => vec![self.sample(0.5)],
            _ => (0..count)
                .map(|i| self.sample(i as f64 / (count - 1) as f64))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "colormap_tests.rs"]
mod tests;
