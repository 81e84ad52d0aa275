//! Primitive SVG elements: axes, dots, and colorbars.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{ChartColor, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis component for charts.
///
/// Label positions are fractions of the axis length, 0.0 at the origin.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub const fn horizontal(x: f64, y: f64, length: f64, color: ChartColor) -> Self {
        Self {
            orientation: AxisOrientation::Horizontal,
            x,
            y,
            length,
            labels: Vec::new(),
            color,
            tick_length: 5.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub const fn vertical(x: f64, y: f64, length: f64, color: ChartColor) -> Self {
        Self {
            orientation: AxisOrientation::Vertical,
            x,
            y,
            length,
            labels: Vec::new(),
            color,
            tick_length: 5.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        // Main axis line
        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{end_x}" y2="{end_y}" stroke="{color}" stroke-width="1"/>"#,
            self.x, self.y
        );

        // Ticks and labels
        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                tick.start_x, tick.start_y, tick.end_x, tick.end_y
            );

            let escaped_label = html_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{escaped_label}</text>"#,
                tick.label_x, tick.label_y, tick.anchor, self.font_size
            );
        }

        output
    }
}

/// A single point of a dot chart.
#[derive(Debug, Clone)]
pub struct Dot {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: ChartColor,
    /// Hover text, e.g. "1999 (#3)".
    pub label: String,
}

impl SvgElement for Dot {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        // Accessibility: title element for screen readers and hover tooltip
        format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{color}">
    <title>{escaped_label}</title>
</circle>"#,
            self.cx, self.cy, self.radius
        )
    }
}

/// Vertical color scale drawn as stacked segments, lowest value at the bottom.
#[derive(Debug, Clone)]
pub struct Colorbar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Segment colors from bottom to top.
    pub segments: Vec<ChartColor>,
    pub min_label: String,
    pub max_label: String,
    pub title: String,
    pub text_color: ChartColor,
}

impl SvgElement for Colorbar {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let mut output = String::new();
        if self.segments.is_empty() {
            return output;
        }

        let segment_height = self.height / self.segments.len() as f64;
        for (i, color) in self.segments.iter().enumerate() {
            let top = segment_height.mul_add(-((i + 1) as f64), self.y + self.height);
            // Slight overlap hides anti-aliasing seams between segments.
            let _ = writeln!(
                output,
                r#"<rect x="{}" y="{top:.2}" width="{}" height="{:.2}" fill="{}"/>"#,
                self.x,
                self.width,
                segment_height + 0.5,
                color.to_css()
            );
        }

        let text_color = self.text_color.to_css();
        let label_x = self.x + self.width + 4.0;
        let _ = writeln!(
            output,
            r#"<text x="{label_x}" y="{}" text-anchor="start" fill="{text_color}" font-size="10">{}</text>"#,
            self.y + 4.0,
            html_escape(&self.max_label)
        );
        let _ = writeln!(
            output,
            r#"<text x="{label_x}" y="{}" text-anchor="start" fill="{text_color}" font-size="10">{}</text>"#,
            self.y + self.height,
            html_escape(&self.min_label)
        );

        if !self.title.is_empty() {
            let title_x = self.x + self.width / 2.0;
            let title_y = self.y - 8.0;
            let _ = writeln!(
                output,
                r#"<text x="{title_x}" y="{title_y}" text-anchor="middle" fill="{text_color}" font-size="11">{}</text>"#,
                html_escape(&self.title)
            );
        }

        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
