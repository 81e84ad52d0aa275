//! SVG drawing of a [`RenderPlan`].

use std::fmt::Write;

use crate::output::svg::{Axis, Colorbar, Dot, SvgBuilder, SvgElement, html_escape};

use super::plan::RenderPlan;

const COLORBAR_WIDTH: f64 = 14.0;
const COLORBAR_GAP: f64 = 24.0;

/// Dot chart ready to be written as SVG.
#[derive(Debug)]
pub struct DotChart {
    plan: RenderPlan,
}

impl DotChart {
    #[must_use]
    pub const fn new(plan: RenderPlan) -> Self {
        Self { plan }
    }

    #[must_use]
    pub const fn plan(&self) -> &RenderPlan {
        &self.plan
    }

    fn grid_lines(&self) -> String {
        let plan = &self.plan;
        let mut output = String::new();
        let Some(grid) = plan.style.grid else {
            return output;
        };
        let color = grid.to_css();
        for (pos, _) in plan.y_ticks.iter().filter(|(pos, _)| *pos > 0.0) {
            let y = pos.mul_add(-plan.area.height, plan.area.bottom());
            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{y:.2}" x2="{}" y2="{y:.2}" stroke="{color}" stroke-width="1"/>"#,
                plan.area.left,
                plan.area.right()
            );
        }
        output
    }

    fn labels(&self) -> String {
        let plan = &self.plan;
        let mut output = String::new();
        let text = plan.style.text.to_css();

        if !plan.title.is_empty() {
            let _ = writeln!(
                output,
                r#"<text x="{}" y="30" text-anchor="middle" fill="{text}" font-size="18" font-weight="600">{}</text>"#,
                plan.width / 2.0,
                html_escape(&plan.title)
            );
        }

        if !plan.xlabel.is_empty() {
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="middle" fill="{text}" font-size="13">{}</text>"#,
                plan.area.left + plan.area.width / 2.0,
                plan.height - 14.0,
                html_escape(&plan.xlabel)
            );
        }

        if !plan.ylabel.is_empty() {
            let x = 18.0;
            let y = plan.area.top + plan.area.height / 2.0;
            let _ = writeln!(
                output,
                r#"<text x="{x}" y="{y}" text-anchor="middle" fill="{text}" font-size="13" transform="rotate(-90 {x} {y})">{}</text>"#,
                html_escape(&plan.ylabel)
            );
        }

        output
    }

    fn colorbar(&self) -> Option<Colorbar> {
        let plan = &self.plan;
        plan.colorbar.as_ref().map(|bar| Colorbar {
            x: plan.area.right() + COLORBAR_GAP,
            y: plan.area.top,
            width: COLORBAR_WIDTH,
            height: plan.area.height,
            segments: bar.segments.clone(),
            min_label: bar.min_label.clone(),
            max_label: bar.max_label.clone(),
            title: plan.colorbar_label.clone(),
            text_color: plan.style.text,
        })
    }
}

impl SvgElement for DotChart {
    fn render(&self) -> String {
        let plan = &self.plan;

        let x_axis = Axis::horizontal(
            plan.area.left,
            plan.area.bottom(),
            plan.area.width,
            plan.style.axis,
        )
        .with_labels(plan.x_ticks.clone());
        let y_axis = Axis::vertical(
            plan.area.left,
            plan.area.bottom(),
            plan.area.height,
            plan.style.axis,
        )
        .with_labels(plan.y_ticks.clone());

        let mut builder = SvgBuilder::new(plan.width, plan.height)
            .with_background(plan.style.background)
            .push_raw(self.grid_lines())
            .push_element(&x_axis)
            .push_element(&y_axis);

        if !plan.title.is_empty() {
            builder = builder.with_title(plan.title.clone());
        }

        for planned in &plan.dots {
            builder = builder.push_element(&Dot {
                cx: planned.cx,
                cy: planned.cy,
                radius: plan.radius,
                color: planned.color,
                label: planned.label.clone(),
            });
        }

        if let Some(colorbar) = self.colorbar() {
            builder = builder.push_element(&colorbar);
        }

        builder.push_raw(self.labels()).build()
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
