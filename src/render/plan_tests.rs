use super::*;
use crate::dotchart::{
    GenerateOptions, generate_colored_dot_coordinates, generate_dot_coordinates,
};
use crate::theme::{Theme, ThemeSelection};

fn values(raw: &[i64]) -> Vec<Value> {
    raw.iter().copied().map(Value::Int).collect()
}

fn uncolored(raw: &[i64]) -> DotCoordinates<Value, Value> {
    generate_dot_coordinates(&values(raw), &GenerateOptions::default())
        .unwrap()
        .without_color()
}

fn colored(x: &[i64], keys: &[i64]) -> DotCoordinates<Value, Value> {
    generate_colored_dot_coordinates(&values(x), &values(keys), &GenerateOptions::default())
        .unwrap()
}

fn classic() -> ChartStyle {
    Theme::Classic.style()
}

// ============================================================================
// Y axis
// ============================================================================

#[test]
fn ymax_defaults_to_recommendation() {
    // Tallest stack 4 -> floor(4 * 1.25) = 5
    let plan = RenderPlan::build(&uncolored(&[1, 1, 1, 1, 2]), &RenderOptions::default(), classic());
    assert_eq!(plan.ymax, 5);
}

#[test]
fn ymax_override_is_used() {
    let options = RenderOptions::default().with_ylim(20);
    let plan = RenderPlan::build(&uncolored(&[1, 1, 2]), &options, classic());
    assert_eq!(plan.ymax, 20);
}

#[test]
fn ymax_never_below_tallest_stack() {
    let options = RenderOptions::default().with_ylim(2);
    let plan = RenderPlan::build(&uncolored(&[1, 1, 1, 1]), &options, classic());
    assert_eq!(plan.ymax, 4);
}

#[test]
fn y_ticks_cover_zero_to_ymax() {
    let ticks = y_ticks(5);
    assert_eq!(ticks.first().unwrap().1, "0");
    assert_eq!(ticks.last().unwrap().1, "5");
    assert!((ticks.last().unwrap().0 - 1.0).abs() < f64::EPSILON);
    assert_eq!(ticks.len(), 6);
}

#[test]
fn y_ticks_are_thinned_for_tall_charts() {
    let ticks = y_ticks(95);
    assert!(ticks.len() <= 11);
    assert_eq!(ticks[1].1, "10");
}

// ============================================================================
// Dots
// ============================================================================

#[test]
fn one_dot_per_point_stacked_upwards() {
    let plan = RenderPlan::build(&uncolored(&[3, 3, 3]), &RenderOptions::default(), classic());
    assert_eq!(plan.dots.len(), 3);
    assert!((plan.dots[0].cx - plan.dots[2].cx).abs() < f64::EPSILON);
    // SVG y grows downwards: later occurrences sit higher.
    assert!(plan.dots[0].cy > plan.dots[1].cy);
    assert!(plan.dots[1].cy > plan.dots[2].cy);
}

#[test]
fn dots_stay_inside_plot_area_horizontally() {
    let plan = RenderPlan::build(
        &uncolored(&[1950, 1975, 2020, 2020]),
        &RenderOptions::default(),
        classic(),
    );
    for dot in &plan.dots {
        assert!(dot.cx > plan.area.left && dot.cx < plan.area.right());
    }
}

#[test]
fn uncolored_dots_use_theme_dot_color() {
    let plan = RenderPlan::build(&uncolored(&[1, 2]), &RenderOptions::default(), classic());
    assert!(plan.dots.iter().all(|d| d.color == classic().dot));
    assert!(plan.colorbar.is_none());
}

#[test]
fn dot_labels_include_rank_and_key() {
    let plan = RenderPlan::build(&colored(&[1999, 1999], &[7, 9]), &RenderOptions::default(), classic());
    assert_eq!(plan.dots[0].label, "1999 (#1), 7");
    assert_eq!(plan.dots[1].label, "1999 (#2), 9");
}

#[test]
fn numeric_keys_span_the_colormap() {
    let style = classic();
    let plan = RenderPlan::build(&colored(&[1, 2, 3], &[1, 5, 10]), &RenderOptions::default(), style);
    assert_eq!(plan.dots[0].color, style.colormap.sample(0.0));
    assert_eq!(plan.dots[2].color, style.colormap.sample(1.0));
}

#[test]
fn text_keys_are_colored_by_rank() {
    let x = values(&[1, 2, 3]);
    let keys = vec![Value::from("low"), Value::from("high"), Value::from("mid")];
    let coords =
        generate_colored_dot_coordinates(&x, &keys, &GenerateOptions::default()).unwrap();
    let style = classic();
    let plan = RenderPlan::build(&coords, &RenderOptions::default(), style);

    // Sorted keys: high, low, mid
    assert_eq!(plan.dots[0].color, style.colormap.sample(0.0));
    assert_eq!(plan.dots[1].color, style.colormap.sample(0.5));
    assert_eq!(plan.dots[2].color, style.colormap.sample(1.0));
    let colorbar = plan.colorbar.unwrap();
    assert_eq!(colorbar.min_label, "high");
    assert_eq!(colorbar.max_label, "mid");
}

#[test]
fn single_key_uses_colormap_midpoint() {
    let style = classic();
    let plan = RenderPlan::build(&colored(&[1, 2], &[4, 4]), &RenderOptions::default(), style);
    assert_eq!(plan.dots[0].color, style.colormap.sample(0.5));
}

// ============================================================================
// Colorbar
// ============================================================================

#[test]
fn colorbar_planned_for_colored_charts() {
    let plan = RenderPlan::build(&colored(&[1, 2], &[3, 8]), &RenderOptions::default(), classic());
    let colorbar = plan.colorbar.unwrap();
    assert_eq!(colorbar.segments.len(), COLORBAR_SEGMENTS);
    assert_eq!(colorbar.min_label, "3");
    assert_eq!(colorbar.max_label, "8");
}

#[test]
fn colorbar_can_be_disabled() {
    let options = RenderOptions::default().with_colorbar(false);
    let plan = RenderPlan::build(&colored(&[1, 2], &[3, 8]), &options, classic());
    assert!(plan.colorbar.is_none());
}

#[test]
fn colorbar_narrows_plot_area() {
    let with = RenderPlan::build(&colored(&[1, 2], &[3, 8]), &RenderOptions::default(), classic());
    let without = RenderPlan::build(&uncolored(&[1, 2]), &RenderOptions::default(), classic());
    assert!(with.area.width < without.area.width);
}

#[test]
fn colorbar_follows_selected_colormap() {
    let style = ThemeSelection::parse("Greys").unwrap().style();
    let plan = RenderPlan::build(&colored(&[1, 2], &[3, 8]), &RenderOptions::default(), style);
    let colorbar = plan.colorbar.unwrap();
    assert_eq!(colorbar.segments[0], ChartColor::rgb(255, 255, 255));
}

// ============================================================================
// X axis
// ============================================================================

#[test]
fn numeric_ticks_are_round_numbers() {
    let scale = XScale::from_values(&values(&[1950, 2020]));
    let ticks = scale.ticks();
    assert!(!ticks.is_empty());
    for (pos, label) in &ticks {
        assert!((0.0..=1.0).contains(pos));
        let year: i64 = label.parse().unwrap();
        assert_eq!(year % 10, 0);
    }
}

#[test]
fn single_numeric_value_is_centered() {
    let scale = XScale::from_values(&values(&[5]));
    assert!((scale.position(&Value::Int(5)) - 0.5).abs() < 1e-9);
}

fn huge_single_value_plan(value: f64) -> RenderPlan {
    let coords = generate_dot_coordinates(&[Value::Float(value)], &GenerateOptions::default())
        .unwrap()
        .without_color();
    RenderPlan::build(&coords, &RenderOptions::default(), classic())
}

#[test]
fn single_large_value_keeps_finite_positions() {
    for value in [1e17, 1e30, -1e30] {
        let plan = huge_single_value_plan(value);
        let dot = &plan.dots[0];
        assert!(dot.cx.is_finite(), "cx for {value}");
        let center = plan.area.left + plan.area.width / 2.0;
        assert!((dot.cx - center).abs() < 1.0, "{value} not centered");
        assert!(!plan.x_ticks.is_empty());
        assert!(plan.x_ticks.len() <= MAX_X_TICKS);
        for (pos, _) in &plan.x_ticks {
            assert!((0.0..=1.0).contains(pos), "tick {pos} for {value}");
        }
    }
}

#[test]
fn close_large_values_stop_emitting_ticks() {
    let x = [Value::Float(1e17), Value::Float(1e17 + 16.0)];
    let scale = XScale::from_values(&x);
    let ticks = scale.ticks();
    assert!(!ticks.is_empty());
    assert!(ticks.len() <= MAX_X_TICKS);
    assert!(ticks.iter().all(|(pos, _)| pos.is_finite()));
}

#[test]
fn overflowing_span_falls_back_to_categories() {
    let x = [Value::Float(-f64::MAX), Value::Float(f64::MAX)];
    let scale = XScale::from_values(&x);
    assert!(matches!(scale, XScale::Categorical { .. }));
    assert!((scale.position(&x[0]) - 0.25).abs() < 1e-9);
    assert!((scale.position(&x[1]) - 0.75).abs() < 1e-9);
}

#[test]
fn text_values_use_first_appearance_order() {
    let x = vec![Value::from("drama"), Value::from("comedy"), Value::from("drama")];
    let scale = XScale::from_values(&x);
    assert!(scale.position(&Value::from("drama")) < scale.position(&Value::from("comedy")));
    let ticks = scale.ticks();
    assert_eq!(ticks.len(), 2);
    assert_eq!(ticks[0].1, "drama");
    assert_eq!(ticks[1].1, "comedy");
}

#[test]
fn many_categories_thin_out_labels() {
    let x: Vec<Value> = (0..100).map(|i| Value::Text(format!("c{i}"))).collect();
    let ticks = XScale::from_values(&x).ticks();
    assert!(ticks.len() <= MAX_CATEGORY_LABELS);
}

#[test]
fn nice_step_rounds_up() {
    assert!((nice_step(14.0) - 20.0).abs() < 1e-9);
    assert!((nice_step(3.0) - 5.0).abs() < 1e-9);
    assert!((nice_step(0.7) - 1.0).abs() < 1e-9);
    assert!((nice_step(0.0) - 1.0).abs() < 1e-9);
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn title_and_xlabel_reserve_space() {
    let bare = RenderPlan::build(&uncolored(&[1]), &RenderOptions::default(), classic());
    let labelled = RenderPlan::build(
        &uncolored(&[1]),
        &RenderOptions::default()
            .with_title("Movies")
            .with_labels("Year", "Count"),
        classic(),
    );
    assert!(labelled.area.top > bare.area.top);
    assert!(labelled.area.height < bare.area.height);
    assert_eq!(labelled.title, "Movies");
    assert_eq!(labelled.xlabel, "Year");
}
