use super::*;

fn sample() -> DotCoordinates<&'static str, i32> {
    DotCoordinates::new(
        vec!["b", "c", "a", "a"],
        vec![1, 1, 1, 2],
        Some(vec![1, 2, 3, 3]),
        2,
        1.25,
    )
}

#[test]
fn max_count_is_tallest_stack() {
    assert_eq!(sample().max_count(), 2);
}

#[test]
fn into_parts_returns_parallel_sequences() {
    let (x, y, color) = sample().into_parts();
    assert_eq!(x, vec!["b", "c", "a", "a"]);
    assert_eq!(y, vec![1, 1, 1, 2]);
    assert_eq!(color, Some(vec![1, 2, 3, 3]));
}

#[test]
fn ylim_advice_mentions_bound() {
    let advice = sample().ylim_advice();
    assert!(advice.contains("[0, 2]"));
}

#[test]
fn serializes_without_color_when_absent() {
    let coords: DotCoordinates<i32> = DotCoordinates::new(vec![1], vec![1], None, 1, 1.25);
    let json = serde_json::to_string(&coords).unwrap();
    assert!(!json.contains("color"));
    assert!(json.contains("\"recommended_ymax\":1"));
    assert!(!coords.has_color());
    assert_eq!(coords.len(), 1);
    assert!(!coords.is_empty());
}

#[test]
fn without_color_keeps_coordinates() {
    let coords: DotCoordinates<i32> = DotCoordinates::new(vec![4, 4], vec![1, 2], None, 2, 1.25);
    let retyped: DotCoordinates<i32, String> = coords.without_color();
    assert_eq!(retyped.y, vec![1, 2]);
    assert!(retyped.color.is_none());
    assert_eq!(retyped.recommended_ymax, 2);
}
