use std::cmp::Ordering;
use std::collections::HashSet;

use super::*;

#[test]
fn parse_prefers_integer_then_float_then_text() {
    assert_eq!(Value::parse("42"), Value::Int(42));
    assert_eq!(Value::parse(" 2.5 "), Value::Float(2.5));
    assert_eq!(Value::parse("1999a"), Value::Text("1999a".to_string()));
}

#[test]
fn numbers_sort_before_text() {
    let mut values = vec![
        Value::from("b"),
        Value::from(3),
        Value::from("a"),
        Value::from(1.5),
    ];
    values.sort();
    assert_eq!(
        values,
        vec![
            Value::from(1.5),
            Value::from(3),
            Value::from("a"),
            Value::from("b"),
        ]
    );
}

#[test]
fn int_and_float_compare_numerically() {
    assert!(Value::Int(2) < Value::Float(2.5));
    assert!(Value::Float(2.5) < Value::Int(3));
    assert!(Value::Int(-3) < Value::Float(-2.5));
    assert!(Value::Float(-2.5) < Value::Int(-2));
}

#[test]
fn equal_int_and_float_are_one_value() {
    assert_eq!(Value::Int(1), Value::Float(1.0));
    assert_eq!(Value::Int(1).cmp(&Value::Float(1.0)), Ordering::Equal);
    assert_eq!(Value::Int(0), Value::Float(-0.0));
    assert_ne!(Value::Int(1), Value::Float(1.5));

    let mut set = HashSet::new();
    set.insert(Value::Int(2));
    set.insert(Value::Float(2.0));
    set.insert(Value::Int(0));
    set.insert(Value::Float(-0.0));
    assert_eq!(set.len(), 2);
}

#[test]
fn int_and_float_stack_together() {
    use crate::dotchart::{GenerateOptions, generate_dot_coordinates};

    let coords = generate_dot_coordinates(
        &[Value::Int(2), Value::Float(2.0), Value::Int(3)],
        &GenerateOptions::default(),
    )
    .unwrap();
    assert_eq!(coords.y, vec![1, 2, 1]);
    assert_eq!(coords.x, vec![Value::Int(2), Value::Float(2.0), Value::Int(3)]);
}

#[test]
fn int_float_comparison_is_exact_for_large_values() {
    // 2^53 + 1 is not representable as f64; comparison must still be exact.
    let big = (1_i64 << 53) + 1;
    #[allow(clippy::cast_precision_loss)]
    let float = (1_i64 << 53) as f64;
    assert!(Value::Int(big) > Value::Float(float));
}

#[test]
fn nan_sorts_after_numbers_and_equals_itself() {
    assert!(Value::Float(f64::NAN) > Value::Float(f64::INFINITY));
    assert!(Value::Float(f64::NAN) > Value::Int(i64::MAX));
    assert!(Value::Float(f64::NAN) < Value::from("a"));
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
}

#[test]
fn negative_zero_equals_zero_and_hashes_alike() {
    let mut set = HashSet::new();
    set.insert(Value::Float(0.0));
    set.insert(Value::Float(-0.0));
    assert_eq!(set.len(), 1);
}

#[test]
fn display_matches_raw_value() {
    assert_eq!(Value::Int(1999).to_string(), "1999");
    assert_eq!(Value::Float(7.5).to_string(), "7.5");
    assert_eq!(Value::from("drama").to_string(), "drama");
}

#[test]
fn deserializes_untagged_json() {
    let values: Vec<Value> = serde_json::from_str(r#"[1, 2.5, "x"]"#).unwrap();
    assert_eq!(
        values,
        vec![Value::Int(1), Value::Float(2.5), Value::from("x")]
    );
}

#[test]
fn as_f64_only_for_numbers() {
    assert_eq!(Value::Int(4).as_f64(), Some(4.0));
    assert_eq!(Value::from("4").as_f64(), None);
    assert!(Value::Float(1.0).is_numeric());
    assert!(!Value::from("x").is_numeric());
}
