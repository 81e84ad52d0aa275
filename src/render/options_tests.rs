use super::*;

#[test]
fn defaults_match_documented_values() {
    let options = RenderOptions::default();
    assert!(options.theme.is_none());
    assert!(options.colorbar);
    assert_eq!(options.ylabel, "Count");
    assert!((options.dot_size - 60.0).abs() < f64::EPSILON);
    assert!((options.width - 800.0).abs() < f64::EPSILON);
    assert!((options.height - 500.0).abs() < f64::EPSILON);
    assert!(options.validate().is_ok());
}

#[test]
fn empty_toml_section_gives_defaults() {
    let options: RenderOptions = toml::from_str("").unwrap();
    assert_eq!(options, RenderOptions::default());
}

#[test]
fn toml_fields_override_defaults() {
    let options: RenderOptions = toml::from_str(
        r#"
theme = "lavender"
colorbar = false
title = "Movies seen by year"
dot_size = 36.0
ylim = 12
"#,
    )
    .unwrap();
    assert_eq!(options.theme.as_deref(), Some("lavender"));
    assert!(!options.colorbar);
    assert_eq!(options.title, "Movies seen by year");
    assert_eq!(options.ylim, Some(12));
    assert!((options.dot_radius() - 3.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_fields_are_rejected() {
    let result: Result<RenderOptions, _> = toml::from_str("background = \"red\"");
    assert!(result.is_err());
}

#[test]
fn builder_methods_set_fields() {
    let options = RenderOptions::default()
        .with_theme("dark")
        .with_labels("Year", "Movies")
        .with_title("t")
        .with_colorbar(false)
        .with_dot_size(16.0)
        .with_size(400.0, 300.0)
        .with_ylim(9);
    assert_eq!(options.theme.as_deref(), Some("dark"));
    assert_eq!(options.xlabel, "Year");
    assert_eq!(options.ylabel, "Movies");
    assert!(!options.colorbar);
    assert!((options.dot_radius() - 2.0).abs() < f64::EPSILON);
    assert_eq!(options.ylim, Some(9));
}

#[test]
fn validate_rejects_bad_values() {
    assert!(RenderOptions::default().with_dot_size(0.0).validate().is_err());
    assert!(RenderOptions::default().with_dot_size(f64::NAN).validate().is_err());
    assert!(RenderOptions::default().with_size(50.0, 500.0).validate().is_err());
    assert!(RenderOptions::default().with_size(800.0, 99.0).validate().is_err());
    assert!(RenderOptions::default().with_ylim(0).validate().is_err());
}
