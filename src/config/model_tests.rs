use super::*;

#[test]
fn defaults_match_library_defaults() {
    let config = Config::default();
    assert!((config.generate.ymax_scale - 1.25).abs() < f64::EPSILON);
    assert!(!config.generate.reverse);
    assert_eq!(config.render, RenderOptions::default());
}

#[test]
fn empty_toml_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn parses_both_sections() {
    let config: Config = toml::from_str(
        r#"
[generate]
ymax_scale = 1.5
reverse = true

[render]
theme = "lavender"
colorbar = false
xlabel = "Release year"
title = "Movies"
dot_size = 40.0
ylim = 12
"#,
    )
    .unwrap();

    assert!((config.generate.ymax_scale - 1.5).abs() < f64::EPSILON);
    assert!(config.generate.reverse);
    assert_eq!(config.render.theme.as_deref(), Some("lavender"));
    assert!(!config.render.colorbar);
    assert_eq!(config.render.xlabel, "Release year");
    assert_eq!(config.render.ylabel, "Count");
    assert_eq!(config.render.ylim, Some(12));
    assert!((config.render.width - 800.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<Config>("[generate]\nscale = 2.0\n").is_err());
    assert!(toml::from_str::<Config>("[render]\ncolour = \"red\"\n").is_err());
    assert!(toml::from_str::<Config>("[plot]\n").is_err());
}

#[test]
fn generate_options_follow_config() {
    let config = GenerateConfig {
        ymax_scale: 2.0,
        reverse: true,
    };
    let options = config.options();
    assert!(options.reverse);
    assert!((options.ymax_scale - 2.0).abs() < f64::EPSILON);
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = Config::default();
    config.render.title = "Ratings".to_string();
    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
