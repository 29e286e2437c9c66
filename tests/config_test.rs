use keylegend::config::{LayerFilter, OsStyle, RenderConfig};
use rstest::rstest;
use std::str::FromStr;

#[test]
fn test_defaults() {
    let config = RenderConfig::default();

    assert_eq!(config.os_style, OsStyle::Mac);
    assert!(!config.show_shifted);
    assert!(!config.show_colors);
    assert!(config.show_held_indicator);
    assert!(!config.resolve_trans);
    assert_eq!(config.base_layer, None);
    assert_eq!(config.layer_filter(), LayerFilter::default());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = RenderConfig::from_json(
        r#"{ "os_style": "windows", "resolve_trans": true, "base_layer": "Typing" }"#,
    )
    .unwrap();

    assert_eq!(config.os_style, OsStyle::Windows);
    assert!(config.resolve_trans);
    assert_eq!(config.base_layer.as_deref(), Some("Typing"));
    assert!(config.show_held_indicator);
    assert!(config.include.is_empty());
}

#[test]
fn test_json_rejects_unknown_os_style() {
    assert!(RenderConfig::from_json(r#"{ "os_style": "amiga" }"#).is_err());
}

#[test]
fn test_layer_filter_from_lists() {
    let config = RenderConfig {
        include: vec!["Base".into(), "Lower".into()],
        exclude: vec!["Lower".into()],
        ..Default::default()
    };
    let filter = config.layer_filter();

    assert!(filter.allows("Base"));
    assert!(!filter.allows("Lower"));
    assert!(!filter.allows("Raise"));
}

#[rstest]
#[case("mac", OsStyle::Mac)]
#[case("Windows", OsStyle::Windows)]
#[case("LINUX", OsStyle::Linux)]
fn test_os_style_parse(#[case] text: &str, #[case] expected: OsStyle) {
    assert_eq!(OsStyle::from_str(text).unwrap(), expected);
    assert_eq!(expected.to_string(), text.to_lowercase());
}

#[test]
fn test_round_trips_through_json() {
    let config = RenderConfig {
        os_style: OsStyle::Linux,
        show_colors: true,
        show_held_indicator: false,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(RenderConfig::from_json(&json).unwrap(), config);
}
