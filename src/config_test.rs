#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_matches_constants() {
    let config = PageConfig::default();
    assert_eq!(config.loading.tick_ms, 14);
    assert_eq!(config.loading.duration_ms, 1460);
    assert_eq!(config.loading.fade_delay_ms, 320);
    assert_eq!(config.loading.hide_delay_ms, 600);
    assert_eq!(config.nav.threshold_px, 10.0);
    assert_eq!(config.skills.reveal_margin_px, 42.0);
    assert_eq!(config.skills.bar_tick_ms, 12);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}").unwrap();
    assert_eq!(config, PageConfig::default());
}

#[test]
fn partial_override_keeps_other_fields() {
    let config = PageConfig::from_json(r#"{"loading": {"duration_ms": 900}, "flip": {"transition_ms": 450}}"#).unwrap();
    assert_eq!(config.loading.duration_ms, 900);
    assert_eq!(config.loading.tick_ms, 14);
    assert_eq!(config.flip.transition_ms, 450);
    assert_eq!(config.flip.resize_settle_ms, 100);
    assert_eq!(config.nav, NavTimings::default());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = PageConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrongly_typed_field_is_a_parse_error() {
    let err = PageConfig::from_json(r#"{"loading": {"tick_ms": "fast"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_periods_are_rejected() {
    let err = PageConfig::from_json(r#"{"loading": {"duration_ms": 0}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroDuration { field: "loading.duration_ms" }));
    assert_eq!(err.to_string(), "loading.duration_ms must be greater than zero");

    let err = PageConfig::from_json(r#"{"skills": {"bar_tick_ms": 0}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroDuration { field: "skills.bar_tick_ms" }));
}

#[test]
fn log_level_parses_known_names_and_falls_back_to_info() {
    let mut config = PageConfig::default();
    assert_eq!(config.log_level(), log::Level::Info);

    config.log_level = Some(" debug ".to_owned());
    assert_eq!(config.log_level(), log::Level::Debug);

    config.log_level = Some("loud".to_owned());
    assert_eq!(config.log_level(), log::Level::Info);
}
