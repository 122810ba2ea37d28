use super::*;

#[test]
fn setup_order_is_fixed() {
    let names: Vec<_> = SETUP_ORDER.iter().map(|h| h.name()).collect();
    assert_eq!(
        names,
        vec!["theme", "nav", "smooth-scroll", "skill-tags", "skill-cards", "skill-bars", "about-flip", "loading"]
    );
}

#[test]
fn every_handler_appears_once() {
    for (i, a) in SETUP_ORDER.iter().enumerate() {
        for b in &SETUP_ORDER[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn missing_or_blank_config_uses_defaults() {
    assert_eq!(config_from_markup(None), PageConfig::default());
    assert_eq!(config_from_markup(Some("   \n ")), PageConfig::default());
}

#[test]
fn embedded_config_overrides_defaults() {
    let config = config_from_markup(Some(r#" {"nav": {"threshold_px": 24}} "#));
    assert!((config.nav.threshold_px - 24.0).abs() < f64::EPSILON);
}

#[test]
fn broken_config_fails_open_to_defaults() {
    assert_eq!(config_from_markup(Some("{oops")), PageConfig::default());
    assert_eq!(config_from_markup(Some(r#"{"loading": {"tick_ms": 0}}"#)), PageConfig::default());
}
