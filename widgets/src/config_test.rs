#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_object_is_all_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.selectors.drawer, "#nav-drawer");
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.scroll.hide_after, NAV_HIDE_AFTER_PX);
    assert_eq!(config.preloader.fallback_ms, PRELOADER_FALLBACK_MS);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let raw = r##"{
        "selectors": { "theme_toggle": "#theme-toggle" },
        "theme": { "storage_key": "site-theme" },
        "scroll": { "anchor_gap": 8 }
    }"##;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.selectors.theme_toggle, "#theme-toggle");
    assert_eq!(config.selectors.nav, ".site-nav");
    assert_eq!(config.theme.storage_key, "site-theme");
    assert_eq!(config.theme.dark_class, "dark-mode");
    assert_eq!(config.scroll.anchor_gap, 8.0);
    assert_eq!(config.scroll.scrolled_after, NAV_SCROLLED_AFTER_PX);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse site config"));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let err = SiteConfig::from_json(r#"{ "preloader": { "fade_ms": "slow" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "theme": { "storage_key": "  " } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("storage_key")));
}

#[test]
fn empty_dark_class_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "theme": { "dark_class": "" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("dark_class")));
}

#[test]
fn threshold_out_of_range_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "observe": { "reveal_threshold": 1.5 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("reveal_threshold")));
}

#[test]
fn negative_distance_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "scroll": { "hide_after": -1 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("hide_after")));
}

#[test]
fn defaults_validate() {
    assert!(SiteConfig::default().validate().is_ok());
}

#[test]
fn config_round_trips_through_json() {
    let mut config = SiteConfig::default();
    config.selectors.preloader = "#splash".into();
    let raw = serde_json::to_string(&config).unwrap();
    assert_eq!(SiteConfig::from_json(&raw).unwrap(), config);
}
