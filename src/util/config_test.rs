use super::*;

#[test]
fn absent_or_blank_block_is_default() {
    assert_eq!(parse(None).unwrap(), SiteConfig::default());
    assert_eq!(parse(Some("  \n ")).unwrap(), SiteConfig::default());
}

#[test]
fn overrides_are_applied() {
    let config = parse(Some(r##"{ "selectors": { "preloader": "#splash" } }"##)).unwrap();
    assert_eq!(config.selectors.preloader, "#splash");
    assert_eq!(config.selectors.drawer, SiteConfig::default().selectors.drawer);
}

#[test]
fn bad_block_is_a_config_error() {
    assert!(matches!(parse(Some("{")), Err(BootError::Config(_))));
    assert!(matches!(parse(Some(r#"{ "observe": { "section_threshold": 2 } }"#)), Err(BootError::Config(_))));
}

#[test]
fn resolve_falls_back_to_defaults() {
    assert_eq!(resolve(Some("not json")), SiteConfig::default());
    assert_eq!(resolve(Some(r#"{ "theme": { "storage_key": "k" } }"#)).theme.storage_key, "k");
}
