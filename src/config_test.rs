#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_storefront_markup() {
    let config = UiConfig::default();
    assert_eq!(config.menu_icon, "#menu-Icon");
    assert_eq!(config.navbar, ".menu");
    assert_eq!(config.header, ".header");
    assert_eq!(config.open_class, "bx-x");
    assert_eq!(config.active_class, "active");
    assert_eq!(config.sticky_class, "sticky");
    assert_eq!(config.sticky_threshold_px, 100.0);
    assert_eq!(config.spy_offset_px, 150.0);
}

#[test]
fn dormant_features_are_off_by_default() {
    let config = UiConfig::default();
    assert!(!config.dark_mode);
    assert!(!config.scroll_spy);
}

#[test]
fn defaults_validate() {
    assert!(UiConfig::default().validate().is_ok());
}

// =============================================================
// from_json
// =============================================================

#[test]
fn missing_block_yields_defaults() {
    assert_eq!(UiConfig::from_json(None).unwrap(), UiConfig::default());
}

#[test]
fn blank_block_yields_defaults() {
    assert_eq!(UiConfig::from_json(Some("  \n ")).unwrap(), UiConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = UiConfig::from_json(Some(r#"{ "dark_mode": true, "sticky_threshold_px": 80 }"#)).unwrap();
    assert!(config.dark_mode);
    assert_eq!(config.sticky_threshold_px, 80.0);
    assert_eq!(config.menu_icon, "#menu-Icon");
    assert!(!config.scroll_spy);
}

#[test]
fn malformed_json_is_config_error() {
    let err = UiConfig::from_json(Some("{ dark_mode: yes")).unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
}

#[test]
fn unknown_field_is_rejected() {
    let err = UiConfig::from_json(Some(r#"{ "darkmode": true }"#)).unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
}

#[test]
fn empty_selector_is_rejected() {
    let err = UiConfig::from_json(Some(r#"{ "navbar": " " }"#)).unwrap_err();
    match err {
        UiError::ConfigValue(msg) => assert!(msg.contains("navbar")),
        other => panic!("expected ConfigValue, got {other:?}"),
    }
}

#[test]
fn class_with_space_is_rejected() {
    let err = UiConfig::from_json(Some(r#"{ "sticky_class": "is sticky" }"#)).unwrap_err();
    match err {
        UiError::ConfigValue(msg) => assert!(msg.contains("sticky_class")),
        other => panic!("expected ConfigValue, got {other:?}"),
    }
}

#[test]
fn negative_threshold_is_rejected() {
    let err = UiConfig::from_json(Some(r#"{ "sticky_threshold_px": -1 }"#)).unwrap_err();
    assert!(matches!(err, UiError::ConfigValue(_)));
}

#[test]
fn zero_threshold_is_allowed() {
    let config = UiConfig::from_json(Some(r#"{ "spy_offset_px": 0 }"#)).unwrap();
    assert_eq!(config.spy_offset_px, 0.0);
}

#[test]
fn non_finite_threshold_is_rejected() {
    let config = UiConfig { sticky_threshold_px: f64::NAN, ..UiConfig::default() };
    assert!(matches!(config.validate(), Err(UiError::ConfigValue(_))));
}

#[test]
fn serialized_defaults_parse_back() {
    let json = serde_json::to_string(&UiConfig::default()).unwrap();
    assert_eq!(UiConfig::from_json(Some(&json)).unwrap(), UiConfig::default());
}
