use super::*;

#[test]
fn defaults_match_toggle_contract() {
    let cfg = HostConfig::default();
    assert_eq!(cfg.fallback, Theme::Light);
    assert_eq!(cfg.cookie_name, "greek-alphabet-dark-mode");
    assert_eq!(cfg.cookie_max_age_secs, 31_536_000);
    assert_eq!(cfg.cookie_max_age(), Duration::days(365));
    assert_eq!(cfg.theme_attribute, "data-theme");
    assert_eq!(cfg.color_scheme, "light dark");
}

#[test]
fn bundled_config_equals_defaults() {
    assert_eq!(HostConfig::bundled(), HostConfig::default());
}

#[test]
fn from_json_fills_missing_keys_with_defaults() {
    let cfg = HostConfig::from_json(r#"{ "title": "Αλφάβητο" }"#).unwrap();
    assert_eq!(cfg.title, "Αλφάβητο");
    assert_eq!(cfg.cookie_name, DARK_MODE_COOKIE);
    assert_eq!(cfg.fallback, Theme::Light);
}

#[test]
fn from_json_parses_overrides() {
    let cfg = HostConfig::from_json(
        r#"{ "fallback": "dark", "cookie_name": "ga-dark", "cookie_max_age_secs": 60, "theme_attribute": "data-mode" }"#,
    )
    .unwrap();
    assert_eq!(cfg.fallback, Theme::Dark);
    assert_eq!(cfg.cookie_name, "ga-dark");
    assert_eq!(cfg.cookie_max_age(), Duration::seconds(60));
    assert_eq!(cfg.theme_attribute, "data-mode");
}

#[test]
fn from_json_rejects_unknown_keys() {
    let err = HostConfig::from_json(r#"{ "classSuffix": "" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(HostConfig::from_json("{"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_unknown_fallback_token() {
    assert!(matches!(HostConfig::from_json(r#"{ "fallback": "system" }"#), Err(ConfigError::Parse(_))));
}

#[test]
fn validate_rejects_empty_cookie_name() {
    let err = HostConfig::from_json(r#"{ "cookie_name": " " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("cookie_name")));
}

#[test]
fn validate_rejects_empty_attribute() {
    let err = HostConfig::from_json(r#"{ "theme_attribute": "" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("theme_attribute")));
}

#[test]
fn validate_rejects_non_positive_max_age() {
    let err = HostConfig::from_json(r#"{ "cookie_max_age_secs": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("cookie_max_age_secs")));
}

#[test]
fn validate_rejects_max_age_beyond_browser_cap() {
    let err = HostConfig::from_json(r#"{ "cookie_max_age_secs": 400000000000 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("cookie_max_age_secs")));

    let at_cap = format!(r#"{{ "cookie_max_age_secs": {MAX_COOKIE_MAX_AGE_SECS} }}"#);
    assert!(HostConfig::from_json(&at_cap).is_ok());
}

#[test]
fn validate_rejects_cookie_names_that_are_not_tokens() {
    for name in ["dark mode;x", "dark mode", "a=b", "a,b", "a;b", "tab\there", "ctl\u{1}"] {
        let raw = serde_json::json!({ "cookie_name": name }).to_string();
        let err = HostConfig::from_json(&raw).unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid(ref msg) if msg.contains("cookie_name")),
            "accepted {name:?}"
        );
    }
}

#[test]
fn validate_accepts_namespaced_cookie_names() {
    for name in ["greek-alphabet-dark-mode", "ga_dark.v2", "__Host-dark"] {
        let raw = serde_json::json!({ "cookie_name": name }).to_string();
        assert_eq!(HostConfig::from_json(&raw).unwrap().cookie_name, name);
    }
}
