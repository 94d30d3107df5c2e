use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

const REQUIRED: [(&str, &str); 2] = [("SUPABASE_URL", "https://abc.supabase.co/"), ("SUPABASE_ANON_KEY", "anon-key")];

#[test]
fn defaults_apply_with_only_required_vars() {
    let cfg = AppConfig::from_lookup(lookup(&REQUIRED)).unwrap();
    assert_eq!(cfg.supabase.url, "https://abc.supabase.co");
    assert_eq!(cfg.supabase.anon_key, "anon-key");
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_url, "http://localhost:3000");
    assert!(!cfg.cookie_secure);
    assert_eq!(
        cfg.supabase.timeouts,
        HttpTimeouts {
            request_secs: DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_AUTH_CONNECT_TIMEOUT_SECS
        }
    );
    assert_eq!(cfg.rawg_api_key, None);
}

#[test]
fn missing_url_errors() {
    let err = AppConfig::from_lookup(lookup(&[("SUPABASE_ANON_KEY", "k")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("SUPABASE_URL"));
}

#[test]
fn missing_anon_key_errors() {
    let err = AppConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://x.supabase.co")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("SUPABASE_ANON_KEY"));
}

#[test]
fn blank_required_var_counts_as_missing() {
    let err = AppConfig::from_lookup(lookup(&[("SUPABASE_URL", "  "), ("SUPABASE_ANON_KEY", "k")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("SUPABASE_URL"));
}

#[test]
fn overrides_are_parsed() {
    let mut pairs = REQUIRED.to_vec();
    pairs.extend([
        ("HOST", "0.0.0.0"),
        ("PORT", "8080"),
        ("SITE_URL", "https://logari.app/"),
        ("AUTH_REQUEST_TIMEOUT_SECS", "42"),
        ("AUTH_CONNECT_TIMEOUT_SECS", "7"),
        ("RAWG_API_KEY", "rawg-key"),
    ]);
    let cfg = AppConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8080");
    assert_eq!(cfg.site_url, "https://logari.app");
    assert!(cfg.cookie_secure, "https site should infer secure cookies");
    assert_eq!(cfg.supabase.timeouts, HttpTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.rawg_api_key.as_deref(), Some("rawg-key"));
}

#[test]
fn site_url_default_follows_port() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("PORT", "4000"));
    let cfg = AppConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(cfg.site_url, "http://localhost:4000");
}

#[test]
fn invalid_port_errors() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("PORT", "eighty"));
    let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn invalid_host_errors() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("HOST", "not-an-ip"));
    let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HOST", .. }));
}

#[test]
fn cookie_secure_explicit_override_beats_scheme() {
    let mut pairs = REQUIRED.to_vec();
    pairs.extend([("SITE_URL", "https://logari.app"), ("COOKIE_SECURE", "off")]);
    let cfg = AppConfig::from_lookup(lookup(&pairs)).unwrap();
    assert!(!cfg.cookie_secure);
}

#[test]
fn cookie_secure_rejects_unknown_words() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("COOKIE_SECURE", "maybe"));
    let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "COOKIE_SECURE", .. }));
}

#[test]
fn unparseable_timeout_is_invalid() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("AUTH_REQUEST_TIMEOUT_SECS", "soon"));
    let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "AUTH_REQUEST_TIMEOUT_SECS", value: "soon".into() });
}

#[test]
fn zero_timeout_is_invalid() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("AUTH_CONNECT_TIMEOUT_SECS", "0"));
    let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "AUTH_CONNECT_TIMEOUT_SECS", value: "0".into() });
}

#[test]
fn parse_timeout_defaults_when_unset() {
    assert_eq!(parse_timeout("AUTH_REQUEST_TIMEOUT_SECS", None, 10), Ok(10));
    assert_eq!(parse_timeout("AUTH_REQUEST_TIMEOUT_SECS", Some("3".into()), 10), Ok(3));
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " On "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}

#[test]
fn supabase_config_debug_redacts_key() {
    let cfg = AppConfig::from_lookup(lookup(&REQUIRED)).unwrap();
    let debug = format!("{:?}", cfg.supabase);
    assert!(debug.contains("abc.supabase.co"));
    assert!(!debug.contains("anon-key"));
}

// =============================================================================
// from_env: env manipulation requires unsafe in edition 2024.
// =============================================================================

/// # Safety
/// Only this test touches these variables.
unsafe fn clear_app_env() {
    unsafe {
        for key in [
            "SUPABASE_URL",
            "SUPABASE_ANON_KEY",
            "HOST",
            "PORT",
            "SITE_URL",
            "COOKIE_SECURE",
            "AUTH_REQUEST_TIMEOUT_SECS",
            "AUTH_CONNECT_TIMEOUT_SECS",
            "RAWG_API_KEY",
        ] {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        clear_app_env();
        std::env::set_var("SUPABASE_URL", "http://127.0.0.1:54321");
        std::env::set_var("SUPABASE_ANON_KEY", "local-anon");
    }
    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.supabase.url, "http://127.0.0.1:54321");
    assert_eq!(cfg.supabase.anon_key, "local-anon");
    unsafe { clear_app_env() };
}
