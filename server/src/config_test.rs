use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.predict_upstream, None);
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts {
            request_secs: DEFAULT_PREDICT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_PREDICT_CONNECT_TIMEOUT_SECS
        }
    );
    assert!(!cfg.cookie_secure);
}

#[test]
fn overrides_are_applied() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("PREDICT_UPSTREAM_URL", " http://127.0.0.1:8000/predict/ "),
        ("PREDICT_REQUEST_TIMEOUT_SECS", "12"),
        ("PREDICT_CONNECT_TIMEOUT_SECS", "2"),
        ("COOKIE_SECURE", "yes"),
    ])
    .unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.predict_upstream.as_deref(), Some("http://127.0.0.1:8000/predict/"));
    assert_eq!(cfg.timeouts, ProxyTimeouts { request_secs: 12, connect_secs: 2 });
    assert!(cfg.cookie_secure);
}

#[test]
fn invalid_port_is_an_error() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn non_http_upstream_is_an_error() {
    let err = config_from(&[("PREDICT_UPSTREAM_URL", "ftp://models.local")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { var: "PREDICT_UPSTREAM_URL", .. }));
}

#[test]
fn blank_upstream_disables_proxy() {
    let cfg = config_from(&[("PREDICT_UPSTREAM_URL", "   ")]).unwrap();
    assert_eq!(cfg.predict_upstream, None);
}

#[test]
fn unparsable_timeouts_fall_back_to_defaults() {
    let cfg = config_from(&[("PREDICT_REQUEST_TIMEOUT_SECS", "soon")]).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_PREDICT_REQUEST_TIMEOUT_SECS);
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}
