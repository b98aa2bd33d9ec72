use super::*;

#[test]
fn predict_endpoint_defaults_when_unset() {
    assert_eq!(predict_endpoint(None), "/predict/");
}

#[test]
fn predict_endpoint_defaults_when_blank() {
    assert_eq!(predict_endpoint(Some("  ")), DEFAULT_PREDICT_URL);
}

#[test]
fn predict_endpoint_keeps_configured_url() {
    assert_eq!(predict_endpoint(Some(" /api/diagnose/ ")), "/api/diagnose/");
}
