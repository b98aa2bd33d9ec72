//! HTTP call to the prediction endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the request is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and unparseable bodies both come back as `Err(String)`
//! so the chat can render them uniformly. The HTTP status is not inspected:
//! the backend reports its own failures through the `error` field.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::PredictionResponse;
#[cfg(feature = "hydrate")]
use super::types::PredictRequest;

/// Endpoint used when the page does not configure one.
pub const DEFAULT_PREDICT_URL: &str = "/predict/";

/// Header carrying the CSRF token echoed from the cookie.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Resolve the configured endpoint, falling back to [`DEFAULT_PREDICT_URL`]
/// when unset or blank.
#[must_use]
pub fn predict_endpoint(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_PREDICT_URL)
        .to_owned()
}

/// Send `text` to the prediction endpoint at `url`.
///
/// `csrf_token` is attached as [`CSRF_HEADER`] when present.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response
/// body is not a prediction JSON object.
pub async fn request_prediction(url: &str, text: &str, csrf_token: Option<&str>) -> Result<PredictionResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut builder = gloo_net::http::Request::post(url);
        if let Some(token) = csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }
        let resp = builder
            .json(&PredictRequest { text })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<PredictionResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, text, csrf_token);
        Err("not available on server".to_owned())
    }
}
