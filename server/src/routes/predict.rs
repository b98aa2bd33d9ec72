//! `POST /predict/`: CSRF-checked forwarder to the prediction service.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reported as `{ "error": "..." }` JSON so the diagnosis
//! chat can render it the same way as an error returned by the model
//! itself. Upstream bodies are relayed verbatim along with their status.

#[cfg(test)]
#[path = "predict_test.rs"]
mod tests;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};

use crate::csrf::{self, CSRF_COOKIE, CSRF_HEADER};
use crate::state::AppState;

/// Request body shared by the browser and the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictPayload {
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("CSRF token missing or invalid")]
    CsrfRejected,

    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error("prediction service is not configured")]
    NotConfigured,

    #[error("prediction service unavailable: {0}")]
    Upstream(String),

    #[error("prediction service returned an unreadable response: {0}")]
    UpstreamBody(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::CsrfRejected => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) | Self::UpstreamBody(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Validate the request and extract the symptom text.
pub(crate) fn check_request(
    jar: &CookieJar,
    headers: &HeaderMap,
    body: Result<Json<PredictPayload>, JsonRejection>,
) -> Result<PredictPayload, ProxyError> {
    let cookie_token = jar.get(CSRF_COOKIE).map(Cookie::value);
    let header_token = headers.get(CSRF_HEADER).and_then(|v| v.to_str().ok());
    if !csrf::tokens_match(cookie_token, header_token) {
        return Err(ProxyError::CsrfRejected);
    }

    let Json(payload) = body.map_err(|rejection| ProxyError::BadRequest(rejection.body_text()))?;
    if payload.text.trim().is_empty() {
        return Err(ProxyError::BadRequest("text is required".to_owned()));
    }
    Ok(payload)
}

async fn forward(
    http: &reqwest::Client,
    upstream: &str,
    payload: &PredictPayload,
) -> Result<(StatusCode, serde_json::Value), ProxyError> {
    let resp = http
        .post(upstream)
        .json(payload)
        .send()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .map_err(|e| ProxyError::UpstreamBody(e.to_string()))?;
    Ok((status, body))
}

/// `POST /predict/` handler.
pub async fn predict(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Result<Json<PredictPayload>, JsonRejection>,
) -> Response {
    let payload = match check_request(&jar, &headers, body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "rejected prediction request");
            return e.into_response();
        }
    };

    let Some(upstream) = state.config.predict_upstream.as_deref() else {
        return ProxyError::NotConfigured.into_response();
    };

    match forward(&state.http, upstream, &payload).await {
        Ok((status, body)) => {
            tracing::debug!(%status, chars = payload.text.len(), "prediction relayed");
            (status, Json(body)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "prediction upstream failed");
            e.into_response()
        }
    }
}
