//! Double-submit CSRF token.
//!
//! Every response carries a `csrftoken` cookie (readable by scripts) when the
//! browser does not already have one. State-changing requests must echo the
//! same value in the `X-CSRFToken` header.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod tests;

use std::fmt::Write;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use rand::Rng;
use time::Duration;

use crate::state::AppState;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "x-csrftoken";

fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a random 16-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Whether the cookie and header tokens are both present, non-empty and equal.
#[must_use]
pub fn tokens_match(cookie: Option<&str>, header: Option<&str>) -> bool {
    match (cookie, header) {
        (Some(cookie), Some(header)) => !cookie.is_empty() && cookie == header,
        _ => false,
    }
}

/// Middleware: attach a fresh CSRF cookie to the response when the request
/// had none.
pub async fn issue_cookie(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if jar.get(CSRF_COOKIE).is_some() {
        return response;
    }

    let cookie = Cookie::build((CSRF_COOKIE, generate_token()))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(Duration::days(365));
    (jar.add(cookie), response).into_response()
}
