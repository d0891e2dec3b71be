// src/auth.rs
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use secrecy::ExposeSecret;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::{error::ApiError, AppState};

const BEARER_PREFIX: &str = "Bearer ";

/// Rejects the request with 401 unless it carries the configured bearer
/// token. Runs before any body extraction.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let expected = state.config.api_token.expose_secret();
    if !token_matches(presented_token(request.headers()), expected) {
        warn!(path = %request.uri().path(), "rejected webhook: bad bearer token");
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(request).await)
}

/// Token from `Authorization: Bearer <token>`, or "" when the header is
/// absent, not UTF-8, or uses another scheme.
pub fn presented_token(headers: &HeaderMap) -> &str {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .unwrap_or_default()
}

pub fn token_matches(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
