//! HTTP Basic authentication middleware.
//!
//! One statically configured credential pair guards the push routes. Both
//! fields are compared in constant time, and the verified username is placed
//! in request extensions for handlers to attribute updates.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::AppError;
use crate::state::AppState;

/// Username that passed authentication, available via request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

/// Reject the request with 401 unless it carries the configured credentials.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let (username, password) = decode_basic(header_value).ok_or(AppError::Unauthorized)?;

    let username_ok = constant_time_eq(username.as_bytes(), state.config.auth_username.as_bytes());
    let password_ok = constant_time_eq(password.as_bytes(), state.config.auth_password.as_bytes());

    if !(username_ok && password_ok) {
        tracing::warn!("Rejected request with invalid credentials");
        return Err(AppError::Unauthorized);
    }

    request.extensions_mut().insert(AuthenticatedUser(username));
    Ok(next.run(request).await)
}

/// Split a `Basic <base64(user:pass)>` header into its credential pair.
fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
