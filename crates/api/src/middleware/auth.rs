//! # Authentication Middleware
//!
//! Two pieces run ahead of every schedule operation:
//!
//! 1. [`normalize_bearer`] rewrites the `Authorization` header to carry the
//!    `Bearer ` scheme keyword when a client sends a raw token without it.
//! 2. [`require_bearer_auth`] validates the (now normalized) bearer token as
//!    an HS256 JWT and rejects the request with 401 before any data access.
//!
//! Tokens are issued by an external authority; this service only checks the
//! signature and expiry against the shared secret.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use weekplan_core::errors::ScheduleError;

use crate::{middleware::error_handling::AppError, ApiState};

/// The expected authorization scheme prefix, including the trailing space.
pub const BEARER_SCHEME: &str = "Bearer ";

/// Claims carried by bearer tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Returns the rewritten header value, or `None` when no rewrite is needed
/// (empty value, or the scheme prefix is already present).
pub fn with_bearer_scheme(value: &str) -> Option<String> {
    if value.is_empty() || value.starts_with(BEARER_SCHEME) {
        None
    } else {
        Some(format!("{BEARER_SCHEME}{value}"))
    }
}

/// Header normalization middleware.
///
/// Mutates the effective request metadata seen by downstream authentication.
/// Pure rewrite: no token-shape validation, no error path.
pub async fn normalize_bearer(mut request: Request, next: Next) -> Response {
    let rewritten = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(with_bearer_scheme);

    if let Some(value) = rewritten {
        if let Ok(header) = HeaderValue::from_str(&value) {
            request.headers_mut().insert(AUTHORIZATION, header);
        }
    }

    next.run(request).await
}

/// Bearer authentication middleware gating the schedule resource.
///
/// Extracts the token from the `Authorization` header, validates it against
/// the configured secret, and injects the decoded claims into the request
/// extensions for downstream handlers.
pub async fn require_bearer_auth(
    State(state): State<Arc<ApiState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .map_err(|msg| AppError(ScheduleError::Authentication(msg)))?;

    let claims = validate_token(&token, &state.jwt_secret)
        .map_err(|msg| AppError(ScheduleError::Authentication(msg)))?;

    tracing::debug!("Authenticated bearer token for subject: {}", claims.sub);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Extracts the raw token from the Authorization header
fn bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let value = header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    let token = value
        .strip_prefix(BEARER_SCHEME)
        .ok_or_else(|| "Authorization header must use Bearer token format".to_string())?;

    if token.trim().is_empty() {
        return Err("Empty bearer token".to_string());
    }

    Ok(token.to_string())
}

/// Validates the token signature and expiry, returning the decoded claims
fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("Invalid bearer token: {e}"))?;

    Ok(token_data.claims)
}
