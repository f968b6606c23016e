use axum::body::{to_bytes, Body};
use axum::http::header::AUTHORIZATION;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use tower::ServiceExt;
use weekplan_api::middleware::auth::{self, Claims};
use weekplan_core::errors::ScheduleError;

use crate::test_utils::{build_state, TEST_JWT_SECRET};

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = ScheduleError::NotFound("Resource not found".to_string());

    let response = weekplan_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = ScheduleError::Validation("day: this field may not be blank".to_string());

    let response = weekplan_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = ScheduleError::Authentication("Missing Authorization header".to_string());

    let response = weekplan_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let error = ScheduleError::Conflict("a schedule for \"monday\" was created concurrently".to_string());

    let response = weekplan_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = ScheduleError::Database(eyre::eyre!("Database error"));

    let response = weekplan_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = ScheduleError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = weekplan_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_with_bearer_scheme() {
    assert_eq!(
        auth::with_bearer_scheme("abc123").as_deref(),
        Some("Bearer abc123")
    );
    assert_eq!(auth::with_bearer_scheme("Bearer abc123"), None);
    assert_eq!(auth::with_bearer_scheme(""), None);
}

// Router with a probe route that echoes the authorization header the
// downstream layers actually see.
fn normalizing_app() -> Router {
    async fn echo_authorization(headers: axum::http::HeaderMap) -> String {
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    Router::new()
        .route("/probe", get(echo_authorization))
        .layer(axum::middleware::from_fn(auth::normalize_bearer))
}

async fn effective_header(app: Router, header: Option<&str>) -> String {
    let mut builder = Request::builder().uri("/probe");
    if let Some(value) = header {
        builder = builder.header(AUTHORIZATION, value);
    }

    let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_normalize_bearer_prefixes_raw_token() {
    let seen = effective_header(normalizing_app(), Some("abc123")).await;
    assert_eq!(seen, "Bearer abc123");
}

#[tokio::test]
async fn test_normalize_bearer_leaves_prefixed_token_unchanged() {
    let seen = effective_header(normalizing_app(), Some("Bearer abc123")).await;
    assert_eq!(seen, "Bearer abc123");
}

#[tokio::test]
async fn test_normalize_bearer_leaves_empty_header_unchanged() {
    let seen = effective_header(normalizing_app(), Some("")).await;
    assert_eq!(seen, "");
}

#[tokio::test]
async fn test_normalize_bearer_leaves_absent_header_absent() {
    let seen = effective_header(normalizing_app(), None).await;
    assert_eq!(seen, "");
}

// Router gated by the bearer-auth middleware, with the normalizer in front
// as in the real application.
fn protected_app() -> Router {
    let state = build_state();

    Router::new()
        .route("/protected", get(|| async { "ok" }))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            auth::require_bearer_auth,
        ))
        .layer(axum::middleware::from_fn(auth::normalize_bearer))
}

fn make_token(secret: &str, exp: i64) -> String {
    let claims = Claims {
        sub: "testuser".to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

async fn protected_status(header: Option<String>) -> StatusCode {
    let mut builder = Request::builder().uri("/protected");
    if let Some(value) = header {
        builder = builder.header(AUTHORIZATION, value);
    }

    let response = protected_app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    response.status()
}

#[tokio::test]
async fn test_auth_accepts_valid_token() {
    let token = make_token(TEST_JWT_SECRET, (Utc::now().timestamp()) + 3600);

    let status = protected_status(Some(format!("Bearer {token}"))).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_auth_accepts_raw_token_after_normalization() {
    let token = make_token(TEST_JWT_SECRET, (Utc::now().timestamp()) + 3600);

    // No scheme keyword; the normalizer supplies it before validation runs.
    let status = protected_status(Some(token)).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_auth_rejects_missing_header() {
    let status = protected_status(None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_rejects_garbage_token() {
    let status = protected_status(Some("Bearer not-a-jwt".to_string())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_rejects_wrong_secret() {
    let token = make_token("some-other-secret", (Utc::now().timestamp()) + 3600);

    let status = protected_status(Some(format!("Bearer {token}"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_rejects_expired_token() {
    let token = make_token(TEST_JWT_SECRET, (Utc::now().timestamp()) - 3600);

    let status = protected_status(Some(format!("Bearer {token}"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
