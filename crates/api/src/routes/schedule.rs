use axum::{middleware::from_fn_with_state, routing::get, Router};
use std::sync::Arc;

use crate::{handlers, middleware::auth, ApiState};

/// Schedule resource routes. Every operation requires an authenticated
/// caller; PATCH shares the full-replace update handler with PUT.
pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/schedules",
            get(handlers::schedule::list_schedules).post(handlers::schedule::create_schedule),
        )
        .route(
            "/schedules/:id",
            get(handlers::schedule::get_schedule)
                .put(handlers::schedule::update_schedule)
                .patch(handlers::schedule::update_schedule)
                .delete(handlers::schedule::delete_schedule),
        )
        .route_layer(from_fn_with_state(state, auth::require_bearer_auth))
}
