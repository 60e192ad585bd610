//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;

use common::AppError;

use crate::api::handlers::{auth_routes, health_routes};
use crate::api::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .fallback(|| async { AppError::NotFound })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
