//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::api::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub storage: StorageHealth,
}

/// Persistence store health with optional error message.
#[derive(Debug, Serialize)]
pub struct StorageHealth {
    pub backend: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies database connectivity when one is configured.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let ping = match &state.database {
        Some(db) => db.ping().await.map_err(|e| e.to_string()),
        None => Ok(()),
    };

    let storage = match ping {
        Ok(()) => StorageHealth {
            backend: state.storage.to_string(),
            status: "healthy".to_string(),
            error: None,
        },
        Err(e) => StorageHealth {
            backend: state.storage.to_string(),
            status: "unhealthy".to_string(),
            error: Some(e),
        },
    };

    let all_healthy = storage.error.is_none();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        storage,
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
