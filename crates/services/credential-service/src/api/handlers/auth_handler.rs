//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult};
use domain::{User, UserResponse};

use crate::api::extractors::AppJson;
use crate::api::AppState;

/// User registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login body
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub authenticated: bool,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .credential_service
        .register(User::new(payload.username, payload.password))
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Check credentials; a failed check is reported as 401
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let authenticated = state
        .credential_service
        .login(&payload.username, &payload.password)
        .await?;

    if !authenticated {
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(LoginResponse { authenticated }))
}
