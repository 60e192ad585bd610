//! HTTP API tests using the in-memory store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::DatabaseConfig;
use credential_service_lib::api::handlers::LoginResponse;
use credential_service_lib::api::{create_router, AppState};
use credential_service_lib::infra::Database;
use credential_service_lib::repository::{InMemoryUserStore, UserStore};
use credential_service_lib::service::CredentialManager;
use domain::User;

fn app_with(store: Arc<InMemoryUserStore>) -> Router {
    let service = Arc::new(CredentialManager::new(store));
    create_router(AppState::in_memory(service))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_register_returns_created_without_password() {
    let store = Arc::new(InMemoryUserStore::new());
    let app = app_with(store.clone());

    let response = app
        .oneshot(post_json(
            "/auth/register",
            json!({"username": "alice", "password": "pw1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body, json!({"username": "alice"}));
    assert_eq!(store.snapshot(), vec![User::new("alice", "pw1")]);
}

#[tokio::test]
async fn test_login_success() {
    let store = Arc::new(InMemoryUserStore::with_users([User::new("alice", "pw1")]));
    let app = app_with(store);

    let response = app
        .oneshot(post_json(
            "/auth/login",
            json!({"username": "alice", "password": "pw1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: LoginResponse = serde_json::from_value(body_json(response).await).unwrap();
    assert!(body.authenticated);
}

#[tokio::test]
async fn test_login_failures_are_unauthorized() {
    let store = Arc::new(InMemoryUserStore::with_users([User::new("alice", "pw1")]));
    let app = app_with(store);

    for payload in [
        json!({"username": "alice", "password": "wrong"}),
        json!({"username": "bob", "password": "pw1"}),
    ] {
        let response = app
            .clone()
            .oneshot(post_json("/auth/login", payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }
}

#[tokio::test]
async fn test_register_then_login_over_http() {
    let app = app_with(Arc::new(InMemoryUserStore::new()));

    let response = app
        .clone()
        .oneshot(post_json(
            "/auth/register",
            json!({"username": "carol", "password": "s3cret"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json(
            "/auth/login",
            json!({"username": "carol", "password": "s3cret"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let app = app_with(Arc::new(InMemoryUserStore::new()));

    let response = app
        .oneshot(post_json("/auth/register", json!({"username": "alice"})))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_health_reports_memory_backend() {
    let app = app_with(Arc::new(InMemoryUserStore::new()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "memory");
}

async fn sqlite_app() -> (Database, Router) {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = Database::connect(&config).await.unwrap();
    let service = Arc::new(CredentialManager::new(Arc::new(UserStore::new(
        db.get_connection(),
    ))));
    let app = create_router(AppState::new(service, Arc::new(db.clone())));
    (db, app)
}

#[tokio::test]
async fn test_health_reports_healthy_database() {
    let (_db, app) = sqlite_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "postgres");
    assert!(body["storage"].get("error").is_none());
}

#[tokio::test]
async fn test_health_degraded_when_database_unreachable() {
    let (db, app) = sqlite_app().await;
    db.get_connection().close().await.unwrap();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["storage"]["status"], "unhealthy");
    assert!(body["storage"]["error"].is_string());
}

#[tokio::test]
async fn test_duplicate_register_on_sql_store_is_conflict() {
    let (_db, app) = sqlite_app().await;
    let payload = json!({"username": "alice", "password": "pw1"});

    let first = app
        .clone()
        .oneshot(post_json("/auth/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(post_json("/auth/register", payload))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = body_json(second).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(body["error"]["message"], "User already exists");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = app_with(Arc::new(InMemoryUserStore::new()));

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
