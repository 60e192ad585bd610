//! Credential Service Library
//!
//! User registration and login over a pluggable persistence store, served
//! as a small HTTP API. The service can run against PostgreSQL or a
//! process-local in-memory store.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::{CredentialServiceConfig, StorageBackend};
use crate::infra::Database;
use crate::repository::{InMemoryUserStore, UserStore};
use crate::service::CredentialManager;

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &CredentialServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Wire the repository, service and state for the configured backend.
pub async fn build_state(
    config: &CredentialServiceConfig,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let state = match config.storage {
        StorageBackend::Postgres => {
            let db = Arc::new(Database::connect(&config.database).await?);
            let user_repo = Arc::new(UserStore::new(db.get_connection()));
            AppState::new(Arc::new(CredentialManager::new(user_repo)), db)
        }
        StorageBackend::Memory => {
            let user_repo = Arc::new(InMemoryUserStore::new());
            AppState::in_memory(Arc::new(CredentialManager::new(user_repo)))
        }
    };

    Ok(state)
}

/// Run the HTTP server with the given configuration.
pub async fn run(config: CredentialServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config).await?;
    let app = create_router(state);

    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!(storage = %config.storage, "Credential service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
