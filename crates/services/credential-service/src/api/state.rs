//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::StorageBackend;
use crate::infra::Database;
use crate::service::CredentialService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub credential_service: Arc<dyn CredentialService>,
    /// Database handle, absent for the in-memory backend
    pub database: Option<Arc<Database>>,
    /// Backend name reported by the health check
    pub storage: StorageBackend,
}

impl AppState {
    /// Create state backed by a database connection.
    pub fn new(credential_service: Arc<dyn CredentialService>, database: Arc<Database>) -> Self {
        Self {
            credential_service,
            database: Some(database),
            storage: StorageBackend::Postgres,
        }
    }

    /// Create state for the in-memory backend.
    pub fn in_memory(credential_service: Arc<dyn CredentialService>) -> Self {
        Self {
            credential_service,
            database: None,
            storage: StorageBackend::Memory,
        }
    }
}
