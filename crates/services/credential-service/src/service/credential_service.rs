//! Credential service - registration and login.
//!
//! Passwords are stored and compared verbatim. There is no hashing and the
//! comparison is not constant-time.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use common::AppResult;
use domain::User;

use crate::repository::UserRepository;

/// Credential service trait for dependency injection.
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Persist the user unchanged and return what the store returned
    async fn register(&self, user: User) -> AppResult<User>;

    /// Check a username/password pair against the stored user.
    ///
    /// An unknown username yields `Ok(false)`, not an error.
    async fn login(&self, username: &str, password: &str) -> AppResult<bool>;
}

/// Concrete implementation of CredentialService using a repository.
pub struct CredentialManager {
    repo: Arc<dyn UserRepository>,
}

impl CredentialManager {
    /// Create new credential service instance with repository
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use credential_service_lib::repository::InMemoryUserStore;
    /// use credential_service_lib::service::{CredentialManager, CredentialService};
    /// use domain::User;
    ///
    /// let svc = CredentialManager::new(Arc::new(InMemoryUserStore::new()));
    /// tokio_test::block_on(svc.register(User::new("alice", "pw1"))).unwrap();
    /// assert!(tokio_test::block_on(svc.login("alice", "pw1")).unwrap());
    /// assert!(!tokio_test::block_on(svc.login("alice", "wrong")).unwrap());
    /// ```
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CredentialService for CredentialManager {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn register(&self, user: User) -> AppResult<User> {
        let saved = self.repo.save(user).await?;
        debug!("user saved");
        Ok(saved)
    }

    #[instrument(skip(self, password))]
    async fn login(&self, username: &str, password: &str) -> AppResult<bool> {
        let authenticated = match self.repo.find_by_username(username).await? {
            Some(user) => user.password_matches(password),
            None => false,
        };
        debug!(authenticated, "login checked");
        Ok(authenticated)
    }
}
