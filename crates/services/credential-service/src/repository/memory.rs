//! In-memory user repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::User;

use super::UserRepository;

/// Process-local repository backed by a `HashMap`.
///
/// Saving an existing username replaces the stored record (last write wins).
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with users
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        Self {
            users: RwLock::new(map),
        }
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted copy of every stored user
    pub fn snapshot(&self) -> Vec<User> {
        let mut users: Vec<User> = self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }
}

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::internal("user store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn save(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(username).cloned())
    }
}
