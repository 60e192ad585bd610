//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User domain entity.
///
/// `username` is the lookup key; the store is responsible for keeping it
/// unique. `password` is kept exactly as it was supplied at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Create a new user from raw credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a candidate password against the stored one (exact match)
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique username
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
        }
    }
}
