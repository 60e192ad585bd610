//! Service layer - business logic.

mod credential_service;

pub use credential_service::{CredentialManager, CredentialService};
