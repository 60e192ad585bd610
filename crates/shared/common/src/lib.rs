//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified error handling for HTTP handlers and repositories
//! - Configuration structures
//! - Tracing initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::{AppError, AppResult};
