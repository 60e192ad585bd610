//! Domain layer - Core business entities.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! Persistence and transport concerns live in the service crates.

pub mod user;

pub use user::{User, UserResponse};
