//! HTTP request handlers.

mod auth_handler;
mod health_handler;

pub use auth_handler::{auth_routes, LoginResponse};
pub use health_handler::health_routes;
