//! Service layer - Business logic for authentication.

pub mod auth_service;

pub use auth_service::{AuthService, Authenticator};
