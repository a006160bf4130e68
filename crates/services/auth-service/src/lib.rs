//! Auth Service Library
//!
//! Registers and authenticates users on top of the identity domain.
//! Persistence is reached through the [`repository::UserStore`] port;
//! transport and token issuance live outside this crate.

pub mod cli;
pub mod commands;
pub mod config;
pub mod repository;
pub mod service;

pub use config::AuthServiceConfig;
pub use repository::{UserRecord, UserStore};
pub use service::{AuthService, Authenticator};
