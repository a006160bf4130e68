//! Common utilities shared across all services.
//!
//! This crate provides:
//! - Unified application error handling over domain errors
//! - Configuration structures
//! - Tracing initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
