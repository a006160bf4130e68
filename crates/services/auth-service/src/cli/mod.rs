//! CLI module - Operator commands for credential handling.
//!
//! Provides commands for:
//! - `hash-password` - Hash a password with the configured work factor
//! - `verify-password` - Check a password against a stored hash
//! - `check-password` - Check a password against the configured policy

pub mod args;

pub use args::{Cli, Commands};
