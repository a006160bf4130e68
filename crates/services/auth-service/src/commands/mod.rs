//! CLI command implementations.

pub mod password;
