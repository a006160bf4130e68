//! Domain layer - Core identity value objects and credential handling.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Every value object is produced by a validating constructor; there is no
//! way to build one from a bare primitive without passing its checks.

pub mod constants;
pub mod error;
pub mod hasher;
pub mod metadata;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult, ErrorKind};
pub use hasher::{CredentialHasher, HashedPassword, HasherParams};
pub use metadata::{ClientIp, UserAgent, UserMetadata};
pub use password::{Password, PasswordPolicy};
pub use user::{User, UserId, UserName, UserResponse, UserRole};
