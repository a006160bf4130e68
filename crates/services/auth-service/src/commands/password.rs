//! Password commands: hash, verify, check.
//!
//! Each command returns the line to print so `main` owns all output.

use tracing::debug;

use crate::cli::args::{PasswordArgs, VerifyArgs};
use crate::config::AuthServiceConfig;
use common::{AppError, AppResult};
use domain::{CredentialHasher, HashedPassword, Password};

/// Hash the password and return the encoded hash
pub fn hash(args: PasswordArgs, config: &AuthServiceConfig) -> AppResult<String> {
    let policy = config.password_policy.build()?;
    let password = Password::new(args.password, &policy)?;
    let hasher = CredentialHasher::new(config.hasher.params())?;
    debug!(?hasher, "Hashing password");

    let hashed = hasher.hash(&password)?;
    String::from_utf8(hashed.into_bytes())
        .map_err(|e| AppError::internal(format!("Hash is not UTF-8: {}", e)))
}

/// Verify the password against the supplied hash
pub fn verify(args: VerifyArgs) -> AppResult<String> {
    let hashed = HashedPassword::new(args.hash)?;
    let password = Password::for_verification(args.password.password)
        .map_err(|_| AppError::InvalidCredentials)?;

    // Verification reads the cost from the hash itself
    CredentialHasher::default().verify(&hashed, &password)?;
    Ok("password matches".to_string())
}

/// Check the password against the policy without hashing it
pub fn check(args: PasswordArgs, config: &AuthServiceConfig) -> AppResult<String> {
    let policy = config.password_policy.build()?;
    Password::new(args.password, &policy)?;
    Ok("password satisfies the policy".to_string())
}

/// Whether a failure is a verdict on the input rather than a fault
pub fn is_rejection(err: &AppError) -> bool {
    matches!(err, AppError::Validation(_) | AppError::InvalidCredentials)
}
