//! Authentication service - Registers and authenticates users.
//!
//! SOLID (SRP): Handles authentication concerns only.
//! DDD: Uses domain value objects for validation and hashing; stored rows
//! re-enter the domain only through `User::from_source`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::config::AuthServiceConfig;
use crate::repository::{UserRecord, UserStore};
use common::{AppError, AppResult};
use domain::{
    CredentialHasher, ErrorKind, HashedPassword, Password, PasswordPolicy, User, UserMetadata,
    UserName, UserRole,
};

/// Verified against when the user does not exist, so unknown names cost
/// the same as wrong passwords.
const DUMMY_PASSWORD: &str = "Dummy!passw0rd";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, name: String, password: String, role: String) -> AppResult<User>;

    /// Check a name/password pair and return the stored user
    async fn authenticate(
        &self,
        name: String,
        password: String,
        metadata: UserMetadata,
    ) -> AppResult<User>;
}

/// Concrete implementation of AuthService over a user store.
pub struct Authenticator {
    store: Arc<dyn UserStore>,
    hasher: Arc<CredentialHasher>,
    policy: PasswordPolicy,
    dummy_hash: HashedPassword,
}

impl Authenticator {
    /// Create new auth service instance
    ///
    /// # Errors
    /// Returns an internal error if the dummy hash cannot be computed.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: CredentialHasher,
        policy: PasswordPolicy,
    ) -> AppResult<Self> {
        let dummy = Password::new(DUMMY_PASSWORD, &PasswordPolicy::default())?;
        let dummy_hash = hasher.hash(&dummy)?;

        Ok(Self {
            store,
            hasher: Arc::new(hasher),
            policy,
            dummy_hash,
        })
    }

    /// Build from loaded configuration
    pub fn from_config(store: Arc<dyn UserStore>, config: &AuthServiceConfig) -> AppResult<Self> {
        let hasher = CredentialHasher::new(config.hasher.params())?;
        let policy = config.password_policy.build()?;
        Self::new(store, hasher, policy)
    }

    /// Validate a stored row; a row that fails is corrupt data, not bad input
    fn rehydrate(record: &UserRecord) -> AppResult<User> {
        User::from_source(record.id, &record.name, &record.password, &record.role).map_err(|e| {
            error!(user_id = record.id, error = %e, "Stored user failed validation");
            AppError::internal(format!("stored user {} is invalid: {}", record.id, e))
        })
    }

    /// Hash on the blocking pool; argon2 is CPU-bound
    async fn hash(&self, password: Password) -> AppResult<HashedPassword> {
        let hasher = Arc::clone(&self.hasher);
        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))??;
        Ok(hashed)
    }

    /// Verify on the blocking pool; `Ok(false)` on mismatch
    async fn verify(&self, hashed: HashedPassword, password: Password) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let result = tokio::task::spawn_blocking(move || hasher.verify(&hashed, &password))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))?;

        match result {
            Ok(()) => Ok(true),
            Err(e) if e.is(ErrorKind::PasswordMismatch) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, name: String, password: String, role: String) -> AppResult<User> {
        let name = UserName::new(name)?;
        let role = UserRole::parse(&role)?;
        let password = Password::new(password, &self.policy)?;

        if self.store.find_by_name(name.as_str()).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let hashed = self.hash(password).await?;
        // PHC strings are ASCII, so this only fails on a broken hasher
        let password_hash = String::from_utf8(hashed.into_bytes())
            .map_err(|e| AppError::internal(format!("Hash is not UTF-8: {}", e)))?;

        let record = self
            .store
            .insert(name.to_string(), password_hash, role.to_string())
            .await?;
        let user = Self::rehydrate(&record)?;

        info!(user_id = record.id, role = %user.role(), "User registered");
        Ok(user)
    }

    async fn authenticate(
        &self,
        name: String,
        password: String,
        metadata: UserMetadata,
    ) -> AppResult<User> {
        let user_agent = metadata.user_agent().as_str();
        let client_ip = metadata.client_ip().as_str();

        // The policy applies to new passwords only; stored ones predate it
        let Ok(password) = Password::for_verification(password) else {
            warn!(%user_agent, %client_ip, "Authentication rejected: empty password");
            return Err(AppError::InvalidCredentials);
        };

        let user = match self.store.find_by_name(&name).await? {
            Some(record) => Some(Self::rehydrate(&record)?),
            None => None,
        };

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid names.
        let stored_hash = user
            .as_ref()
            .map(|u| u.hashed_password().clone())
            .unwrap_or_else(|| self.dummy_hash.clone());
        let password_valid = self.verify(stored_hash, password).await?;

        match user {
            Some(user) if password_valid => {
                info!(
                    user_id = user.id().map_or(0, u64::from),
                    %user_agent,
                    %client_ip,
                    "User authenticated"
                );
                Ok(user)
            }
            _ => {
                warn!(%user_agent, %client_ip, "Authentication rejected: invalid credentials");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}
