//! User store trait and the raw row it exchanges.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Raw persisted user row.
///
/// Untrusted: turn it into a `domain::User` only through
/// `User::from_source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    /// Encoded password hash
    pub password: String,
    pub role: String,
}

/// User storage operations needed by the authenticator.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user row by exact name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<UserRecord>>;

    /// Insert a new user row; the store assigns the id
    async fn insert(&self, name: String, password_hash: String, role: String)
        -> AppResult<UserRecord>;
}
