//! Persistence port for user records.

pub mod user_store;

pub use user_store::{UserRecord, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_store::MockUserStore;
