//! User domain entity and related value objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_USER, USER_NAME_MAX_LENGTH};
use crate::error::{DomainError, DomainResult, ErrorKind};
use crate::hasher::HashedPassword;

/// Context attached to errors raised while rehydrating a stored user
const FROM_SOURCE_CONTEXT: &str = "user from source";

/// Non-zero numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct UserId(u64);

impl UserId {
    /// # Errors
    /// Returns `UserIdZero` if `value` is 0.
    pub fn new(value: u64) -> DomainResult<Self> {
        if value == 0 {
            return Err(ErrorKind::UserIdZero.into());
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for UserId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable user handle, kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// # Errors
    /// Returns `UserNameEmpty` for an empty string and `UserNameTooLong`
    /// when it has more than [`USER_NAME_MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(ErrorKind::UserNameEmpty.into());
        }
        if value.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(ErrorKind::UserNameTooLong.into());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Exact, case-sensitive match against `user` / `admin`.
    ///
    /// # Errors
    /// Returns `UserRoleInvalid` for any other value.
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            ROLE_USER => Ok(UserRole::User),
            ROLE_ADMIN => Ok(UserRole::Admin),
            _ => Err(ErrorKind::UserRoleInvalid.into()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => ROLE_USER,
            UserRole::Admin => ROLE_ADMIN,
        }
    }

    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role can access a required role
    pub fn can_access(&self, required: &UserRole) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::User => matches!(required, UserRole::User),
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UserRole {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for UserRole {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User aggregate.
///
/// Immutable once built: there are no setters, and [`User::with_id`]
/// returns a new value. A fresh user has no id until persistence assigns one.
#[derive(Debug, Clone)]
pub struct User {
    id: Option<UserId>,
    name: UserName,
    hashed_password: HashedPassword,
    role: UserRole,
}

impl User {
    /// Assemble a fresh user from already validated parts.
    pub fn new(name: UserName, hashed_password: HashedPassword, role: UserRole) -> Self {
        Self {
            id: None,
            name,
            hashed_password,
            role,
        }
    }

    /// Rebuild a user from persisted or otherwise untrusted fields.
    ///
    /// Validators run in the order id, name, hashed password, role; the
    /// first failure is returned with context and nothing is built.
    pub fn from_source(
        id: u64,
        name: &str,
        hashed_password: &str,
        role: &str,
    ) -> DomainResult<Self> {
        let id = UserId::new(id).map_err(from_source_error)?;
        let name = UserName::new(name).map_err(from_source_error)?;
        let hashed_password = HashedPassword::new(hashed_password).map_err(from_source_error)?;
        let role = UserRole::parse(role).map_err(from_source_error)?;

        Ok(Self {
            id: Some(id),
            name,
            hashed_password,
            role,
        })
    }

    /// Return a copy of this user carrying the persisted id.
    pub fn with_id(self, id: UserId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn hashed_password(&self) -> &HashedPassword {
        &self.hashed_password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// # Errors
    /// Returns `Forbidden` if this user's role cannot access `required`.
    pub fn authorize(&self, required: &UserRole) -> DomainResult<()> {
        if self.role.can_access(required) {
            Ok(())
        } else {
            Err(ErrorKind::Forbidden.into())
        }
    }
}

fn from_source_error(err: DomainError) -> DomainError {
    DomainError::new(err.kind())
        .with_context(FROM_SOURCE_CONTEXT)
        .with_source(err)
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Persisted identifier, absent for users not yet stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// User display name
    pub name: String,
    /// User role
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.map(u64::from),
            name: user.name.to_string(),
            role: user.role.to_string(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse::from(&user)
    }
}
