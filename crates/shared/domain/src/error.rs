//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, gRPC, database).
//!
//! Every error carries an [`ErrorKind`] that survives wrapping, so callers can
//! ask "is this the empty-name error" after context has been attached.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::constants::USER_NAME_MAX_LENGTH;

/// The rule a domain operation violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("user id: must not be zero")]
    UserIdZero,

    #[error("user name: must not be empty")]
    UserNameEmpty,

    #[error("user name: must not be longer than {} characters", USER_NAME_MAX_LENGTH)]
    UserNameTooLong,

    #[error("user role: invalid type")]
    UserRoleInvalid,

    #[error("password: must not be empty")]
    PasswordEmpty,

    #[error("password: must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("password: must be at most {max} characters")]
    PasswordTooLong { max: usize },

    #[error("password: does not follow the rules")]
    PasswordPolicyViolation,

    #[error("password policy: invalid configuration")]
    PasswordPolicyInvalid,

    #[error("hashed password: must not be empty")]
    HashedPasswordEmpty,

    #[error("hashed password: not match")]
    PasswordMismatch,

    #[error("hashed password: hashing failed")]
    HashingFailed,

    #[error("hasher: invalid parameters")]
    HasherMisconfigured,

    #[error("user role: access denied")]
    Forbidden,
}

impl ErrorKind {
    /// Whether the error describes rejected caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorKind::UserIdZero
                | ErrorKind::UserNameEmpty
                | ErrorKind::UserNameTooLong
                | ErrorKind::UserRoleInvalid
                | ErrorKind::PasswordEmpty
                | ErrorKind::PasswordTooShort { .. }
                | ErrorKind::PasswordTooLong { .. }
                | ErrorKind::PasswordPolicyViolation
                | ErrorKind::HashedPasswordEmpty
        )
    }
}

type Source = Arc<dyn StdError + Send + Sync + 'static>;

/// Domain error: a kind, an optional context label and an optional cause.
#[derive(Clone)]
pub struct DomainError {
    kind: ErrorKind,
    context: Option<&'static str>,
    source: Option<Source>,
}

impl DomainError {
    /// Create an error of the given kind without context or cause
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
            source: None,
        }
    }

    /// Attach a context label naming the operation that failed
    pub fn with_context(mut self, context: &'static str) -> Self {
        self.context = Some(context);
        self
    }

    /// Attach the underlying cause
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check the kind, regardless of attached context
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    pub fn context(&self) -> Option<&'static str> {
        self.context
    }
}

impl From<ErrorKind> for DomainError {
    fn from(kind: ErrorKind) -> Self {
        DomainError::new(kind)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.context {
            Some(context) => write!(f, "{}: {}", context, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl fmt::Debug for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainError")
            .field("kind", &self.kind)
            .field("context", &self.context)
            .field("source", &self.source.as_ref().map(|s| s.to_string()))
            .finish()
    }
}

impl StdError for DomainError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

impl PartialEq<ErrorKind> for DomainError {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind == *other
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
