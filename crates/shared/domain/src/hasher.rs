//! Credential hashing - Argon2id one-way transform and verification.
//!
//! DRY: Single hashing implementation.

use std::fmt;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::constants::{HASH_ITERATIONS, HASH_MEMORY_KIB, HASH_PARALLELISM};
use crate::error::{DomainError, DomainResult, ErrorKind};
use crate::password::Password;

/// Stored one-way transform of a password (PHC string bytes).
///
/// Not `PartialEq`; compare through [`CredentialHasher::verify`].
#[derive(Clone)]
pub struct HashedPassword(Vec<u8>);

// Don't expose hash in debug output (security)
impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashedPassword").field(&"[REDACTED]").finish()
    }
}

impl HashedPassword {
    /// Wrap an existing hash (e.g. from the database).
    ///
    /// # Errors
    /// Returns `HashedPasswordEmpty` if `value` is empty.
    pub fn new(value: impl Into<Vec<u8>>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(ErrorKind::HashedPasswordEmpty.into());
        }
        Ok(Self(value))
    }

    /// Get the hash bytes for storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume and return the hash bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Argon2 cost parameters (the work factor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HasherParams {
    fn default() -> Self {
        Self {
            memory_kib: HASH_MEMORY_KIB,
            iterations: HASH_ITERATIONS,
            parallelism: HASH_PARALLELISM,
        }
    }
}

/// Hashes and verifies passwords with Argon2id.
///
/// Holds no per-call state; share it behind an `Arc`.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.argon2.params();
        f.debug_struct("CredentialHasher")
            .field("memory_kib", &params.m_cost())
            .field("iterations", &params.t_cost())
            .field("parallelism", &params.p_cost())
            .finish()
    }
}

impl CredentialHasher {
    /// Create a hasher with the given cost parameters.
    ///
    /// # Errors
    /// Returns `HasherMisconfigured` if argon2 rejects the parameters.
    pub fn new(params: HasherParams) -> DomainResult<Self> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| DomainError::new(ErrorKind::HasherMisconfigured).with_source(e))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh random salt.
    ///
    /// Two calls with the same password return different hashes.
    ///
    /// # Errors
    /// Returns `HashingFailed` with the argon2 error as its source.
    pub fn hash(&self, password: &Password) -> DomainResult<HashedPassword> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|e| DomainError::new(ErrorKind::HashingFailed).with_source(e))?;

        Ok(HashedPassword(hash.to_string().into_bytes()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Uses the cost parameters embedded in the stored hash, so hashes made
    /// under older settings keep verifying.
    ///
    /// # Errors
    /// Returns `PasswordMismatch` when the password does not match or the
    /// stored hash cannot be parsed; the underlying error is kept as source.
    pub fn verify(&self, hashed: &HashedPassword, password: &Password) -> DomainResult<()> {
        let encoded = std::str::from_utf8(hashed.as_bytes()).map_err(mismatch)?;
        let parsed = PasswordHash::new(encoded).map_err(mismatch)?;

        self.argon2
            .verify_password(password.expose().as_bytes(), &parsed)
            .map_err(mismatch)
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

fn mismatch(source: impl std::error::Error + Send + Sync + 'static) -> DomainError {
    DomainError::new(ErrorKind::PasswordMismatch).with_source(source)
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::password::PasswordPolicy;

    // Cheap parameters keep the suite fast; production uses the defaults.
    fn hasher() -> CredentialHasher {
        CredentialHasher::new(HasherParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    fn password(raw: &str) -> Password {
        Password::new(raw, &PasswordPolicy::default()).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let hashed = hasher.hash(&password("Secur3!ty")).unwrap();

        assert!(hasher.verify(&hashed, &password("Secur3!ty")).is_ok());

        let err = hasher
            .verify(&hashed, &password("wrongpass1!"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PasswordMismatch);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_same_password_different_salts() {
        let hasher = hasher();
        let plain = password("Abcdef1!");
        let first = hasher.hash(&plain).unwrap();
        let second = hasher.hash(&plain).unwrap();

        // Different salts produce different hashes
        assert_ne!(first.as_bytes(), second.as_bytes());
        // But both verify correctly
        assert!(hasher.verify(&first, &plain).is_ok());
        assert!(hasher.verify(&second, &plain).is_ok());
    }

    #[test]
    fn test_hash_is_phc_argon2id() {
        let hashed = hasher().hash(&password("Abcdef1!")).unwrap();
        let encoded = std::str::from_utf8(hashed.as_bytes()).unwrap();

        assert!(encoded.starts_with("$argon2id$"));
        assert!(!encoded.contains("Abcdef1!"));
    }

    #[test]
    fn test_verify_uses_embedded_params() {
        let hashed = hasher().hash(&password("Abcdef1!")).unwrap();

        // A hasher with different costs still verifies the old hash
        assert!(CredentialHasher::default()
            .verify(&hashed, &password("Abcdef1!"))
            .is_ok());
    }

    #[test]
    fn test_verify_garbage_hash_is_mismatch() {
        let hasher = hasher();
        let garbage = HashedPassword::new("not-a-phc-string").unwrap();
        let err = hasher.verify(&garbage, &password("Abcdef1!")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PasswordMismatch);

        let not_utf8 = HashedPassword::new(vec![0xff, 0xfe, 0xfd]).unwrap();
        let err = hasher.verify(&not_utf8, &password("Abcdef1!")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PasswordMismatch);
    }

    #[test]
    fn test_hashed_password_empty() {
        let err = HashedPassword::new(Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HashedPasswordEmpty);
        assert!(HashedPassword::new("x").is_ok());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let err = CredentialHasher::new(HasherParams {
            memory_kib: 1,
            iterations: 0,
            parallelism: 0,
        })
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::HasherMisconfigured);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_debug_redacts_hash() {
        let hashed = hasher().hash(&password("Abcdef1!")).unwrap();
        assert_eq!(format!("{:?}", hashed), "HashedPassword(\"[REDACTED]\")");
    }
}
