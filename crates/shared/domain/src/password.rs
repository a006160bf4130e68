//! Password value object - plaintext credential validation.
//!
//! The character rules live in a [`PasswordPolicy`] handed to the
//! constructor, so a deployment can swap them without touching globals.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{
    PASSWORD_ALLOWED_PATTERN, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
    PASSWORD_REQUIRED_PATTERNS,
};
use crate::error::{DomainError, DomainResult, ErrorKind};

static DEFAULT_POLICY: Lazy<PasswordPolicy> = Lazy::new(|| {
    PasswordPolicy::new(
        PASSWORD_MIN_LENGTH,
        PASSWORD_MAX_LENGTH,
        PASSWORD_ALLOWED_PATTERN,
        PASSWORD_REQUIRED_PATTERNS,
    )
    .unwrap_or_else(|error| panic!("built-in password policy is invalid: {error}"))
});

/// Password strength policy.
///
/// Checks run in a fixed order and the first violation wins:
/// empty, too short, too long, allowed characters, required classes.
/// Lengths count characters, not bytes.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
    allowed: Regex,
    required: Vec<Regex>,
}

impl PasswordPolicy {
    /// Build a policy from length bounds and regex patterns.
    ///
    /// `allowed` is anchored here and must match the whole password; each
    /// `required` pattern must match somewhere in it.
    ///
    /// # Errors
    /// Returns `PasswordPolicyInvalid` if `min_length` exceeds `max_length`
    /// or a pattern fails to compile (the regex error is the source).
    pub fn new<I, S>(
        min_length: usize,
        max_length: usize,
        allowed: &str,
        required: I,
    ) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if min_length > max_length {
            return Err(ErrorKind::PasswordPolicyInvalid.into());
        }

        let allowed = compile(&format!("^(?:{})$", allowed))?;
        let required = required
            .into_iter()
            .map(|pattern| compile(pattern.as_ref()))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            min_length,
            max_length,
            allowed,
            required,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Validate a candidate password against this policy.
    pub fn check(&self, candidate: &str) -> DomainResult<()> {
        if candidate.is_empty() {
            return Err(ErrorKind::PasswordEmpty.into());
        }

        let length = candidate.chars().count();
        if length < self.min_length {
            return Err(ErrorKind::PasswordTooShort {
                min: self.min_length,
            }
            .into());
        }
        if length > self.max_length {
            return Err(ErrorKind::PasswordTooLong {
                max: self.max_length,
            }
            .into());
        }

        if !self.allowed.is_match(candidate) {
            return Err(ErrorKind::PasswordPolicyViolation.into());
        }
        if !self.required.iter().all(|class| class.is_match(candidate)) {
            return Err(ErrorKind::PasswordPolicyViolation.into());
        }

        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        DEFAULT_POLICY.clone()
    }
}

fn compile(pattern: &str) -> DomainResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| DomainError::new(ErrorKind::PasswordPolicyInvalid).with_source(e))
}

/// Plaintext password that passed policy validation.
///
/// Transient: the buffer is wiped on drop and never shown in debug output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

// Don't expose plaintext in debug output (security)
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl Password {
    /// Validate a plaintext password against `policy`.
    ///
    /// # Errors
    /// `PasswordEmpty`, `PasswordTooShort`, `PasswordTooLong` or
    /// `PasswordPolicyViolation`, whichever rule fails first.
    pub fn new(plain_text: impl Into<String>, policy: &PasswordPolicy) -> DomainResult<Self> {
        let password = Self(plain_text.into());
        policy.check(&password.0)?;
        Ok(password)
    }

    /// Accept a login-time plaintext for verification only.
    ///
    /// Only empty input is rejected: a password stored under an older
    /// policy must still verify after the policy changes.
    ///
    /// # Errors
    /// `PasswordEmpty` if `plain_text` is empty.
    pub fn for_verification(plain_text: impl Into<String>) -> DomainResult<Self> {
        let password = Self(plain_text.into());
        if password.0.is_empty() {
            return Err(ErrorKind::PasswordEmpty.into());
        }
        Ok(password)
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(raw: &str) -> Option<ErrorKind> {
        Password::new(raw, &PasswordPolicy::default())
            .err()
            .map(|e| e.kind())
    }

    #[test]
    fn test_password_empty() {
        assert_eq!(kind_of(""), Some(ErrorKind::PasswordEmpty));
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(kind_of("abc123!"), Some(ErrorKind::PasswordTooShort { min: 8 }));
    }

    #[test]
    fn test_password_too_long() {
        assert_eq!(kind_of("Abcdefghijklmno1!"), Some(ErrorKind::PasswordTooLong { max: 16 }));
    }

    #[test]
    fn test_password_missing_classes() {
        assert_eq!(kind_of("abcdefgh"), Some(ErrorKind::PasswordPolicyViolation));
        assert_eq!(kind_of("abcdefg1"), Some(ErrorKind::PasswordPolicyViolation));
        assert_eq!(kind_of("abcdefg!"), Some(ErrorKind::PasswordPolicyViolation));
        assert_eq!(kind_of("1234567!"), Some(ErrorKind::PasswordPolicyViolation));
    }

    #[test]
    fn test_password_disallowed_characters() {
        assert_eq!(kind_of("Abc def1!"), Some(ErrorKind::PasswordPolicyViolation));
        assert_eq!(kind_of("Abcdéf1!"), Some(ErrorKind::PasswordPolicyViolation));
        assert_eq!(kind_of("Abcdef1!\t"), Some(ErrorKind::PasswordPolicyViolation));
    }

    #[test]
    fn test_password_valid() {
        assert_eq!(kind_of("Abcdef1!"), None);
        assert_eq!(kind_of("Secur3!ty"), None);
        assert_eq!(kind_of("Abcdefghijklmn1!"), None);
    }

    #[test]
    fn test_length_counts_characters() {
        // 7 characters but more than 8 bytes: still too short
        assert_eq!(kind_of("ééé1!ab"), Some(ErrorKind::PasswordTooShort { min: 8 }));
    }

    #[test]
    fn test_length_checked_before_composition() {
        // Too long and missing digits: length wins
        assert_eq!(kind_of("abcdefghijklmnopq"), Some(ErrorKind::PasswordTooLong { max: 16 }));
        // Short with a space: length wins
        assert_eq!(kind_of("a b"), Some(ErrorKind::PasswordTooShort { min: 8 }));
    }

    #[test]
    fn test_custom_policy() {
        let policy = PasswordPolicy::new(4, 6, "^[a-z0-9]+$", ["[0-9]"]).unwrap();

        assert!(Password::new("abc1", &policy).is_ok());
        assert_eq!(
            Password::new("abcd", &policy).unwrap_err().kind(),
            ErrorKind::PasswordPolicyViolation
        );
        assert_eq!(
            Password::new("abc1234", &policy).unwrap_err().kind(),
            ErrorKind::PasswordTooLong { max: 6 }
        );
        assert_eq!(policy.min_length(), 4);
        assert_eq!(policy.max_length(), 6);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = PasswordPolicy::new(8, 16, "^[a-", Vec::<String>::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PasswordPolicyInvalid);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = PasswordPolicy::new(20, 10, "[a-z]+", ["[a-z]"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PasswordPolicyInvalid);
    }

    #[test]
    fn test_allowed_pattern_is_anchored() {
        // Unanchored class still has to cover every character
        let policy = PasswordPolicy::new(4, 16, "[a-z0-9]+", ["[0-9]"]).unwrap();

        assert!(Password::new("abc1", &policy).is_ok());
        assert_eq!(
            Password::new("abc1 !", &policy).unwrap_err().kind(),
            ErrorKind::PasswordPolicyViolation
        );
    }

    #[test]
    fn test_custom_bounds_in_errors() {
        let policy = PasswordPolicy::new(
            12,
            64,
            PASSWORD_ALLOWED_PATTERN,
            PASSWORD_REQUIRED_PATTERNS,
        )
        .unwrap();

        let err = Password::new("Secur3!ty", &policy).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PasswordTooShort { min: 12 });
        assert_eq!(err.to_string(), "password: must be at least 12 characters");
    }

    #[test]
    fn test_for_verification_skips_policy() {
        assert!(Password::for_verification("short").is_ok());
        assert!(Password::for_verification("über lang und ohne ziffern").is_ok());
        assert_eq!(
            Password::for_verification("").unwrap_err().kind(),
            ErrorKind::PasswordEmpty
        );
    }

    #[test]
    fn test_debug_redacts_plaintext() {
        let password = Password::new("Abcdef1!", &PasswordPolicy::default()).unwrap();
        let debug = format!("{:?}", password);

        assert!(!debug.contains("Abcdef1!"));
        assert!(debug.contains("REDACTED"));
    }
}
