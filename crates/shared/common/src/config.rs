//! Shared configuration structures.

use domain::{
    HasherParams, PasswordPolicy, HASH_ITERATIONS, HASH_MEMORY_KIB, HASH_PARALLELISM,
    PASSWORD_ALLOWED_PATTERN, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
    PASSWORD_REQUIRED_PATTERNS,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Argon2 work factor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HasherConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes over memory
    pub iterations: u32,
    /// Number of lanes
    pub parallelism: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            memory_kib: HASH_MEMORY_KIB,
            iterations: HASH_ITERATIONS,
            parallelism: HASH_PARALLELISM,
        }
    }
}

impl HasherConfig {
    pub fn params(&self) -> HasherParams {
        HasherParams {
            memory_kib: self.memory_kib,
            iterations: self.iterations,
            parallelism: self.parallelism,
        }
    }
}

/// Password policy configuration.
///
/// Patterns are regular expressions: `allowed_pattern` must match the whole
/// password, each of `required_patterns` must match somewhere in it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PasswordPolicyConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub allowed_pattern: String,
    pub required_patterns: Vec<String>,
}

impl Default for PasswordPolicyConfig {
    fn default() -> Self {
        Self {
            min_length: PASSWORD_MIN_LENGTH,
            max_length: PASSWORD_MAX_LENGTH,
            allowed_pattern: PASSWORD_ALLOWED_PATTERN.to_string(),
            required_patterns: PASSWORD_REQUIRED_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl PasswordPolicyConfig {
    /// Compile the configured policy.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the bounds are inverted or a pattern
    /// does not compile.
    pub fn build(&self) -> AppResult<PasswordPolicy> {
        PasswordPolicy::new(
            self.min_length,
            self.max_length,
            &self.allowed_pattern,
            &self.required_patterns,
        )
        .map_err(|e| {
            let detail = std::error::Error::source(&e)
                .map_or_else(|| e.to_string(), |cause| cause.to_string());
            AppError::config(format!(
                "password policy (min_length {}, max_length {}): {}",
                self.min_length, self.max_length, detail
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Password;

    #[test]
    fn test_default_policy_config_matches_builtin() {
        let policy = PasswordPolicyConfig::default().build().unwrap();

        assert_eq!(policy.min_length(), PASSWORD_MIN_LENGTH);
        assert_eq!(policy.max_length(), PASSWORD_MAX_LENGTH);
        assert!(Password::new("Abcdef1!", &policy).is_ok());
        assert!(Password::new("abcdefgh", &policy).is_err());
    }

    #[test]
    fn test_policy_config_from_json_with_defaults() {
        let config: PasswordPolicyConfig =
            serde_json::from_str(r#"{"min_length": 12, "max_length": 64}"#).unwrap();
        let policy = config.build().unwrap();

        assert_eq!(policy.min_length(), 12);
        assert!(Password::new("Abcdef1!", &policy).is_err());
        assert!(Password::new("Abcdefghij1!", &policy).is_ok());
    }

    #[test]
    fn test_policy_config_rejects_bad_pattern() {
        let config = PasswordPolicyConfig {
            allowed_pattern: "([".to_string(),
            ..PasswordPolicyConfig::default()
        };
        assert!(matches!(config.build(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_policy_config_rejects_inverted_bounds() {
        let config = PasswordPolicyConfig {
            min_length: 20,
            max_length: 10,
            ..PasswordPolicyConfig::default()
        };
        assert!(matches!(config.build(), Err(AppError::Config(ref msg)) if msg.contains("min_length 20")));
    }

    #[test]
    fn test_hasher_config_partial_json() {
        let config: HasherConfig = serde_json::from_str(r#"{"memory_kib": 4096}"#).unwrap();

        assert_eq!(config.memory_kib, 4096);
        assert_eq!(config.iterations, HASH_ITERATIONS);
        assert_eq!(config.parallelism, HASH_PARALLELISM);
    }

    #[test]
    fn test_hasher_config_params() {
        let params = HasherConfig::default().params();
        assert_eq!(params, HasherParams::default());
    }
}
