//! Auth service configuration.

use std::env;
use std::str::FromStr;

use common::{HasherConfig, PasswordPolicyConfig, ServiceConfig};

/// Auth service configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Service name and log level
    pub service: ServiceConfig,
    /// Argon2 work factor
    pub hasher: HasherConfig,
    /// Password strength rules
    pub password_policy: PasswordPolicyConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables (and `.env`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`; absent or unparsable values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: "auth-service".to_string(),
                log_level: lookup("AUTH_SERVICE_LOG_LEVEL")
                    .unwrap_or(defaults.service.log_level),
            },
            hasher: HasherConfig {
                memory_kib: parse_var(&lookup, "AUTH_HASH_MEMORY_KIB")
                    .unwrap_or(defaults.hasher.memory_kib),
                iterations: parse_var(&lookup, "AUTH_HASH_ITERATIONS")
                    .unwrap_or(defaults.hasher.iterations),
                parallelism: parse_var(&lookup, "AUTH_HASH_PARALLELISM")
                    .unwrap_or(defaults.hasher.parallelism),
            },
            password_policy: PasswordPolicyConfig {
                min_length: parse_var(&lookup, "AUTH_PASSWORD_MIN_LENGTH")
                    .unwrap_or(defaults.password_policy.min_length),
                max_length: parse_var(&lookup, "AUTH_PASSWORD_MAX_LENGTH")
                    .unwrap_or(defaults.password_policy.max_length),
                ..defaults.password_policy
            },
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.parse().ok())
}
