//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// User Name
// =============================================================================

/// Maximum user name length, counted in characters (not bytes)
pub const USER_NAME_MAX_LENGTH: usize = 32;

// =============================================================================
// Password Policy
// =============================================================================

/// Minimum password length, counted in characters
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length, counted in characters
pub const PASSWORD_MAX_LENGTH: usize = 16;

/// Printable ASCII without the space (0x21..=0x7E)
pub const PASSWORD_ALLOWED_PATTERN: &str = r"^[\x21-\x7E]+$";

/// Character classes a password must contain at least once
pub const PASSWORD_REQUIRED_PATTERNS: &[&str] = &["[[:alpha:]]", "[[:digit:]]", "[[:punct:]]"];

// =============================================================================
// Credential Hashing (Argon2id)
// =============================================================================

/// Argon2 memory cost in KiB
pub const HASH_MEMORY_KIB: u32 = 19_456;

/// Argon2 iteration count
pub const HASH_ITERATIONS: u32 = 2;

/// Argon2 lane count
pub const HASH_PARALLELISM: u32 = 1;
