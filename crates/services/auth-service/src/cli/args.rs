//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Auth service - credential hashing and policy tooling
#[derive(Parser, Debug)]
#[command(name = "auth-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash a password and print the encoded hash
    HashPassword(PasswordArgs),

    /// Verify a password against an encoded hash
    VerifyPassword(VerifyArgs),

    /// Check a password against the password policy
    CheckPassword(PasswordArgs),
}

/// Arguments carrying a plaintext password
#[derive(Parser, Debug)]
pub struct PasswordArgs {
    /// Plaintext password (prefer the environment variable over argv)
    #[arg(env = "AUTH_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Arguments for the verify-password command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Encoded hash as stored
    #[arg(long)]
    pub hash: String,

    #[command(flatten)]
    pub password: PasswordArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from([
            "auth-service",
            "-v",
            "verify-password",
            "--hash",
            "$argon2id$x",
            "Abcdef1!",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::VerifyPassword(args) => {
                assert_eq!(args.hash, "$argon2id$x");
                assert_eq!(args.password.password, "Abcdef1!");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["auth-service", "check-password", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckPassword(_)));
    }
}
