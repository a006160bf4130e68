//! Auth Service - credential tooling entry point.

use std::process::ExitCode;

use clap::Parser;

use auth_service_lib::{
    cli::{Cli, Commands},
    commands,
    config::AuthServiceConfig,
};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration (reads .env first)
    let config = AuthServiceConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    common::logging::init(cli.verbose, &config.service.log_level);
    tracing::debug!(?config, "Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::HashPassword(args) => commands::password::hash(args, &config),
        Commands::VerifyPassword(args) => commands::password::verify(args),
        Commands::CheckPassword(args) => commands::password::check(args, &config),
    };

    match result {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) if commands::password::is_rejection(&e) => {
            eprintln!("{}", e.user_message());
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("{}", e.user_message());
            ExitCode::from(2)
        }
    }
}
