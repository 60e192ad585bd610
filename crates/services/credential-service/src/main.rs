//! Credential Service - HTTP server for registration and login.

use clap::{Parser, Subcommand};

use credential_service_lib::config::CredentialServiceConfig;
use credential_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "credential-service")]
#[command(about = "User registration and login service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides CREDENTIAL_SERVICE_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides CREDENTIAL_SERVICE_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = CredentialServiceConfig::from_env();
    common::logging::init_tracing(&config.service.log_level);
    config.log_fallbacks();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            credential_service_lib::run(config.with_bind_overrides(host, port)).await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            credential_service_lib::run_migrations(&config, migrate_action).await?;
        }
    }

    Ok(())
}
