//! # Gympass
//!
//! Command line entry point for the gym check-in service

use clap::Parser;
use gympass_domain::{CliOverrides, DomainError, ErrorCategory};
use serde_json::json;
use std::process::ExitCode;

mod bootstrap;
mod commands;
mod di;

use commands::Command;

#[derive(Parser)]
#[command(name = "gympass")]
#[command(version)]
#[command(about = "Gym check-ins with geofence and daily limits")]
struct Cli {
    /// Path to a TOML config file (default: ./gympass.toml if present)
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// SQLite database path, overrides [database] path
    #[arg(short = 'd', long, global = true)]
    database: Option<String>,

    /// Log level, overrides [logging] level
    #[arg(short = 'l', long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            database_path: cli.database,
            log_level: cli.log_level,
        },
    )?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    let pool = bootstrap::init_database(&config.database).await?;
    let repos = di::Repositories::new(pool.clone());
    let use_cases = di::UseCases::new(&repos, &config)?;

    let result = commands::run(cli.command, &use_cases).await;
    pool.close().await;

    match result {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match err.downcast_ref::<DomainError>() {
            Some(domain_err) => {
                let output = json!({
                    "error": format!("{:?}", domain_err.category()),
                    "message": domain_err.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
                Ok(exit_code(domain_err.category()))
            }
            None => Err(err),
        },
    }
}

fn exit_code(category: ErrorCategory) -> ExitCode {
    match category {
        ErrorCategory::InvalidInput => ExitCode::from(2),
        ErrorCategory::NotFound => ExitCode::from(3),
        ErrorCategory::Forbidden => ExitCode::from(4),
        ErrorCategory::Conflict => ExitCode::from(5),
        ErrorCategory::Internal => ExitCode::FAILURE,
    }
}
