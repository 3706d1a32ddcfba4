//! School registry - application entry point
//!
//! CLI forms over the student and instructor records, plus `serve` for the
//! HTTP API.

mod cli;
mod commands;
mod table;

use std::io::Write;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppError, AppResult};
use registry_service_lib::config::RegistryConfig;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Load .env before clap reads env fallbacks
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let config = RegistryConfig::from_env();
    tracing::debug!("Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Student(args) => commands::student::execute(args, config).await,
        Commands::Instructor(args) => commands::instructor::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
        Commands::Serve(args) => commands::serve::execute(args, config).await,
    };

    // Handle errors
    if let Err(e) = &result {
        tracing::debug!("Command failed: {:?}", e);
        let _ = report(e, &mut std::io::stderr());
    }
    std::process::exit(exit_code(&result));
}

/// Process exit status for a command outcome.
fn exit_code(result: &AppResult<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Write the one-line failure message shown to the user.
fn report(err: &AppError, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "error: {}", err.user_message())
}

/// Initialize tracing subscriber; logs go to stderr so tables stay clean on stdout
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
