//! Spendwise CLI
//!
//! Main entry point for the Spendwise expense tracker.

mod commands;
mod file_store;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendwise_shared::AppConfig;

use commands::Cli;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendwise=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    if let Err(err) = commands::run(cli, &config) {
        error!(code = err.error_code(), "{err}");
        std::process::exit(err.exit_code());
    }

    Ok(())
}
