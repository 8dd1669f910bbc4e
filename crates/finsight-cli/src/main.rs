//! Finsight CLI - Personal finance analytics backend
//!
//! Usage:
//!   finsight serve --port 3000               Start the REST API server
//!   finsight analyze --transactions tx.json  Run the analytics engine locally

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            no_auth,
            origins,
            api_keys,
        } => commands::cmd_serve(&host, port, no_auth, origins, api_keys).await,
        Commands::Analyze {
            transactions,
            accounts,
            fit_confidence,
            json,
        } => commands::cmd_analyze(&transactions, accounts.as_deref(), fit_confidence, json),
    }
}
