//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "finsight",
    about = "Personal finance analytics backend",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (local development only)
        #[arg(long)]
        no_auth: bool,

        /// Allowed CORS origin (repeatable)
        #[arg(long = "origin")]
        origins: Vec<String>,

        /// API key accepted as a Bearer token (repeatable)
        #[arg(long = "api-key")]
        api_keys: Vec<String>,
    },

    /// Run the analytics engine over local JSON record files
    Analyze {
        /// Path to a JSON array of transaction records
        #[arg(short, long)]
        transactions: PathBuf,

        /// Path to a JSON array of account records
        #[arg(short, long)]
        accounts: Option<PathBuf>,

        /// Derive confidence from regression fit quality instead of
        /// sample count
        #[arg(long)]
        fit_confidence: bool,

        /// Print the raw JSON report instead of the summary
        #[arg(long)]
        json: bool,
    },
}
