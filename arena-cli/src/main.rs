//! Arena CLI
//!
//! Terminal client for the Arena tournament backend: manual wallet top-ups,
//! withdrawals and team management.

mod commands;
mod config;
mod proof;
mod state;

use clap::Parser;
use commands::Command;
use config::{ConfigLoader, Overrides};
use state::AppState;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Arena - tournament wallet and team client
#[derive(Parser, Debug)]
#[command(name = "arena-cli")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./arena-config.toml")]
    config: PathBuf,

    /// Override the API base URL (e.g., https://api.example.com/api/)
    #[arg(long)]
    base_url: Option<Url>,

    /// Session token
    #[arg(long, env = "ARENA_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::debug!("Starting arena-cli v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let loader = ConfigLoader::new(
        &args.config,
        Overrides {
            base_url: args.base_url,
            token: args.token,
        },
    );
    let config = loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::debug!(base_url = %config.base_url, "Configuration loaded");

    if config.token.is_none() {
        tracing::warn!("No session token configured; authenticated endpoints will fail");
    }

    let state = AppState::new(&config)?;
    commands::run(state, args.command).await
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
