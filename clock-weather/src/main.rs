//! Binary crate for the `clock-weather` proxy.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Serving `GET /api/weather` for the clock pages
//! - Interactive configuration and one-shot lookups

use clap::Parser;

mod cli;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
