//! brickset - CLI tool for browsing BrickSet catalog and collection data.
//!
//! This is a thin wrapper over the `brickset` library crates, intended
//! for manual catalog exploration and collection queries.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{ApiOptions, account, sets, themes};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let options = ApiOptions {
        api_key: cli.api_key,
        api_url: cli.api_url,
    };

    match cli.command {
        Commands::Sets(cmd) => sets::handle(cmd, &options).await,
        Commands::Themes(cmd) => themes::handle(cmd, &options).await,
        Commands::Account(cmd) => account::handle(cmd, &options).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
