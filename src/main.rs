//! Pokedex - an interactive explorer for the PokeAPI
//!
//! Reads commands from stdin and prints results to stdout. Logs go to stderr
//! and are controlled with `RUST_LOG`.

use std::io;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::{repl, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Parse command-line flags
/// 2. Initialize tracing subscriber for logging
/// 3. Load configuration from environment variables and apply flags
/// 4. Create the cache-backed API client (starts the cache reaper)
/// 5. Run the REPL until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Defaults to "warn" so logs stay out of the way of the REPL,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = cli.apply(Config::from_env());
    info!(
        "Configuration loaded: cache_ttl={}s, api_url={}, http_timeout={}s",
        config.cache_ttl, config.api_url, config.http_timeout
    );

    let client = PokeApiClient::from_config(&config).context("failed to build HTTP client")?;
    let cache = client.cache().clone();
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    repl::run(&mut session, stdin, &mut stdout)
        .await
        .context("terminal i/o failed")?;

    cache.stop();
    info!("Pokedex closed");
    Ok(())
}
