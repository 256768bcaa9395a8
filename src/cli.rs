//! Command-line interface parsing for the Pokedex
//!
//! Flags override the environment-derived [`Config`].

use clap::Parser;

use crate::config::{normalize_api_url, Config};

/// Pokedex - explore the Pokemon world from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "An interactive Pokedex backed by the PokeAPI")]
#[command(version)]
pub struct Cli {
    /// How long fetched responses are reused, in seconds
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// Base URL of the PokeAPI
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// HTTP request timeout, in seconds (at least 1)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Applies any flags that were given on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(ttl) = self.cache_ttl {
            config.cache_ttl = ttl;
        }
        if let Some(url) = &self.api_url {
            config.api_url = normalize_api_url(url);
        }
        if let Some(timeout) = self.timeout {
            config.http_timeout = timeout;
        }
        config
    }
}
