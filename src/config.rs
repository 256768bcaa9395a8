//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables.
//! Command-line flags (see [`crate::cli`]) are applied on top.

use std::env;
use std::time::Duration;

/// Default PokeAPI base URL.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long a cached response stays valid, in seconds
    pub cache_ttl: u64,
    /// Base URL of the PokeAPI, without a trailing slash
    pub api_url: String,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 5)
    /// - `POKEDEX_API_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_HTTP_TIMEOUT` - HTTP timeout in seconds (default: 10, zero is ignored)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            api_url: env::var("POKEDEX_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| normalize_api_url(&v))
                .unwrap_or(defaults.api_url),
            http_timeout: env::var("POKEDEX_HTTP_TIMEOUT")
                .ok()
                .and_then(|v| parse_timeout(&v))
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Returns the cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Returns the HTTP timeout as a [`Duration`].
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 5,
            api_url: DEFAULT_API_URL.to_string(),
            http_timeout: 10,
        }
    }
}

/// Parses a timeout in whole seconds. Zero would fail every request, so it
/// is rejected like any other unparsable value.
fn parse_timeout(value: &str) -> Option<u64> {
    value.trim().parse().ok().filter(|&secs| secs > 0)
}

/// Strips trailing slashes so URL builders can join with `/`.
pub fn normalize_api_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, 5);
        assert_eq!(config.api_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.http_timeout, 10);
        assert_eq!(config.cache_ttl(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("POKEDEX_CACHE_TTL");
        env::remove_var("POKEDEX_API_URL");
        env::remove_var("POKEDEX_HTTP_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_timeout_rejects_zero() {
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("soon"), None);
        assert_eq!(parse_timeout(" 3 "), Some(3));
    }

    #[test]
    fn test_normalize_api_url() {
        assert_eq!(normalize_api_url("http://localhost:8080/"), "http://localhost:8080");
        assert_eq!(normalize_api_url(" http://a/b// "), "http://a/b");
        assert_eq!(normalize_api_url("http://a/b"), "http://a/b");
    }
}
