//! PokeAPI client
//!
//! Read-through fetching: every GET first consults the shared [`Cache`];
//! only misses reach the network, and only successful bodies are cached.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, PokemonDetail};

/// Number of location areas shown per `map` page
pub const PAGE_SIZE: u32 = 20;

/// A response body together with where it came from.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub value: T,
    /// True when the body was served from the cache
    pub from_cache: bool,
}

/// HTTP client for the PokeAPI backed by a TTL cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: Arc<Cache>,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client around an existing HTTP client and cache.
    ///
    /// `base_url` must not end with a slash.
    pub fn new(http: Client, cache: Arc<Cache>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            cache,
            base_url: base_url.into(),
        }
    }

    /// Builds the HTTP client and cache described by `config`.
    ///
    /// Must be called inside a tokio runtime, since the cache starts its reaper.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.http_timeout())
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let cache = Arc::new(Cache::new(config.cache_ttl()));
        Ok(Self::new(http, cache, config.api_url.clone()))
    }

    /// Returns the shared cache.
    pub fn cache(&self) -> &Arc<Cache> {
        &self.cache
    }

    // == URL Builders ==

    /// URL of the first page of location areas.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/?offset=0&limit={}", self.base_url, PAGE_SIZE)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}/", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}/", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the body at `url`, from the cache when possible.
    ///
    /// Non-success statuses and transport failures are errors and leave the
    /// cache untouched.
    pub async fn fetch(&self, url: &str) -> Result<Fetched<Bytes>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(Fetched {
                value: body,
                from_cache: true,
            });
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "request failed");
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone()).await;

        Ok(Fetched {
            value: body,
            from_cache: false,
        })
    }

    /// Fetches `url` and decodes the body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>> {
        let Fetched { value, from_cache } = self.fetch(url).await?;
        let value = serde_json::from_slice(&value)?;
        Ok(Fetched { value, from_cache })
    }

    // == Typed Endpoints ==

    pub async fn location_area_page(&self, url: &str) -> Result<Fetched<LocationAreaPage>> {
        self.fetch_json(url).await
    }

    pub async fn location_area(&self, name: &str) -> Result<Fetched<LocationAreaDetail>> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Fetched<PokemonDetail>> {
        self.fetch_json(&self.pokemon_url(name)).await
    }
}
