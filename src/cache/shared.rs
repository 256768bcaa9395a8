//! Shared Cache Module
//!
//! The thread-safe, self-reaping cache handed to the HTTP fetcher.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::spawn_reaper;

/// Lower bound for the sweep interval so a zero TTL cannot make the reaper spin.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(10);

// == Cache ==
/// A time-bounded read-through cache of response bodies keyed by URL.
///
/// Entries become invisible to [`get`](Cache::get) as soon as they are older
/// than the TTL, and a background task physically removes them once per TTL
/// interval. The task is stopped by [`stop`](Cache::stop) or when the cache
/// is dropped.
///
/// # Example
/// ```ignore
/// let cache = Cache::new(Duration::from_secs(5));
/// cache.add("https://pokeapi.co/api/v2/pokemon/pikachu/", body).await;
/// let hit = cache.get("https://pokeapi.co/api/v2/pokemon/pikachu/").await;
/// ```
#[derive(Debug)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    ttl: Duration,
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// The reaper wakes every `ttl` (at least [`MIN_SWEEP_INTERVAL`]).
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let reaper = spawn_reaper(store.clone(), ttl.max(MIN_SWEEP_INTERVAL));

        debug!(ttl_ms = ttl.as_millis() as u64, "cache created");

        Self { store, ttl, reaper }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its expiry window.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let mut store = self.store.write().await;
        store.insert(key.into(), value.into());
    }

    // == Get ==
    /// Returns the cached value for `key` if it is present and fresh.
    ///
    /// A miss is a normal outcome. Stale entries are never returned and are
    /// left for the reaper to remove.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let store = self.store.read().await;
        store.get(key)
    }

    /// Returns the number of physically stored entries, including stale
    /// entries the reaper has not removed yet.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stop ==
    /// Stops the background reaper. Lookups keep honouring the TTL, but stale
    /// entries are no longer removed from storage.
    pub fn stop(&self) {
        self.reaper.abort();
    }

    /// Returns true once the reaper has finished.
    pub fn is_stopped(&self) -> bool {
        self.reaper.is_finished()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, sleep};

    #[tokio::test]
    async fn test_add_then_get() {
        let cache = Cache::new(Duration::from_secs(5));

        cache.add("key", Bytes::from_static(b"value")).await;

        assert_eq!(cache.get("key").await, Some(Bytes::from_static(b"value")));
    }

    #[tokio::test]
    async fn test_get_on_empty_cache() {
        let cache = Cache::new(Duration::from_secs(5));

        assert!(cache.get("missing").await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_add_accepts_vec_and_empty_values() {
        let cache = Cache::new(Duration::from_secs(5));

        cache.add("vec", vec![1u8, 2, 3]).await;
        cache.add("empty", Vec::new()).await;

        assert_eq!(cache.get("vec").await.as_deref(), Some(&[1u8, 2, 3][..]));
        assert_eq!(cache.get("empty").await, Some(Bytes::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reinsert_resets_expiry() {
        let ttl = Duration::from_secs(2);
        let cache = Cache::new(ttl);

        cache.add("key", Bytes::from_static(b"v1")).await;
        advance(ttl.mul_f64(0.9)).await;
        cache.add("key", Bytes::from_static(b"v2")).await;
        advance(ttl.mul_f64(0.9)).await;

        assert_eq!(cache.get("key").await, Some(Bytes::from_static(b"v2")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_absent() {
        let cache = Cache::new(Duration::from_secs(2));

        cache.add("x", vec![1u8, 2, 3]).await;
        assert_eq!(cache.get("x").await.as_deref(), Some(&[1u8, 2, 3][..]));

        sleep(Duration::from_secs(3)).await;

        assert!(cache.get("x").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_strict_get_before_sweep() {
        let cache = Cache::new(Duration::from_secs(2));
        cache.stop();
        tokio::task::yield_now().await;

        cache.add("x", Bytes::from_static(b"stale")).await;
        advance(Duration::from_secs(3)).await;

        assert!(cache.get("x").await.is_none());
        assert_eq!(cache.len().await, 1, "entry stays until reaped");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_removes_expired_entries() {
        let cache = Cache::new(Duration::from_secs(2));

        cache.add("a", Bytes::from_static(b"1")).await;
        cache.add("b", Bytes::from_static(b"2")).await;
        assert_eq!(cache.len().await, 2);

        // Two sweep intervals: the first sweep may run while entries are
        // still fresh; the second sees them stale.
        sleep(Duration::from_millis(4500)).await;

        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_distinct_inserts() {
        let cache = Arc::new(Cache::new(Duration::from_secs(30)));
        let mut handles = Vec::new();

        for i in 0..64 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                cache.add(format!("key-{i}"), format!("value-{i}").into_bytes()).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.len().await, 64);
        for i in 0..64 {
            let value = cache.get(&format!("key-{i}")).await.unwrap();
            assert_eq!(value, Bytes::from(format!("value-{i}")));
        }
    }

    #[tokio::test]
    async fn test_stop_finishes_reaper() {
        let cache = Cache::new(Duration::from_secs(1));

        cache.stop();
        sleep(Duration::from_millis(100)).await;

        assert!(cache.is_stopped());
    }

    #[tokio::test]
    async fn test_drop_releases_reaper() {
        let cache = Cache::new(Duration::from_secs(1));
        let store = cache.store.clone();
        assert_eq!(Arc::strong_count(&store), 3);

        drop(cache);
        sleep(Duration::from_millis(100)).await;

        assert_eq!(Arc::strong_count(&store), 1, "reaper should have let go of the store");
    }

    #[tokio::test]
    async fn test_zero_ttl_does_not_spin() {
        let cache = Cache::new(Duration::ZERO);

        cache.add("key", Bytes::from_static(b"value")).await;
        sleep(Duration::from_millis(30)).await;

        assert!(cache.get("key").await.is_none());
        assert_eq!(cache.ttl(), Duration::ZERO);
    }
}
