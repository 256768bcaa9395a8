//! Cache Store Module
//!
//! The unsynchronized entry map behind the shared cache. All locking lives in
//! [`Cache`](crate::cache::Cache); this type only knows about entries and age.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Response bodies keyed by request URL, each expiring `ttl` after insertion.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// How long an entry stays visible after insertion
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Insert ==
    /// Stores `value` under `key`.
    ///
    /// Re-inserting an existing key replaces the value and restarts its
    /// expiry window.
    pub fn insert(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the value for `key` if it is present and still fresh.
    ///
    /// Stale entries are reported as absent but left in place for the reaper.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let entry = self.entries.get(key)?;
        if entry.is_expired(self.ttl) {
            return None;
        }
        Some(entry.value.clone())
    }

    // == Reap Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self) -> usize {
        let now = Instant::now();
        let ttl = self.ttl;
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired_at(now, ttl));

        before - self.entries.len()
    }

    // == Length ==
    /// Returns the number of physically stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    const TTL: Duration = Duration::from_secs(2);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TTL);
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = CacheStore::new(TTL);

        store.insert("key1".to_string(), Bytes::from_static(b"value1"));

        assert_eq!(store.get("key1"), Some(Bytes::from_static(b"value1")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new(TTL);
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(TTL);

        store.insert("key1".to_string(), Bytes::from_static(b"value1"));
        store.insert("key1".to_string(), Bytes::from_static(b"value2"));

        assert_eq!(store.get("key1"), Some(Bytes::from_static(b"value2")));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_get_hides_stale_entry_without_removing_it() {
        let mut store = CacheStore::new(TTL);
        store.insert("key1".to_string(), Bytes::from_static(b"value1"));

        advance(Duration::from_secs(3)).await;

        assert!(store.get("key1").is_none());
        assert_eq!(store.len(), 1, "get must not remove stale entries");
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_overwrite_restarts_ttl() {
        let mut store = CacheStore::new(TTL);
        let step = TTL.mul_f64(0.9);

        store.insert("key1".to_string(), Bytes::from_static(b"v1"));
        advance(step).await;
        store.insert("key1".to_string(), Bytes::from_static(b"v2"));
        advance(step).await;

        assert_eq!(store.get("key1"), Some(Bytes::from_static(b"v2")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_reap_expired() {
        let mut store = CacheStore::new(TTL);

        store.insert("old".to_string(), Bytes::from_static(b"a"));
        advance(Duration::from_secs(1)).await;
        store.insert("new".to_string(), Bytes::from_static(b"b"));
        advance(Duration::from_millis(1500)).await;

        let removed = store.reap_expired();

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("new").is_some());
    }

    #[test]
    fn test_store_reap_on_fresh_store_is_noop() {
        let mut store = CacheStore::new(TTL);
        store.insert("key1".to_string(), Bytes::from_static(b"value1"));

        assert_eq!(store.reap_expired(), 0);
        assert_eq!(store.len(), 1);
    }
}
