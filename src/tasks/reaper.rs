//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps expired entries out of `store`.
///
/// The task sleeps for `interval` between sweeps and takes the write lock
/// only for the duration of one sweep. It runs until the returned handle is
/// aborted.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(5))));
/// let reaper = spawn_reaper(store.clone(), Duration::from_secs(5));
/// // Later:
/// reaper.abort();
/// ```
pub fn spawn_reaper(store: Arc<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(
            interval_ms = interval.as_millis() as u64,
            "starting cache reaper"
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut store_guard = store.write().await;
                let removed = store_guard.reap_expired();
                (removed, store_guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "cache reaper removed expired entries");
            } else {
                debug!(remaining, "cache reaper found no expired entries");
            }
        }
    })
}
