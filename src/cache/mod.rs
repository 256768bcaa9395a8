//! Cache Module
//!
//! Provides the in-memory read-through cache for API responses, with
//! per-entry TTL expiration and background reclamation.

mod entry;
mod shared;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::{Cache, MIN_SWEEP_INTERVAL};
pub use store::CacheStore;
