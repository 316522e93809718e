//! Session cache for area-code lookups.
//!
//! An area code's cities do not change while the server runs, so entries
//! have no TTL and are never evicted. The key space is bounded by the
//! reference table (67 area codes), which keeps the cache small.
//!
//! Only successful fetches are stored; a failed lookup is retried the next
//! time someone asks.

use std::sync::Arc;

use moka::future::Cache as MokaCache;

use crate::domain::Ddd;
use crate::lookup::{AreaCodeInfo, AreaCodeSource, LookupError};

/// Cached area-code entry.
type AreaCodeEntry = Arc<AreaCodeInfo>;

/// Configuration for the cache.
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// Maximum number of cached entries. `None` means unbounded.
    pub max_capacity: Option<u64>,
}

/// Cache of area-code responses, keyed by DDD.
///
/// Cloning is cheap and clones share entries, so one cache can back several
/// clients, and tests can build a fresh or pre-seeded one.
#[derive(Clone)]
pub struct AreaCodeCache {
    entries: MokaCache<Ddd, AreaCodeEntry>,
}

impl AreaCodeCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = MokaCache::builder();
        if let Some(capacity) = config.max_capacity {
            builder = builder.max_capacity(capacity);
        }

        Self {
            entries: builder.build(),
        }
    }

    /// Get a cached entry.
    pub async fn get(&self, ddd: Ddd) -> Option<AreaCodeEntry> {
        self.entries.get(&ddd).await
    }

    /// Insert an entry, e.g. to pre-seed the cache.
    pub async fn insert(&self, ddd: Ddd, info: AreaCodeInfo) {
        self.entries.insert(ddd, Arc::new(info)).await;
    }

    /// Number of cached entries (for monitoring).
    ///
    /// Moka updates this lazily; call after `sync` for an exact figure.
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Apply pending bookkeeping so `entry_count` is exact.
    pub async fn sync(&self) {
        self.entries.run_pending_tasks().await;
    }
}

impl Default for AreaCodeCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

/// Area-code source with caching.
///
/// Wraps any `AreaCodeSource`; concurrent misses for the same DDD share one
/// fetch.
pub struct CachedAreaCodes {
    source: Arc<dyn AreaCodeSource>,
    cache: AreaCodeCache,
}

impl CachedAreaCodes {
    /// Create a cached source.
    pub fn new(source: Arc<dyn AreaCodeSource>, cache: AreaCodeCache) -> Self {
        Self { source, cache }
    }

    /// Get an area code's cities, from the cache if present.
    pub async fn get(&self, ddd: Ddd) -> Result<AreaCodeEntry, LookupError> {
        if let Some(cached) = self.cache.get(ddd).await {
            tracing::debug!(%ddd, "area code cache hit");
            return Ok(cached);
        }

        tracing::debug!(%ddd, "area code cache miss");
        let source = Arc::clone(&self.source);
        self.cache
            .entries
            .try_get_with(ddd, async move { source.area_code(ddd).await.map(Arc::new) })
            .await
            .map_err(|e| LookupError::clone(&e))
    }
}
