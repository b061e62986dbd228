//! Caching layer for route responses.
//!
//! Route generation is deterministic over an immutable catalog, so a
//! response can be reused for any equal query. Queries are normalized on
//! construction, which makes `RouteQuery` itself a sound cache key.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::planner::{RouteEngine, RouteQuery, RouteResponse};
use crate::reference::{ReferenceError, ReferenceStore, load_snapshot};

/// Cached route response entry.
type RouteEntry = Arc<RouteResponse>;

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache for route responses, keyed by query.
pub struct RouteCache {
    routes: MokaCache<RouteQuery, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    pub async fn get(&self, query: &RouteQuery) -> Option<RouteEntry> {
        self.routes.get(query).await
    }

    pub async fn insert(&self, query: RouteQuery, entry: RouteEntry) {
        self.routes.insert(query, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Route engine with a reference store and a response cache in front.
pub struct CachedPlanner<S> {
    store: S,
    engine: RouteEngine,
    cache: RouteCache,
}

impl<S: ReferenceStore> CachedPlanner<S> {
    pub fn new(store: S, engine: RouteEngine, cache_config: &CacheConfig) -> Self {
        Self {
            store,
            engine,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Route options for `query`, from cache when available.
    pub async fn plan(&self, query: &RouteQuery) -> Result<RouteEntry, ReferenceError> {
        if let Some(cached) = self.cache.get(query).await {
            debug!("route cache hit");
            return Ok(cached);
        }

        let snapshot = load_snapshot(&self.store, query).await?;
        let response = Arc::new(self.engine.generate(
            query,
            &snapshot.destinations,
            &snapshot.visa_rules,
            &snapshot.price_tiers,
        ));

        self.cache.insert(query.clone(), response.clone()).await;
        Ok(response)
    }

    /// Access the underlying store for reads that bypass the planner.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
