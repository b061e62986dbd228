//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedPlanner};
use crate::planner::RouteEngine;
use crate::reference::InMemoryStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Route engine behind the reference store and response cache
    pub planner: Arc<CachedPlanner<InMemoryStore>>,
}

impl AppState {
    pub fn new(store: InMemoryStore, engine: RouteEngine, cache_config: &CacheConfig) -> Self {
        Self {
            planner: Arc::new(CachedPlanner::new(store, engine, cache_config)),
        }
    }

    /// The catalog the planner reads from.
    pub fn store(&self) -> &InMemoryStore {
        self.planner.store()
    }
}
