//! Application state

use std::sync::Arc;

use solara_store_core::{InMemoryCatalog, InMemoryCredentials, StoreService};

use crate::config::Config;

/// Type alias for the store service with concrete collaborator types
pub type StoreServiceImpl = StoreService<InMemoryCatalog, InMemoryCredentials>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Store service for sessions, carts, and catalog lookups
    pub store: Arc<StoreServiceImpl>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: StoreServiceImpl, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
