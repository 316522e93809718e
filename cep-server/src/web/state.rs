//! Application state for the web layer.

use std::sync::Arc;

use crate::lookup::LookupClient;
use crate::query::QueryConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Lookup client with its session cache
    pub lookup: LookupClient,

    /// Area-code query configuration
    pub config: Arc<QueryConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(lookup: LookupClient, config: QueryConfig) -> Self {
        Self {
            lookup,
            config: Arc::new(config),
        }
    }
}
