//! Query configuration.

/// Number of cities shown on an area-code card before the toggle.
const DEFAULT_PREVIEW_LEN: usize = 20;

/// Configuration for the area-code queries.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Cities shown before the "ver todas" toggle.
    pub preview_len: usize,

    /// Area-code lookups in flight at once. Results are always reported in
    /// table order whatever this is set to; 1 fetches strictly one after
    /// another.
    pub concurrency: usize,
}

impl QueryConfig {
    /// Create a new configuration.
    pub fn new(preview_len: usize, concurrency: usize) -> Self {
        Self {
            preview_len,
            concurrency: concurrency.max(1),
        }
    }

    /// Set the number of lookups in flight (at least 1).
    pub fn with_concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            preview_len: DEFAULT_PREVIEW_LEN,
            concurrency: 1,
        }
    }
}
