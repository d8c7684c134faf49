use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Semantic memory service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Base URL of the memory service.
    pub base_url: String,
    /// Path of the search endpoint, appended to `base_url`.
    pub search_path: String,
    /// Optional bearer token.
    pub api_key: Option<String>,
    /// Minimum similarity a result must have to be returned.
    pub threshold: f64,
    /// Per-query timeout (seconds).
    pub timeout_secs: u64,
}

impl MemoryConfig {
    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.search_path
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_MEMORY_BASE_URL.to_string(),
            search_path: defaults::DEFAULT_MEMORY_SEARCH_PATH.to_string(),
            api_key: None,
            threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            timeout_secs: defaults::DEFAULT_SEARCH_TIMEOUT_SECS,
        }
    }
}
