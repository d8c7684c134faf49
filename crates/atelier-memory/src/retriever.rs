//! MemoryRetriever: timeout + failure isolation around a memory backend.

use std::sync::Arc;
use std::time::Duration;

use atelier_core::config::MemoryConfig;
use atelier_core::errors::MemoryError;
use atelier_core::traits::{IMemoryBackend, SearchRequest};
use atelier_core::RetrievalResult;
use atelier_observability::events;
use tracing::debug;

use crate::outcome::SearchOutcome;

/// Issues one search per query and never propagates a failure.
#[derive(Clone)]
pub struct MemoryRetriever {
    backend: Arc<dyn IMemoryBackend>,
    threshold: f64,
    timeout: Duration,
}

impl MemoryRetriever {
    pub fn new(backend: Arc<dyn IMemoryBackend>, config: &MemoryConfig) -> Self {
        Self {
            backend,
            threshold: config.threshold,
            timeout: config.timeout(),
        }
    }

    /// Override the per-query timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one search and report how it went.
    pub async fn search_outcome(&self, query: &str, limit: usize) -> SearchOutcome {
        let request = SearchRequest {
            query: query.to_string(),
            limit,
            threshold: self.threshold,
        };

        let result = match tokio::time::timeout(self.timeout, self.backend.search(&request)).await {
            Ok(result) => result,
            Err(_) => Err(MemoryError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        };

        let outcome = SearchOutcome::from(result);
        match &outcome {
            SearchOutcome::Success(results) => {
                debug!(query = %query, results = results.len(), "memory search succeeded");
            }
            SearchOutcome::Failed(e) => {
                events::query_failed(query, self.backend.name(), &e.to_string());
            }
        }
        outcome
    }

    /// Run one search; any failure becomes an empty list.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<RetrievalResult> {
        self.search_outcome(query, limit).await.into_results()
    }
}

impl std::fmt::Debug for MemoryRetriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryRetriever")
            .field("backend", &self.backend.name())
            .field("threshold", &self.threshold)
            .field("timeout", &self.timeout)
            .finish()
    }
}
