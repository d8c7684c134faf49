use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::MemoryError;
use crate::models::RetrievalResult;

/// Wire request for one semantic search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub limit: usize,
    pub threshold: f64,
}

/// Transport to the external semantic memory service.
///
/// Implementations report failures honestly; isolating them from the
/// pipeline is the retriever's job, not the backend's.
#[async_trait]
pub trait IMemoryBackend: Send + Sync {
    /// Run one similarity search.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RetrievalResult>, MemoryError>;

    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;
}
