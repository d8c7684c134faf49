use serde::{Deserialize, Serialize};

/// One scored snippet returned by the semantic memory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub id: String,
    pub content: String,
    pub similarity: f64,
}

/// A retrieval result tagged with the query that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalHit {
    pub query: String,
    pub result: RetrievalResult,
}
