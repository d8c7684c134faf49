//! Concurrent retrieval fan-out.

use atelier_core::models::RetrievalHit;
use atelier_memory::{MemoryRetriever, SearchOutcome};
use futures::future::join_all;

/// Per-query outcomes of one fan-out, in query-submission order.
#[derive(Debug)]
pub struct FanOut {
    pub outcomes: Vec<(String, SearchOutcome)>,
}

impl FanOut {
    /// Number of queries whose search failed.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| !o.is_success()).count()
    }

    /// True when at least one query ran and none of them succeeded.
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.failed() == self.outcomes.len()
    }

    /// Flatten to hits: query order first, then each query's result order.
    /// Failed queries contribute nothing.
    pub fn into_hits(self) -> Vec<RetrievalHit> {
        self.outcomes
            .into_iter()
            .flat_map(|(query, outcome)| {
                outcome
                    .into_results()
                    .into_iter()
                    .map(move |result| RetrievalHit {
                        query: query.clone(),
                        result,
                    })
            })
            .collect()
    }
}

/// Issue every query concurrently and wait for all of them. A failing or
/// slow query never cancels its siblings; each carries its own timeout.
pub async fn fan_out(retriever: &MemoryRetriever, queries: &[String], per_query: usize) -> FanOut {
    let searches = queries.iter().map(|query| async move {
        let outcome = retriever.search_outcome(query, per_query).await;
        (query.clone(), outcome)
    });

    FanOut {
        outcomes: join_all(searches).await,
    }
}
