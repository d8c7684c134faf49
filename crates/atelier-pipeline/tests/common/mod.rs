//! Shared doubles for pipeline tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use atelier_core::errors::MemoryError;
use atelier_core::traits::{IEntropySource, IMemoryBackend, SearchRequest};
use atelier_core::{AtelierConfig, RetrievalResult};
use atelier_pipeline::RecommendationEngine;
use atelier_synthesis::SeededEntropy;
use test_fixtures::RetrievalSnapshot;

/// Memory backend that answers from a per-query script. Unscripted
/// queries succeed with no results.
#[derive(Default)]
pub struct ScriptedBackend {
    answers: HashMap<String, Result<Vec<RetrievalResult>, MemoryError>>,
    fail_all: bool,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn from_snapshot(snapshot: &RetrievalSnapshot) -> Self {
        let mut backend = Self::default();
        for script in &snapshot.queries {
            let answer = if script.fail {
                Err(network_error())
            } else {
                Ok(script.results.clone())
            };
            backend.answers.insert(script.query.clone(), answer);
        }
        backend
    }

    pub fn with(mut self, query: &str, answer: Result<Vec<RetrievalResult>, MemoryError>) -> Self {
        self.answers.insert(query.to_string(), answer);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IMemoryBackend for ScriptedBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RetrievalResult>, MemoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all {
            return Err(network_error());
        }
        match self.answers.get(&request.query) {
            Some(Ok(results)) => Ok(results.iter().take(request.limit).cloned().collect()),
            Some(Err(e)) => Err(e.clone()),
            None => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Entropy source that panics on id generation, simulating a defect deep
/// inside assembly.
pub struct PanickingEntropy;

impl IEntropySource for PanickingEntropy {
    fn unit(&self) -> f64 {
        0.5
    }

    fn index(&self, _bound: usize) -> usize {
        0
    }

    fn id(&self, _prefix: &str) -> String {
        panic!("id generator exploded")
    }
}

pub fn network_error() -> MemoryError {
    MemoryError::Transport {
        reason: "connection refused".to_string(),
    }
}

pub fn result(id: &str, content: &str, similarity: f64) -> RetrievalResult {
    RetrievalResult {
        id: id.to_string(),
        content: content.to_string(),
        similarity,
    }
}

pub fn engine_with(backend: Arc<dyn IMemoryBackend>, seed: u64) -> RecommendationEngine {
    RecommendationEngine::new(
        &AtelierConfig::default(),
        backend,
        Arc::new(SeededEntropy::new(seed)),
    )
}

pub fn engine(backend: ScriptedBackend) -> RecommendationEngine {
    engine_with(Arc::new(backend), 7)
}
