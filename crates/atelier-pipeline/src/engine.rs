//! RecommendationEngine: the orchestrator.
//!
//! `Start → Fan-out → Collect → Backfill → Rank → Done`, with every step
//! behind a boundary that turns an error or a panic into the canned
//! fallback response. [`RecommendationEngine::recommend`] therefore never
//! fails and always returns exactly `limit` templates.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use atelier_catalog::PatternCatalog;
use atelier_core::config::{FallbackConfig, PipelineConfig};
use atelier_core::errors::PipelineError;
use atelier_core::models::{
    GenerationMethod, Pattern, RecommendationRequest, RecommendationResponse, ResponseMetadata,
    RetrievalHit, Score, SeedSource, Template, TemplateSeed,
};
use atelier_core::traits::{IEntropySource, IMemoryBackend};
use atelier_core::{AtelierConfig, AtelierResult};
use atelier_extraction::ExtractionContext;
use atelier_memory::{HttpMemoryBackend, MemoryRetriever};
use atelier_observability::events;
use atelier_synthesis::{Synthesizer, ThreadEntropy};
use chrono::Utc;
use futures::FutureExt;
use tracing::{debug, instrument};

use crate::assembly::Assembler;
use crate::fanout::fan_out;
use crate::{fallback, ranker};

/// Template recommendation orchestrator. Holds no per-request state, so
/// one engine serves concurrent requests.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<PatternCatalog>,
    retriever: MemoryRetriever,
    synthesizer: Synthesizer,
    assembler: Assembler,
    pipeline: PipelineConfig,
    fallback: FallbackConfig,
}

impl RecommendationEngine {
    /// Build an engine over `backend`, drawing ids and synthetic scores
    /// from `entropy`. Uses the built-in pattern catalog.
    pub fn new(
        config: &AtelierConfig,
        backend: Arc<dyn IMemoryBackend>,
        entropy: Arc<dyn IEntropySource>,
    ) -> Self {
        Self {
            catalog: Arc::new(PatternCatalog::builtin()),
            retriever: MemoryRetriever::new(backend, &config.memory),
            synthesizer: Synthesizer::new(config.synthesis.clone(), entropy.clone()),
            assembler: Assembler::new(entropy),
            pipeline: config.pipeline.clone(),
            fallback: config.fallback.clone(),
        }
    }

    /// Production wiring: HTTP memory backend, thread-local entropy, and
    /// the catalog named by `[catalog]`.
    pub fn from_config(config: &AtelierConfig) -> AtelierResult<Self> {
        let backend = HttpMemoryBackend::new(&config.memory)?;
        let catalog = PatternCatalog::load(&config.catalog)?;
        Ok(Self::new(config, Arc::new(backend), Arc::new(ThreadEntropy)).with_catalog(catalog))
    }

    pub fn with_catalog(mut self, catalog: PatternCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    pub fn with_retriever(mut self, retriever: MemoryRetriever) -> Self {
        self.retriever = retriever;
        self
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Validate a caller request, then recommend. Only an invalid limit is
    /// reported as an error.
    pub async fn handle(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, PipelineError> {
        let limit =
            request.validated_limit(self.pipeline.default_limit, self.pipeline.max_limit)?;
        Ok(self.recommend(&request.context_key, limit).await)
    }

    /// Recommend exactly `limit` templates for `context_key`.
    #[instrument(skip(self))]
    pub async fn recommend(&self, context_key: &str, limit: usize) -> RecommendationResponse {
        let started = Instant::now();

        let outcome = AssertUnwindSafe(self.run(context_key, limit, started))
            .catch_unwind()
            .await;

        let cause = match outcome {
            Ok(Ok(response)) => return response,
            Ok(Err(e)) => e,
            Err(payload) => PipelineError::Panicked {
                message: panic_message(payload.as_ref()),
            },
        };

        events::fallback_triggered(context_key, &cause.to_string());
        fallback::response(
            self.catalog.lookup(context_key),
            context_key,
            limit,
            self.fallback.confidence,
            elapsed_ms(started),
        )
    }

    async fn run(
        &self,
        context_key: &str,
        limit: usize,
        started: Instant,
    ) -> Result<RecommendationResponse, PipelineError> {
        if limit == 0 {
            return Err(PipelineError::InvalidLimit {
                limit,
                max: self.pipeline.max_limit,
            });
        }

        // Start
        let pattern = self.catalog.lookup(context_key);
        let queries = &pattern.search_queries;
        let per_query = limit.div_ceil(queries.len().max(1));

        // Fan-out
        let fanned = fan_out(&self.retriever, queries, per_query).await;
        if fanned.all_failed() {
            return Err(PipelineError::RetrievalUnavailable {
                queries: queries.len(),
            });
        }

        // Collect
        let mut hits = fanned.into_hits();
        let total_hits = hits.len();
        hits.truncate(limit.saturating_mul(self.pipeline.overfetch_factor));
        events::retrieval_collected(context_key, queries.len(), total_hits, hits.len());

        let seeds = hits
            .into_iter()
            .take(limit)
            .map(|hit| retrieved_seed(hit, pattern, context_key))
            .collect();
        let mut templates = self.assembler.assemble_all(seeds)?;

        // Backfill
        let retrieved = templates.len();
        for index in 0..limit.saturating_sub(retrieved) {
            let seed = self.synthesizer.synthesize(pattern, context_key, index);
            templates.push(self.assembler.assemble(seed)?);
        }
        if templates.len() > retrieved {
            events::backfill_applied(context_key, retrieved, templates.len() - retrieved);
        }
        if templates.len() != limit {
            return Err(PipelineError::SizeMismatch {
                expected: limit,
                actual: templates.len(),
            });
        }

        // Rank
        ranker::rank(&mut templates);

        // Done
        Ok(self.envelope(context_key, pattern, templates, started))
    }

    fn envelope(
        &self,
        context_key: &str,
        pattern: &Pattern,
        templates: Vec<Template>,
        started: Instant,
    ) -> RecommendationResponse {
        let confidence = Score::mean(templates.iter().map(|t| t.design.orion_score));
        let orion_powered = templates
            .iter()
            .any(|t| t.ai.generation_method == GenerationMethod::RagEnhanced);
        let generation_time = elapsed_ms(started);

        events::recommendation_completed(
            context_key,
            templates.len(),
            confidence.value(),
            generation_time,
        );

        RecommendationResponse {
            success: true,
            templates,
            metadata: ResponseMetadata {
                context: context_key.to_string(),
                pattern: Some(pattern.clone()),
                enhanced_schemas: true,
                orion_powered,
                generation_time,
                fallback_mode: false,
            },
            context_used: vec![context_key.to_string()],
            confidence,
            timestamp: Utc::now(),
        }
    }
}

/// Extract features from one hit. The similarity doubles as both
/// confidence and orionScore.
fn retrieved_seed(hit: RetrievalHit, pattern: &Pattern, context_key: &str) -> TemplateSeed {
    let RetrievalHit { query, result } = hit;
    let ctx = ExtractionContext::from_pattern(pattern);
    let score = Score::new(result.similarity);
    debug!(memory_id = %result.id, similarity = result.similarity, "extracting features");

    TemplateSeed {
        features: atelier_extraction::extract(&result.content, &ctx),
        confidence: score,
        orion_score: score,
        generation_method: GenerationMethod::RagEnhanced,
        context_key: context_key.to_string(),
        characteristics: pattern.characteristics.clone(),
        source: Some(SeedSource {
            memory_id: result.id,
            query,
            similarity: result.similarity,
        }),
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
