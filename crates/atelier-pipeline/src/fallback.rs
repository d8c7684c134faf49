//! Canned result set served when the pipeline itself fails.
//!
//! Nothing here performs I/O, draws randomness, or returns a `Result`.

use atelier_core::models::{
    GenerationMethod, Pattern, RecommendationResponse, ResponseMetadata, Score, Template,
    TemplateSeed,
};
use atelier_extraction::ExtractionContext;
use chrono::Utc;

use crate::assembly::build_template;

const FALLBACK_NAMES: &[&str] = &[
    "Essential Starter",
    "Clean Foundation",
    "Flexible Layout",
    "Balanced Interface",
];

/// `limit` synthetic templates built from `pattern`, every score pinned to
/// `confidence`.
pub fn templates(pattern: &Pattern, context_key: &str, limit: usize, confidence: f64) -> Vec<Template> {
    let ctx = ExtractionContext::from_pattern(pattern);
    let score = Score::new(confidence);
    let characteristics = &pattern.characteristics;

    (0..limit)
        .map(|i| {
            let mut features = atelier_extraction::defaults(&ctx);
            features.name = FALLBACK_NAMES[i % FALLBACK_NAMES.len()].to_string();
            features.summary = format!(
                "A dependable {} starting point for {}.",
                characteristics.complexity.as_str(),
                characteristics.purpose
            );
            let seed = TemplateSeed {
                features,
                confidence: score,
                orion_score: score,
                generation_method: GenerationMethod::SyntheticEnhanced,
                context_key: context_key.to_string(),
                characteristics: characteristics.clone(),
                source: None,
            };
            build_template(seed, format!("fallback_{i}"))
        })
        .collect()
}

/// The degraded-but-successful envelope.
pub fn response(
    pattern: &Pattern,
    context_key: &str,
    limit: usize,
    confidence: f64,
    generation_time: u64,
) -> RecommendationResponse {
    RecommendationResponse {
        success: true,
        templates: templates(pattern, context_key, limit, confidence),
        metadata: ResponseMetadata {
            context: context_key.to_string(),
            pattern: None,
            enhanced_schemas: true,
            orion_powered: false,
            generation_time,
            fallback_mode: true,
        },
        context_used: vec![context_key.to_string()],
        confidence: Score::new(confidence),
        timestamp: Utc::now(),
    }
}
