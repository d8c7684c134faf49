//! Synthesizer: template seeds from pattern metadata alone.

use std::sync::Arc;

use atelier_core::config::SynthesisConfig;
use atelier_core::models::{GenerationMethod, Pattern, Score, TemplateSeed};
use atelier_core::traits::IEntropySource;
use atelier_extraction::ExtractionContext;

use crate::entropy::ThreadEntropy;
use crate::names::names_for;

/// Builds synthetic seeds. Palette, motion, modules, and tags come from the
/// extractor's empty-input defaults so synthetic and retrieved templates
/// share one schema.
#[derive(Clone)]
pub struct Synthesizer {
    config: SynthesisConfig,
    entropy: Arc<dyn IEntropySource>,
}

impl Synthesizer {
    pub fn new(config: SynthesisConfig, entropy: Arc<dyn IEntropySource>) -> Self {
        Self { config, entropy }
    }

    /// Synthesize the `index`-th backfill seed for `context_key`.
    pub fn synthesize(&self, pattern: &Pattern, context_key: &str, index: usize) -> TemplateSeed {
        let characteristics = &pattern.characteristics;
        let ctx = ExtractionContext::from_pattern(pattern);
        let mut features = atelier_extraction::defaults(&ctx);

        features.name = self.pick_name(&[context_key, pattern.context_key.as_str()], index);
        features.summary = format!(
            "A {} template for {}, emphasizing {}.",
            characteristics.complexity.as_str(),
            characteristics.purpose,
            describe_focus(&characteristics.focus_areas),
        );

        TemplateSeed {
            features,
            confidence: self.sample_score(),
            orion_score: self.sample_score(),
            generation_method: GenerationMethod::SyntheticEnhanced,
            context_key: context_key.to_string(),
            characteristics: characteristics.clone(),
            source: None,
        }
    }

    fn pick_name(&self, keys: &[&str], index: usize) -> String {
        let names = names_for(keys);
        let i = if self.config.deterministic_names {
            index % names.len()
        } else {
            self.entropy.index(names.len())
        };
        names.get(i).copied().unwrap_or("Adaptive Interface Template").to_string()
    }

    /// Score in `[score_min, score_max)`.
    fn sample_score(&self) -> Score {
        Score::new(
            self.entropy
                .range(self.config.score_min, self.config.score_max),
        )
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(SynthesisConfig::default(), Arc::new(ThreadEntropy))
    }
}

impl std::fmt::Debug for Synthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synthesizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn describe_focus(focus_areas: &[String]) -> String {
    if focus_areas.is_empty() {
        return "clear structure".to_string();
    }
    focus_areas
        .iter()
        .map(|area| area.replace(['-', '_'], " "))
        .collect::<Vec<_>>()
        .join(", ")
}
