use serde::{Deserialize, Serialize};

use super::defaults;

/// Synthetic template generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Lower bound (inclusive) of synthetic confidence scores.
    pub score_min: f64,
    /// Upper bound (exclusive) of synthetic confidence scores.
    pub score_max: f64,
    /// Pick names by backfill index instead of at random.
    pub deterministic_names: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            score_min: defaults::DEFAULT_SYNTHETIC_SCORE_MIN,
            score_max: defaults::DEFAULT_SYNTHETIC_SCORE_MAX,
            deterministic_names: defaults::DEFAULT_DETERMINISTIC_NAMES,
        }
    }
}
