use serde::{Deserialize, Serialize};

use super::defaults;

/// Full-failure fallback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Confidence reported on every canned template and on the envelope.
    pub confidence: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            confidence: defaults::DEFAULT_FALLBACK_CONFIDENCE,
        }
    }
}
