use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestrator sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Templates returned when the request has no limit.
    pub default_limit: usize,
    /// Largest limit a request may ask for.
    pub max_limit: usize,
    /// Collected results are truncated to `limit * overfetch_factor`.
    pub overfetch_factor: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::DEFAULT_LIMIT,
            max_limit: defaults::DEFAULT_MAX_LIMIT,
            overfetch_factor: defaults::DEFAULT_OVERFETCH_FACTOR,
        }
    }
}
