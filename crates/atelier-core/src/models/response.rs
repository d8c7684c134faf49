use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pattern::Pattern;
use super::score::Score;
use super::template::Template;
use crate::errors::PipelineError;

/// Caller input: which context to recommend for and how many templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub context_key: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl RecommendationRequest {
    pub fn new(context_key: impl Into<String>) -> Self {
        Self {
            context_key: context_key.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resolve the effective limit, rejecting zero or oversized values.
    ///
    /// Meant for the request-validation layer in front of the pipeline;
    /// the pipeline itself assumes a positive limit.
    pub fn validated_limit(
        &self,
        default_limit: usize,
        max_limit: usize,
    ) -> Result<usize, PipelineError> {
        let limit = self.limit.unwrap_or(default_limit);
        if limit == 0 || limit > max_limit {
            return Err(PipelineError::InvalidLimit {
                limit,
                max: max_limit,
            });
        }
        Ok(limit)
    }
}

/// Envelope metadata describing how the result set was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
    pub enhanced_schemas: bool,
    /// True when at least one template was built from retrieved memory.
    pub orion_powered: bool,
    /// Wall-clock generation time in milliseconds.
    pub generation_time: u64,
    pub fallback_mode: bool,
}

/// What the pipeline hands back. There is no failure variant: degraded
/// runs still report `success: true` with a lower `confidence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub success: bool,
    pub templates: Vec<Template>,
    pub metadata: ResponseMetadata,
    pub context_used: Vec<String>,
    /// Mean of the templates' `orionScore`.
    pub confidence: Score,
    pub timestamp: DateTime<Utc>,
}
