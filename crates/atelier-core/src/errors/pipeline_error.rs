/// Errors raised inside the recommendation pipeline.
///
/// Only [`PipelineError::InvalidLimit`] is meant for callers (request
/// validation). Every other variant is absorbed by the orchestrator's
/// fallback boundary.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid limit {limit}: must be between 1 and {max}")]
    InvalidLimit { limit: usize, max: usize },

    #[error("assembly failed: {reason}")]
    Assembly { reason: String },

    #[error("pipeline produced {actual} templates, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("all {queries} memory queries failed")]
    RetrievalUnavailable { queries: usize },

    #[error("pipeline panicked: {message}")]
    Panicked { message: String },
}
