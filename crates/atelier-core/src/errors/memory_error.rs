/// Semantic memory service errors.
///
/// These never reach a pipeline caller: the retriever logs them and
/// degrades the failed query to an empty result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MemoryError {
    #[error("transport failed: {reason}")]
    Transport { reason: String },

    #[error("memory service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response decode failed: {reason}")]
    Decode { reason: String },

    #[error("search timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}
