//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a single memory search that failed and was degraded to no results.
pub fn query_failed(query: &str, backend: &str, error: &str) {
    tracing::warn!(
        event = "query_failed",
        query = %query,
        backend = %backend,
        error = %error,
        "memory search failed, continuing without its results"
    );
}

/// Log the outcome of the concurrent retrieval fan-out.
pub fn retrieval_collected(context_key: &str, queries: usize, hits: usize, kept: usize) {
    tracing::info!(
        event = "retrieval_collected",
        context_key = %context_key,
        queries = queries,
        hits = hits,
        kept = kept,
        "retrieval collected"
    );
}

/// Log synthetic backfill of a short result set.
pub fn backfill_applied(context_key: &str, retrieved: usize, synthesized: usize) {
    tracing::info!(
        event = "backfill_applied",
        context_key = %context_key,
        retrieved = retrieved,
        synthesized = synthesized,
        "synthetic backfill applied"
    );
}

/// Log activation of the full-failure fallback.
pub fn fallback_triggered(context_key: &str, cause: &str) {
    tracing::error!(
        event = "fallback_triggered",
        context_key = %context_key,
        cause = %cause,
        "pipeline failed, serving canned templates"
    );
}

/// Log a completed recommendation.
pub fn recommendation_completed(
    context_key: &str,
    templates: usize,
    confidence: f64,
    elapsed_ms: u64,
) {
    tracing::info!(
        event = "recommendation_completed",
        context_key = %context_key,
        templates = templates,
        confidence = confidence,
        elapsed_ms = elapsed_ms,
        "recommendation completed"
    );
}
