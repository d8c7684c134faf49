/// Pattern catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {message}")]
    Parse { message: String },

    #[error("pattern {context_key} has no search queries")]
    EmptyQueries { context_key: String },

    #[error("pattern {context_key} has a blank search query at position {position}")]
    BlankQuery { context_key: String, position: usize },

    #[error("failed to read catalog {path}: {reason}")]
    Io { path: String, reason: String },
}
