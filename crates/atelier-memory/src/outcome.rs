use atelier_core::errors::MemoryError;
use atelier_core::RetrievalResult;

/// Tagged result of one memory search.
///
/// Results are merged from the collapsed list of
/// [`SearchOutcome::into_results`]. The tag is kept for logging and for
/// telling "nothing found" apart from "service unreachable".
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Success(Vec<RetrievalResult>),
    Failed(MemoryError),
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Results on success, an empty list on failure.
    pub fn into_results(self) -> Vec<RetrievalResult> {
        match self {
            Self::Success(results) => results,
            Self::Failed(_) => Vec::new(),
        }
    }
}

impl From<Result<Vec<RetrievalResult>, MemoryError>> for SearchOutcome {
    fn from(result: Result<Vec<RetrievalResult>, MemoryError>) -> Self {
        match result {
            Ok(results) => Self::Success(results),
            Err(e) => Self::Failed(e),
        }
    }
}
