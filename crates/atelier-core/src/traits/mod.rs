//! Seams between the pipeline and its non-deterministic collaborators.

pub mod entropy;
pub mod memory_backend;

pub use entropy::IEntropySource;
pub use memory_backend::{IMemoryBackend, SearchRequest};
