//! # atelier-memory
//!
//! Client side of the external semantic memory service.
//!
//! [`HttpMemoryBackend`] speaks the wire protocol and reports failures.
//! [`MemoryRetriever`] wraps any backend, enforces the per-query timeout,
//! and collapses every failure to an empty result list so that retrieval
//! problems reduce result richness, never pipeline availability.

pub mod http;
pub mod outcome;
pub mod retriever;

pub use http::HttpMemoryBackend;
pub use outcome::SearchOutcome;
pub use retriever::MemoryRetriever;
