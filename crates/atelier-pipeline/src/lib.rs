//! # atelier-pipeline
//!
//! The recommendation pipeline:
//! pattern lookup → concurrent retrieval fan-out → feature extraction →
//! assembly → synthetic backfill → ranking, all behind a fallback boundary
//! that always answers with exactly `limit` templates.

pub mod assembly;
pub mod engine;
pub mod fallback;
pub mod fanout;
pub mod ranker;

pub use assembly::Assembler;
pub use engine::RecommendationEngine;
