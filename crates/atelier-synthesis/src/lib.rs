//! # atelier-synthesis
//!
//! Fabricates template seeds from pattern metadata when retrieval comes up
//! short, and owns the entropy sources that make this (and template ids)
//! random in production and reproducible in tests.

pub mod entropy;
mod names;
pub mod synthesizer;

pub use entropy::{SeededEntropy, ThreadEntropy};
pub use synthesizer::Synthesizer;
