//! # atelier-core
//!
//! Foundation crate for the Atelier template recommender.
//! Defines the canonical template schema, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AtelierConfig;
pub use errors::{AtelierError, AtelierResult};
pub use models::{
    Complexity, GenerationMethod, Module, ModuleType, Pattern, RetrievalResult, Score, Template,
    TemplateSeed,
};
