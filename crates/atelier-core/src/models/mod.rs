//! Canonical data model: templates, patterns, retrieval results, seeds,
//! and the request/response envelope.

pub mod features;
pub mod module;
pub mod pattern;
pub mod response;
pub mod retrieval;
pub mod score;
pub mod seed;
pub mod template;

pub use features::ExtractedFeatures;
pub use module::{Emphasis, Module, ModuleType};
pub use pattern::{Characteristics, Pattern};
pub use response::{RecommendationRequest, RecommendationResponse, ResponseMetadata};
pub use retrieval::{RetrievalHit, RetrievalResult};
pub use score::Score;
pub use seed::{SeedSource, TemplateSeed};
pub use template::{
    AnimationSettings, Architecture, Complexity, DesignProfile, FeatureSet, GenerationMethod,
    Interaction, LayoutSpec, LearningData, Palette, Performance, Provenance, Spacing, Styling,
    Template, TemplateMetadata, Typography,
};
