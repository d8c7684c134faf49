use super::features::ExtractedFeatures;
use super::pattern::Characteristics;
use super::score::Score;
use super::template::GenerationMethod;

/// Where a retrieval-derived seed came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSource {
    pub memory_id: String,
    pub query: String,
    pub similarity: f64,
}

/// A template before schema defaults, id, and derived fields are applied.
///
/// Retrieved and synthetic seeds share this shape so the assembler treats
/// them uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSeed {
    pub features: ExtractedFeatures,
    pub confidence: Score,
    pub orion_score: Score,
    pub generation_method: GenerationMethod,
    pub context_key: String,
    pub characteristics: Characteristics,
    pub source: Option<SeedSource>,
}
