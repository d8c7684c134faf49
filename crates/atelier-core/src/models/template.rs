use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::module::Module;
use super::score::Score;

/// Build complexity of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        }
    }
}

/// How a template was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMethod {
    /// Extracted from a semantic memory result.
    RagEnhanced,
    /// Fabricated from pattern metadata.
    SyntheticEnhanced,
}

/// The canonical recommendation object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub metadata: TemplateMetadata,
    pub design: DesignProfile,
    pub styling: Styling,
    pub interaction: Interaction,
    pub architecture: Architecture,
    pub features: FeatureSet,
    pub ai: Provenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    pub name: String,
    pub category: String,
    pub complexity: Complexity,
    pub industry: String,
    pub purpose: String,
    pub responsive: bool,
    pub accessibility: bool,
    pub performance: Performance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub load_time: String,
    pub bundle_size: String,
    pub core_web_vitals: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignProfile {
    pub summary: String,
    pub reason: String,
    pub confidence: Score,
    pub orion_score: Score,
    pub visual_style: String,
    pub color_scheme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styling {
    pub palette: Palette,
    pub typography: Typography,
    pub spacing: Spacing,
    pub layout: LayoutSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Between 3 and 5 `#RRGGBB` colors.
    pub primary: Vec<String>,
    pub semantic: BTreeMap<String, String>,
    pub gradients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
    pub base_size_px: u8,
    pub scale_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    pub base_unit_px: u8,
    pub scale: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSpec {
    pub grid: String,
    pub columns: u8,
    pub max_width: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub motion_presets: Vec<String>,
    pub animations: AnimationSettings,
    pub micro_interactions: Vec<String>,
    pub gesture_support: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSettings {
    /// Milliseconds.
    pub duration: u32,
    pub easing: String,
    pub respects_reduced_motion: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Architecture {
    pub modules: Vec<Module>,
    pub dependencies: Vec<String>,
    pub code_structure: String,
    pub state_management: String,
    pub data_flow: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    pub tags: Vec<String>,
    pub capabilities: Vec<String>,
    pub integrations: Vec<String>,
    pub content_types: Vec<String>,
}

/// Where a template came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_memory_id: Option<String>,
    pub context_type: String,
    pub generation_method: GenerationMethod,
    pub learning_data: LearningData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningData {
    /// Query that retrieved the source snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Raw similarity reported by the memory service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    pub focus_areas: Vec<String>,
}
