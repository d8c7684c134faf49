use serde::{Deserialize, Serialize};

use super::module::Module;

/// Everything the feature extractor derives from a single snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFeatures {
    pub name: String,
    pub summary: String,
    pub palette: Vec<String>,
    pub motion_presets: Vec<String>,
    pub modules: Vec<Module>,
    pub tags: Vec<String>,
    pub category: String,
    pub visual_style: String,
    pub capabilities: Vec<String>,
}
