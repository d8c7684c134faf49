use serde::{Deserialize, Serialize};

/// Structural role of a template module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Layout,
    Navigation,
    Visual,
    Content,
    Functional,
    Interactive,
}

impl ModuleType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Navigation => "navigation",
            Self::Visual => "visual",
            Self::Content => "content",
            Self::Functional => "functional",
            Self::Interactive => "interactive",
        }
    }
}

/// Visual weight of a module within the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    High,
    Medium,
    Low,
}

/// A building block of a template's architecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub name: String,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub description: String,
    pub emphasis: Emphasis,
    pub animation: String,
    pub customizable: bool,
    pub ai_generated: bool,
    /// Set when the module was detected in retrieved text rather than padded in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orion_extracted: Option<bool>,
}
