use serde::{Deserialize, Serialize};

use super::template::Complexity;

/// What a pattern's templates are for. Synthetic templates impersonate these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristics {
    pub purpose: String,
    pub complexity: Complexity,
    pub focus_areas: Vec<String>,
}

/// A retrieval recipe for one context: the queries to fire and the
/// metadata describing what they are looking for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub context_key: String,
    pub search_queries: Vec<String>,
    pub characteristics: Characteristics,
}
