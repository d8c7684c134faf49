use serde::{Deserialize, Serialize};

/// Pattern catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Optional TOML file whose patterns override the built-in ones by context key.
    pub path: Option<String>,
}
