//! PatternCatalog: immutable context-key → pattern map with a designated default.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use atelier_core::config::CatalogConfig;
use atelier_core::constants::DEFAULT_CONTEXT_KEY;
use atelier_core::errors::CatalogError;
use atelier_core::Pattern;
use serde::Deserialize;
use tracing::{debug, info};

use crate::builtin;

static GLOBAL: LazyLock<PatternCatalog> = LazyLock::new(PatternCatalog::builtin);

/// On-disk catalog override file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    patterns: Vec<Pattern>,
}

/// Read-only pattern catalog. Safe to share across tasks without locking.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: BTreeMap<String, Pattern>,
    default: Pattern,
}

impl PatternCatalog {
    /// The process-wide built-in catalog, built on first access.
    pub fn global() -> &'static PatternCatalog {
        &GLOBAL
    }

    /// A fresh copy of the built-in catalog.
    pub fn builtin() -> Self {
        let patterns: BTreeMap<String, Pattern> = builtin::patterns()
            .map(|p| (p.context_key.clone(), p))
            .collect();
        // The built-in table always carries the default key.
        let default = patterns
            .get(DEFAULT_CONTEXT_KEY)
            .cloned()
            .unwrap_or_else(empty_default);
        Self { patterns, default }
    }

    /// Build the catalog the config asks for: built-in patterns, overridden
    /// by the patterns in `config.path` when set.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let catalog = Self::builtin();
        match config.path.as_deref() {
            Some(path) => catalog.with_overrides(Self::read_file(Path::new(path))?),
            None => Ok(catalog),
        }
    }

    /// Parse a TOML catalog (`[[patterns]]` tables) into override patterns.
    pub fn from_toml(toml_str: &str) -> Result<Vec<Pattern>, CatalogError> {
        let file: CatalogFile = toml::from_str(toml_str).map_err(|e| CatalogError::Parse {
            message: e.to_string(),
        })?;
        Ok(file.patterns)
    }

    fn read_file(path: &Path) -> Result<Vec<Pattern>, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Replace or add patterns by context key.
    ///
    /// Every pattern must carry at least one search query, and none of its
    /// queries may be blank.
    pub fn with_overrides(mut self, overrides: Vec<Pattern>) -> Result<Self, CatalogError> {
        for pattern in &overrides {
            if pattern.search_queries.is_empty() {
                return Err(CatalogError::EmptyQueries {
                    context_key: pattern.context_key.clone(),
                });
            }
            let blank = pattern.search_queries.iter().position(|q| q.trim().is_empty());
            if let Some(position) = blank {
                return Err(CatalogError::BlankQuery {
                    context_key: pattern.context_key.clone(),
                    position,
                });
            }
        }

        let count = overrides.len();
        for pattern in overrides {
            debug!(context_key = %pattern.context_key, "catalog override");
            if pattern.context_key == DEFAULT_CONTEXT_KEY {
                self.default = pattern.clone();
            }
            self.patterns.insert(pattern.context_key.clone(), pattern);
        }
        info!(overrides = count, total = self.patterns.len(), "pattern catalog loaded");
        Ok(self)
    }

    /// Pattern for `context_key`, or the default pattern when absent.
    pub fn lookup(&self, context_key: &str) -> &Pattern {
        self.patterns.get(context_key).unwrap_or(&self.default)
    }

    /// Whether `context_key` has its own pattern.
    pub fn contains(&self, context_key: &str) -> bool {
        self.patterns.contains_key(context_key)
    }

    pub fn default_pattern(&self) -> &Pattern {
        &self.default
    }

    /// All known context keys, sorted.
    pub fn context_keys(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn empty_default() -> Pattern {
    Pattern {
        context_key: DEFAULT_CONTEXT_KEY.to_string(),
        search_queries: vec!["design system components".to_string()],
        characteristics: atelier_core::models::Characteristics {
            purpose: "general-purpose interfaces".to_string(),
            complexity: atelier_core::Complexity::Medium,
            focus_areas: Vec::new(),
        },
    }
}
