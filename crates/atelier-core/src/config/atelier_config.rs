//! Top-level Atelier configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CatalogConfig, FallbackConfig, MemoryConfig, ObservabilityConfig, PipelineConfig,
    SynthesisConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ATELIER_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AtelierConfig {
    pub memory: MemoryConfig,
    pub pipeline: PipelineConfig,
    pub synthesis: SynthesisConfig,
    pub fallback: FallbackConfig,
    pub catalog: CatalogConfig,
    pub observability: ObservabilityConfig,
}

impl AtelierConfig {
    /// Load configuration from an optional TOML file plus the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Same as [`AtelierConfig::load`] with an explicit environment lookup.
    pub fn load_with_env<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config, env)?;
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn apply_env_overrides<F>(config: &mut AtelierConfig, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env("ATELIER_MEMORY_URL") {
            config.memory.base_url = url;
        }
        if let Some(key) = env("ATELIER_MEMORY_API_KEY") {
            config.memory.api_key = Some(key);
        }
        if let Some(raw) = env("ATELIER_MEMORY_TIMEOUT_SECS") {
            config.memory.timeout_secs = parse_env("ATELIER_MEMORY_TIMEOUT_SECS", &raw)?;
        }
        if let Some(raw) = env("ATELIER_DEFAULT_LIMIT") {
            config.pipeline.default_limit = parse_env("ATELIER_DEFAULT_LIMIT", &raw)?;
        }
        if let Some(path) = env("ATELIER_CATALOG_PATH") {
            config.catalog.path = Some(path);
        }
        if let Some(level) = env("ATELIER_LOG_LEVEL") {
            config.observability.log_level = level;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(config: &AtelierConfig) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&config.memory.threshold) {
            return Err(invalid("memory.threshold", "must be between 0.0 and 1.0"));
        }
        if config.memory.timeout_secs == 0 {
            return Err(invalid("memory.timeout_secs", "must be greater than 0"));
        }
        if config.pipeline.default_limit == 0 {
            return Err(invalid("pipeline.default_limit", "must be greater than 0"));
        }
        if config.pipeline.default_limit > config.pipeline.max_limit {
            return Err(invalid(
                "pipeline.default_limit",
                "must not exceed pipeline.max_limit",
            ));
        }
        if config.pipeline.overfetch_factor == 0 {
            return Err(invalid("pipeline.overfetch_factor", "must be greater than 0"));
        }

        let synthesis = &config.synthesis;
        for (field, value) in [
            ("synthesis.score_min", synthesis.score_min),
            ("synthesis.score_max", synthesis.score_max),
            ("fallback.confidence", config.fallback.confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if synthesis.score_min >= synthesis.score_max {
            return Err(invalid(
                "synthesis.score_min",
                "must be lower than synthesis.score_max",
            ));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::ParseError {
        path: key.to_string(),
        message: format!("cannot parse {raw:?}"),
    })
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
