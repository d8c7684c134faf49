//! Configuration system for Atelier.
//! TOML-based, 3-layer resolution: env > config file > compiled defaults.

pub mod atelier_config;
pub mod catalog_config;
pub mod defaults;
pub mod fallback_config;
pub mod memory_config;
pub mod observability_config;
pub mod pipeline_config;
pub mod synthesis_config;

pub use atelier_config::AtelierConfig;
pub use catalog_config::CatalogConfig;
pub use fallback_config::FallbackConfig;
pub use memory_config::MemoryConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use synthesis_config::SynthesisConfig;
