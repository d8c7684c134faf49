//! Error handling for Atelier.
//! One error enum per subsystem, `thiserror` only, aggregated by [`AtelierError`].

pub mod catalog_error;
pub mod config_error;
pub mod memory_error;
pub mod pipeline_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use memory_error::MemoryError;
pub use pipeline_error::PipelineError;

/// Top-level error for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum AtelierError {
    #[error("memory error: {0}")]
    Memory(#[from] MemoryError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

pub type AtelierResult<T> = Result<T, AtelierError>;
