//! # atelier-observability
//!
//! Tracing subscriber setup and the structured events the pipeline emits.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
