//! # atelier-catalog
//!
//! Maps a context key to the [`Pattern`] that drives retrieval and synthesis.
//! The built-in catalog is constructed once per process and never mutated;
//! lookups never fail and never perform I/O.

mod builtin;
pub mod catalog;

pub use catalog::PatternCatalog;

use atelier_core::Pattern;

/// Look up a pattern in the process-wide built-in catalog.
pub fn lookup(context_key: &str) -> &'static Pattern {
    PatternCatalog::global().lookup(context_key)
}
