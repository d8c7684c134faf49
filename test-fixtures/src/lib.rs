//! Test fixture loader for Atelier retrieval snapshots.
//!
//! A snapshot scripts what the memory service answers for each query of a
//! context, so pipeline tests can replay realistic retrieval without a
//! running service.

use std::path::PathBuf;

use atelier_core::RetrievalResult;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Scripted memory-service behaviour for one context.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalSnapshot {
    pub context_key: String,
    #[serde(default)]
    pub description: String,
    pub queries: Vec<QueryScript>,
}

/// What the service does for one query: answer with `results`, or fail.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryScript {
    pub query: String,
    #[serde(default)]
    pub results: Vec<RetrievalResult>,
    #[serde(default)]
    pub fail: bool,
}

impl RetrievalSnapshot {
    /// Total results across every non-failing query.
    pub fn result_count(&self) -> usize {
        self.queries
            .iter()
            .filter(|q| !q.fail)
            .map(|q| q.results.len())
            .sum()
    }
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // Walk up from whichever crate is running its tests.
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load `retrieval/<name>.json`.
pub fn load_retrieval_snapshot(name: &str) -> RetrievalSnapshot {
    load_fixture(&format!("retrieval/{name}.json"))
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn every_retrieval_snapshot_parses() {
        let files = list_fixtures("retrieval");
        assert!(!files.is_empty());
        for path in files {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap().to_string();
            let snapshot = load_retrieval_snapshot(&stem);
            assert!(!snapshot.queries.is_empty(), "{stem} has no queries");
        }
    }

    #[test]
    fn sparse_snapshot_counts_only_successful_results() {
        let snapshot = load_retrieval_snapshot("portfolios_sparse");
        assert_eq!(snapshot.context_key, "portfolios");
        assert_eq!(snapshot.result_count(), 2);
    }
}
