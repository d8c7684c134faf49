use std::io::Write;

use atelier_catalog::PatternCatalog;
use atelier_core::config::CatalogConfig;
use atelier_core::errors::CatalogError;
use atelier_core::Complexity;
use proptest::prelude::*;

#[test]
fn builtin_catalog_has_default_and_known_contexts() {
    let catalog = PatternCatalog::global();
    for key in [
        "modular_systems",
        "dashboards",
        "landing_pages",
        "portfolios",
        "ecommerce",
        "saas_applications",
    ] {
        assert!(catalog.contains(key), "missing {key}");
        assert!(!catalog.lookup(key).search_queries.is_empty());
    }
    assert_eq!(catalog.default_pattern().context_key, "modular_systems");
}

#[test]
fn unknown_context_resolves_to_default_pattern() {
    let pattern = atelier_catalog::lookup("unknown_context");
    assert_eq!(pattern.context_key, "modular_systems");
    assert_eq!(
        pattern.characteristics,
        PatternCatalog::global().default_pattern().characteristics
    );
}

#[test]
fn every_builtin_pattern_has_at_least_two_focus_areas() {
    let catalog = PatternCatalog::builtin();
    for key in catalog.context_keys() {
        assert!(catalog.lookup(key).characteristics.focus_areas.len() >= 2, "{key}");
    }
}

const OVERRIDE_TOML: &str = r#"
[[patterns]]
contextKey = "dashboards"
searchQueries = ["fintech dashboard"]

[patterns.characteristics]
purpose = "portfolio tracking"
complexity = "medium"
focusAreas = ["charts", "tables"]

[[patterns]]
contextKey = "blogs"
searchQueries = ["editorial blog layout", "long-form reading typography"]

[patterns.characteristics]
purpose = "long-form reading"
complexity = "simple"
focusAreas = ["typography"]
"#;

#[test]
fn overrides_replace_and_extend() {
    let overrides = PatternCatalog::from_toml(OVERRIDE_TOML).unwrap();
    let catalog = PatternCatalog::builtin().with_overrides(overrides).unwrap();

    let dashboards = catalog.lookup("dashboards");
    assert_eq!(dashboards.search_queries, vec!["fintech dashboard".to_string()]);
    assert_eq!(dashboards.characteristics.complexity, Complexity::Medium);
    assert!(catalog.contains("blogs"));
    // The global catalog is untouched.
    assert_ne!(
        PatternCatalog::global().lookup("dashboards").search_queries,
        dashboards.search_queries
    );
}

#[test]
fn override_without_queries_is_rejected() {
    let toml = r#"
[[patterns]]
contextKey = "empty"
searchQueries = []

[patterns.characteristics]
purpose = "nothing"
complexity = "simple"
focusAreas = []
"#;
    let overrides = PatternCatalog::from_toml(toml).unwrap();
    let err = PatternCatalog::builtin().with_overrides(overrides).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyQueries { context_key } if context_key == "empty"));
}

#[test]
fn override_with_a_blank_query_is_rejected() {
    let toml = r#"
[[patterns]]
contextKey = "blogs"
searchQueries = ["", "blog layout"]

[patterns.characteristics]
purpose = "long-form reading"
complexity = "simple"
focusAreas = ["typography"]
"#;
    let overrides = PatternCatalog::from_toml(toml).unwrap();
    let err = PatternCatalog::builtin().with_overrides(overrides).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::BlankQuery { context_key, position: 0 } if context_key == "blogs"
    ));

    let whitespace_only = PatternCatalog::from_toml(&toml.replace(r#"["", "#, r#"["  ", "#)).unwrap();
    assert!(PatternCatalog::builtin().with_overrides(whitespace_only).is_err());
}

#[test]
fn load_reads_override_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(OVERRIDE_TOML.as_bytes()).unwrap();
    let config = CatalogConfig {
        path: Some(file.path().display().to_string()),
    };
    let catalog = PatternCatalog::load(&config).unwrap();
    assert!(catalog.contains("blogs"));
    assert_eq!(catalog.len(), PatternCatalog::builtin().len() + 1);
}

#[test]
fn load_reports_missing_file() {
    let config = CatalogConfig {
        path: Some("/no/such/catalog.toml".to_string()),
    };
    assert!(matches!(
        PatternCatalog::load(&config),
        Err(CatalogError::Io { .. })
    ));
}

proptest! {
    #[test]
    fn lookup_is_total(key in ".{0,64}") {
        let pattern = PatternCatalog::global().lookup(&key);
        prop_assert!(!pattern.search_queries.is_empty());
    }
}
