use atelier_catalog::PatternCatalog;
use atelier_core::constants::{MAX_MODULES, MAX_MOTION_PRESETS, MAX_PRIMARY_COLORS, MAX_TAGS, MIN_PRIMARY_COLORS};
use atelier_extraction::{extract, ExtractionContext};
use proptest::prelude::*;

fn context_keys() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "modular_systems",
        "dashboards",
        "landing_pages",
        "portfolios",
        "ecommerce",
        "saas_applications",
    ])
    .prop_map(String::from)
}

// ── Extraction is total and bounded ───────────────────────────────────────

proptest! {
    #[test]
    fn extraction_is_total_and_bounded(text in ".{0,400}", key in context_keys()) {
        let pattern = PatternCatalog::global().lookup(&key);
        let features = extract(&text, &ExtractionContext::from_pattern(pattern));

        prop_assert!(!features.name.is_empty());
        prop_assert!(!features.summary.is_empty());
        prop_assert!(features.palette.len() >= MIN_PRIMARY_COLORS);
        prop_assert!(features.palette.len() <= MAX_PRIMARY_COLORS);
        prop_assert!(!features.motion_presets.is_empty());
        prop_assert!(features.motion_presets.len() <= MAX_MOTION_PRESETS);
        prop_assert!(features.modules.len() >= 2);
        prop_assert!(features.modules.len() <= MAX_MODULES);
        prop_assert!(features.tags.len() <= MAX_TAGS);
    }

    #[test]
    fn extraction_bounded_on_keyword_heavy_text(
        words in prop::collection::vec(
            prop::sample::select(vec![
                "fade", "slide", "zoom", "bounce", "rotate", "stagger", "parallax", "morph",
                "header", "hero", "navigation", "gallery", "form", "dashboard", "card",
                "search", "footer", "#A1B2C3", "#ffffff", "#000000", "#123ABC", "#FEDCBA",
            ]),
            0..40,
        )
    ) {
        let text = words.join(" ");
        let pattern = PatternCatalog::global().default_pattern();
        let features = extract(&text, &ExtractionContext::from_pattern(pattern));

        prop_assert!(features.palette.len() >= MIN_PRIMARY_COLORS);
        prop_assert!(features.palette.len() <= MAX_PRIMARY_COLORS);
        prop_assert!(features.motion_presets.len() <= MAX_MOTION_PRESETS);
        prop_assert!(features.modules.len() <= MAX_MODULES);
    }
}

// ── Extraction is idempotent ──────────────────────────────────────────────

proptest! {
    #[test]
    fn extraction_is_idempotent(text in ".{0,300}", key in context_keys()) {
        let pattern = PatternCatalog::global().lookup(&key);
        let ctx = ExtractionContext::from_pattern(pattern);
        prop_assert_eq!(extract(&text, &ctx), extract(&text, &ctx));
    }

    #[test]
    fn tags_are_unique(key in ".{0,20}") {
        let pattern = PatternCatalog::global().lookup(&key);
        let features = extract("", &ExtractionContext::from_pattern(pattern));
        let mut seen = std::collections::HashSet::new();
        for tag in &features.tags {
            prop_assert!(seen.insert(tag.clone()), "duplicate tag {}", tag);
        }
    }
}
