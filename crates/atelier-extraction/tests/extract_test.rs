use atelier_catalog::PatternCatalog;
use atelier_extraction::name::PLACEHOLDER_NAME;
use atelier_extraction::palette::{DEFAULT_PALETTE, WARM_PALETTE};
use atelier_extraction::summary::PLACEHOLDER_SUMMARY;
use atelier_extraction::{defaults, extract, ExtractionContext};

#[test]
fn hero_section_snippet() {
    let pattern = PatternCatalog::global().lookup("landing_pages");
    let ctx = ExtractionContext::from_pattern(pattern);
    let text = "Built a responsive Hero Section component with #1E293B and #3B82F6 gradients, fade and slide animations";

    let features = extract(text, &ctx);

    assert!(features.name.contains("Hero Section"));
    assert_eq!(features.motion_presets, vec!["fadeIn", "slideInLeft"]);
    // Two colors are not enough: a whole default palette is used.
    assert_eq!(features.palette, DEFAULT_PALETTE);
    assert!(features.summary.starts_with("Built a responsive Hero Section"));
    assert!(features.summary.ends_with("..."));
    assert_eq!(features.modules[0].name, "Hero Section");
    assert!(features.modules.len() >= 2);
    assert!(features.capabilities.contains(&"responsive-layout".to_string()));
}

#[test]
fn dashboard_snippet_with_three_colors() {
    let pattern = PatternCatalog::global().lookup("dashboards");
    let ctx = ExtractionContext::from_pattern(pattern);
    let text = "Dark analytics dashboard with #0B1120, #38BDF8 and #F472B6 accents. \
                A collapsible navigation rail keeps the KPI cards in focus.";

    let features = extract(text, &ctx);

    assert_eq!(features.category, "dashboard");
    assert_eq!(features.palette, vec!["#0B1120", "#38BDF8", "#F472B6"]);
    assert!(features.tags.contains(&"data-visualization".to_string()));
    let names: Vec<_> = features.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Navigation Bar", "Dashboard Panel", "Card Grid"]);
}

#[test]
fn empty_text_yields_documented_defaults() {
    let pattern = PatternCatalog::global().default_pattern();
    let ctx = ExtractionContext::from_pattern(pattern);
    let features = extract("", &ctx);

    assert_eq!(features.name, PLACEHOLDER_NAME);
    assert_eq!(features.summary, PLACEHOLDER_SUMMARY);
    assert_eq!(features.palette, DEFAULT_PALETTE);
    assert_eq!(features.motion_presets, vec!["fadeIn", "slideUp", "scaleIn"]);
    assert!(features.modules.len() >= 2);
    assert_eq!(features.category, "general");
    assert_eq!(features.visual_style, "modern");
    assert_eq!(features, defaults(&ctx));
}

#[test]
fn emoji_text_without_keywords_yields_defaults() {
    let pattern = PatternCatalog::global().default_pattern();
    let ctx = ExtractionContext::from_pattern(pattern);
    let features = extract("🙂🙂🙂 no keywords here", &ctx);

    assert_eq!(features.name, PLACEHOLDER_NAME);
    assert_eq!(features.palette, DEFAULT_PALETTE);
    assert_eq!(features.motion_presets, vec!["fadeIn", "slideUp", "scaleIn"]);
    assert!(features.modules.len() >= 2);
}

#[test]
fn creative_text_selects_warm_theme() {
    let pattern = PatternCatalog::global().lookup("portfolios");
    let ctx = ExtractionContext::from_pattern(pattern);
    let features = extract("A creative studio site with playful parallax", &ctx);
    assert_eq!(features.palette, WARM_PALETTE);
    assert_eq!(features.visual_style, "playful");
    assert_eq!(features.motion_presets, vec!["parallaxScroll"]);
}

#[test]
fn repeated_hex_literals_count_toward_extraction() {
    let ctx = ExtractionContext::from_pattern(PatternCatalog::global().default_pattern());

    let features = extract("swatches #ffffff #FFFFFF #000000", &ctx);

    assert_eq!(features.palette, vec!["#FFFFFF", "#FFFFFF", "#000000"]);
}
