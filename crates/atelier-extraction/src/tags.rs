//! Tag assembly: common tags, context tags, provenance tags.

use atelier_core::constants::MAX_TAGS;

pub const COMMON_TAGS: &[&str] = &["responsive", "modern", "accessible", "mobile-first", "performant"];
pub const AI_TAGS: &[&str] = &["ai-curated", "orion-enhanced"];

const COMMON_TAGS_USED: usize = 3;

const CONTEXT_TAGS: &[(&str, &[&str])] = &[
    ("modular_systems", &["design-system", "components", "modular"]),
    ("dashboards", &["dashboard", "data-visualization", "analytics"]),
    ("landing_pages", &["landing-page", "conversion", "marketing"]),
    ("portfolios", &["portfolio", "creative", "showcase"]),
    ("ecommerce", &["ecommerce", "shopping", "product-catalog"]),
    ("saas_applications", &["saas", "onboarding", "subscription"]),
];

/// Tags specific to a context key; empty for unknown keys.
pub fn context_tags(context_key: &str) -> &'static [&'static str] {
    CONTEXT_TAGS
        .iter()
        .find(|(key, _)| *key == context_key)
        .map(|(_, tags)| *tags)
        .unwrap_or(&[])
}

/// Common + context + provenance tags, deduplicated in order, capped at eight.
pub fn build_tags(context_key: &str) -> Vec<String> {
    let candidates = COMMON_TAGS
        .iter()
        .take(COMMON_TAGS_USED)
        .chain(context_tags(context_key))
        .chain(AI_TAGS);

    let mut tags: Vec<String> = Vec::with_capacity(MAX_TAGS);
    for tag in candidates {
        if tags.len() == MAX_TAGS {
            break;
        }
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboards_get_eight_tags() {
        assert_eq!(
            build_tags("dashboards"),
            vec![
                "responsive",
                "modern",
                "accessible",
                "dashboard",
                "data-visualization",
                "analytics",
                "ai-curated",
                "orion-enhanced"
            ]
        );
    }

    #[test]
    fn unknown_context_has_common_and_ai_tags_only() {
        assert_eq!(
            build_tags("nope"),
            vec!["responsive", "modern", "accessible", "ai-curated", "orion-enhanced"]
        );
    }
}
