//! Keyword classification: category, visual style, capabilities.

use crate::keywords::{contains_any, contains_term};

pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_VISUAL_STYLE: &str = "modern";

const CATEGORIES: &[(&[&str], &str)] = &[
    (&["dashboard"], "dashboard"),
    (&["landing"], "landing"),
    (&["portfolio"], "portfolio"),
    (&["ecommerce", "e-commerce", "shop", "storefront"], "ecommerce"),
];

const STYLES: &[&str] = &["minimal", "bold", "elegant", "playful"];

const CAPABILITIES: &[(&[&str], &str)] = &[
    (&["responsive"], "responsive-layout"),
    (&["accessible", "accessibility", "a11y"], "accessibility"),
    (&["dark mode", "dark-mode", "dark theme"], "dark-mode"),
    (&["real-time", "realtime", "live"], "real-time-updates"),
    (&["animation", "animated"], "motion-design"),
    (&["interactive"], "interactive-elements"),
    (&["filter", "filtering"], "filtering"),
    (&["drag", "drag-and-drop"], "drag-and-drop"),
    (&["chart", "graph"], "data-visualization"),
];

/// First matching category, or [`DEFAULT_CATEGORY`].
pub fn category(lower: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(terms, _)| contains_any(lower, terms))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// First matching visual style, or [`DEFAULT_VISUAL_STYLE`].
pub fn visual_style(lower: &str) -> &'static str {
    STYLES
        .iter()
        .find(|style| contains_term(lower, style))
        .copied()
        .unwrap_or(DEFAULT_VISUAL_STYLE)
}

/// Every capability whose keywords appear, in table order.
pub fn capabilities(lower: &str) -> Vec<String> {
    CAPABILITIES
        .iter()
        .filter(|(terms, _)| contains_any(lower, terms))
        .map(|(_, capability)| capability.to_string())
        .collect()
}
