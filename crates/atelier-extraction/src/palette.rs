//! Primary palette extraction with themed fallbacks.

use std::sync::LazyLock;

use atelier_core::constants::{EXTRACTED_PALETTE_LEN, MIN_PRIMARY_COLORS};
use regex::Regex;

use crate::keywords::contains_any;

static RE_HEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{6}\b").ok());

pub const COOL_PALETTE: &[&str] = &["#0F172A", "#1E40AF", "#3B82F6", "#94A3B8"];
pub const WARM_PALETTE: &[&str] = &["#7C2D12", "#EA580C", "#F59E0B", "#FDE68A"];
pub const COMMERCE_PALETTE: &[&str] = &["#111827", "#059669", "#10B981", "#F3F4F6"];
pub const DEFAULT_PALETTE: &[&str] = &["#1E293B", "#6366F1", "#8B5CF6", "#F8FAFC"];

/// Keyword sets and the palette they select, checked in order.
const THEMES: &[(&[&str], &[&str])] = &[
    (&["dashboard", "analytics"], COOL_PALETTE),
    (&["creative", "art"], WARM_PALETTE),
    (&["ecommerce", "e-commerce", "shop", "store"], COMMERCE_PALETTE),
];

/// Every `#RRGGBB` literal in order of appearance, upper-cased. Repeats
/// are kept: each literal counts.
pub fn hex_colors(text: &str) -> Vec<String> {
    let Some(re) = RE_HEX.as_ref() else {
        return Vec::new();
    };
    re.find_iter(text)
        .map(|m| m.as_str().to_uppercase())
        .collect()
}

/// The first four literals when at least three are found, otherwise a
/// whole themed palette. Extracted and default colors are never mixed.
pub fn extract_palette(text: &str, lower: &str) -> Vec<String> {
    let mut colors = hex_colors(text);
    if colors.len() >= MIN_PRIMARY_COLORS {
        colors.truncate(EXTRACTED_PALETTE_LEN);
        return colors;
    }
    themed_palette(lower).iter().map(|c| c.to_string()).collect()
}

/// Palette selected by keyword presence in lower-cased text.
pub fn themed_palette(lower: &str) -> &'static [&'static str] {
    THEMES
        .iter()
        .find(|(keywords, _)| contains_any(lower, keywords))
        .map(|(_, palette)| *palette)
        .unwrap_or(DEFAULT_PALETTE)
}
