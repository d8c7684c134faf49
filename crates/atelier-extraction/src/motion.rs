//! Motion preset detection.

use atelier_core::constants::MAX_MOTION_PRESETS;

/// Motion keyword → preset names, checked in this order.
pub const MOTION_MAP: &[(&str, &[&str])] = &[
    ("fade", &["fadeIn", "fadeInUp", "fadeOut"]),
    ("slide", &["slideInLeft", "slideInRight", "slideUp"]),
    ("zoom", &["zoomIn", "zoomOut"]),
    ("bounce", &["bounceIn", "bounceOut"]),
    ("rotate", &["rotateIn", "rotateOut"]),
    ("stagger", &["staggerChildren", "staggerFade"]),
    ("parallax", &["parallaxScroll", "parallaxLayer"]),
    ("morph", &["morphShape", "morphPath"]),
];

/// Used when the text mentions no motion keyword.
pub const DEFAULT_MOTION_PRESETS: [&str; 3] = ["fadeIn", "slideUp", "scaleIn"];

/// First preset of every motion keyword present (substring match on
/// lower-cased text), capped at three.
pub fn motion_presets(lower: &str) -> Vec<String> {
    let presets: Vec<String> = MOTION_MAP
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .filter_map(|(_, presets)| presets.first())
        .take(MAX_MOTION_PRESETS)
        .map(|p| p.to_string())
        .collect();

    if presets.is_empty() {
        return default_motion_presets();
    }
    presets
}

pub fn default_motion_presets() -> Vec<String> {
    DEFAULT_MOTION_PRESETS.iter().map(|p| p.to_string()).collect()
}
