//! Fixed lookup tables for the template fields that are derived rather
//! than extracted.

use std::collections::BTreeMap;

use atelier_core::models::{
    AnimationSettings, Complexity, LayoutSpec, Performance, Spacing, Typography,
};

const EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

pub const MICRO_INTERACTIONS: &[&str] = &["hover-lift", "button-press", "focus-ring"];

pub const DEFAULT_CAPABILITIES: &[&str] = &["responsive-layout", "accessibility"];

const SEMANTIC_COLORS: &[(&str, &str)] = &[
    ("success", "#10B981"),
    ("warning", "#F59E0B"),
    ("error", "#EF4444"),
    ("info", "#3B82F6"),
];

pub fn industry(category: &str) -> &'static str {
    match category {
        "dashboard" => "analytics",
        "ecommerce" => "retail",
        "portfolio" => "creative",
        "landing" => "marketing",
        _ => "technology",
    }
}

pub fn performance(complexity: Complexity) -> Performance {
    let (load_time, bundle_size, core_web_vitals) = match complexity {
        Complexity::Simple => ("< 1.5s", "~80KB", "good"),
        Complexity::Medium => ("< 2s", "~150KB", "good"),
        Complexity::Complex => ("< 2.5s", "~250KB", "needs-improvement"),
    };
    Performance {
        load_time: load_time.to_string(),
        bundle_size: bundle_size.to_string(),
        core_web_vitals: core_web_vitals.to_string(),
    }
}

pub fn typography(visual_style: &str) -> Typography {
    let (heading, body, size, ratio) = match visual_style {
        "minimal" => ("Inter", "Inter", 16, 1.25),
        "bold" => ("Space Grotesk", "Inter", 17, 1.333),
        "elegant" => ("Playfair Display", "Lato", 16, 1.414),
        "playful" => ("Poppins", "Nunito", 16, 1.3),
        _ => ("Inter", "Roboto", 16, 1.25),
    };
    Typography {
        heading_font: heading.to_string(),
        body_font: body.to_string(),
        base_size_px: size,
        scale_ratio: ratio,
    }
}

pub fn spacing() -> Spacing {
    Spacing {
        base_unit_px: 8,
        scale: vec![4, 8, 12, 16, 24, 32, 48, 64],
    }
}

pub fn layout(category: &str) -> LayoutSpec {
    let (grid, max_width) = match category {
        "dashboard" => ("sidebar-grid", "1440px"),
        "portfolio" => ("masonry", "1200px"),
        "landing" => ("single-column", "1200px"),
        "ecommerce" => ("product-grid", "1280px"),
        _ => ("12-column", "1280px"),
    };
    LayoutSpec {
        grid: grid.to_string(),
        columns: 12,
        max_width: max_width.to_string(),
    }
}

pub fn animations(complexity: Complexity) -> AnimationSettings {
    let duration = match complexity {
        Complexity::Simple => 200,
        Complexity::Medium => 300,
        Complexity::Complex => 400,
    };
    AnimationSettings {
        duration,
        easing: EASING.to_string(),
        respects_reduced_motion: true,
    }
}

pub fn dependencies(category: &str) -> Vec<String> {
    let deps: &[&str] = match category {
        "dashboard" => &["react", "recharts", "framer-motion"],
        "ecommerce" => &["react", "framer-motion", "zustand"],
        _ => &["react", "framer-motion"],
    };
    to_strings(deps)
}

pub fn code_structure(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Simple => "single-page",
        Complexity::Medium => "component-based",
        Complexity::Complex => "feature-sliced",
    }
}

pub fn state_management(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Simple => "local-state",
        Complexity::Medium => "context",
        Complexity::Complex => "global-store",
    }
}

pub fn integrations(category: &str) -> Vec<String> {
    let items: &[&str] = match category {
        "dashboard" => &["rest-api", "websocket"],
        "ecommerce" => &["payments", "inventory-api"],
        "landing" => &["analytics", "email-capture"],
        "portfolio" => &["cms"],
        _ => &["analytics"],
    };
    to_strings(items)
}

pub fn content_types(category: &str) -> Vec<String> {
    let items: &[&str] = match category {
        "dashboard" => &["charts", "tables", "metrics"],
        "ecommerce" => &["products", "reviews"],
        "landing" => &["copy", "testimonials"],
        "portfolio" => &["images", "case-studies"],
        _ => &["text", "images"],
    };
    to_strings(items)
}

pub fn semantic_colors() -> BTreeMap<String, String> {
    SEMANTIC_COLORS
        .iter()
        .map(|(role, hex)| (role.to_string(), hex.to_string()))
        .collect()
}

/// Linear gradients between neighbouring primary colors.
pub fn gradients(primary: &[String]) -> Vec<String> {
    primary
        .windows(2)
        .take(2)
        .zip(["135deg", "90deg"])
        .map(|(pair, angle)| format!("linear-gradient({angle}, {} 0%, {} 100%)", pair[0], pair[1]))
        .collect()
}

/// `"dark"` when the lead color has low relative luminance, else `"light"`.
/// Unparseable colors count as light.
pub fn color_scheme(primary: &[String]) -> &'static str {
    match primary.first().and_then(|hex| luminance(hex)) {
        Some(l) if l < 0.5 => "dark",
        _ => "light",
    }
}

fn luminance(hex: &str) -> Option<f64> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| -> Option<f64> {
        let byte = u8::from_str_radix(digits.get(i..i + 2)?, 16).ok()?;
        Some(f64::from(byte) / 255.0)
    };
    Some(0.2126 * channel(0)? + 0.7152 * channel(2)? + 0.0722 * channel(4)?)
}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
