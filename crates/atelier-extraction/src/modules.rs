//! Structural module detection, padded from the pattern's focus areas.

use atelier_core::constants::{MAX_MODULES, MIN_MODULES};
use atelier_core::models::{Emphasis, Module, ModuleType};

use crate::keywords::contains_term;

struct Detector {
    keyword: &'static str,
    name: &'static str,
    module_type: ModuleType,
    emphasis: Emphasis,
}

const DETECTORS: &[Detector] = &[
    Detector { keyword: "header", name: "Header", module_type: ModuleType::Layout, emphasis: Emphasis::High },
    Detector { keyword: "hero", name: "Hero Section", module_type: ModuleType::Visual, emphasis: Emphasis::High },
    Detector { keyword: "navigation", name: "Navigation Bar", module_type: ModuleType::Navigation, emphasis: Emphasis::Medium },
    Detector { keyword: "gallery", name: "Media Gallery", module_type: ModuleType::Visual, emphasis: Emphasis::Medium },
    Detector { keyword: "form", name: "Form", module_type: ModuleType::Functional, emphasis: Emphasis::Medium },
    Detector { keyword: "dashboard", name: "Dashboard Panel", module_type: ModuleType::Functional, emphasis: Emphasis::High },
    Detector { keyword: "card", name: "Card Grid", module_type: ModuleType::Content, emphasis: Emphasis::Medium },
    Detector { keyword: "search", name: "Search Bar", module_type: ModuleType::Functional, emphasis: Emphasis::Low },
    Detector { keyword: "footer", name: "Footer", module_type: ModuleType::Layout, emphasis: Emphasis::Low },
];

/// Focus area → canned module (name, type).
const FOCUS_MODULES: &[(&str, &str, ModuleType)] = &[
    ("component-library", "Component Library", ModuleType::Layout),
    ("design-tokens", "Token Showcase", ModuleType::Visual),
    ("layout-grid", "Responsive Grid", ModuleType::Layout),
    ("data-visualization", "Chart Panel", ModuleType::Visual),
    ("navigation", "Sidebar Navigation", ModuleType::Navigation),
    ("real-time-updates", "Live Activity Feed", ModuleType::Functional),
    ("hero", "Hero Banner", ModuleType::Visual),
    ("call-to-action", "Call To Action", ModuleType::Interactive),
    ("social-proof", "Testimonials Strip", ModuleType::Content),
    ("gallery", "Project Gallery", ModuleType::Visual),
    ("storytelling", "Story Timeline", ModuleType::Content),
    ("personal-branding", "About Intro", ModuleType::Content),
    ("product-catalog", "Product Grid", ModuleType::Content),
    ("checkout", "Checkout Flow", ModuleType::Functional),
    ("search", "Search Bar", ModuleType::Functional),
    ("onboarding", "Onboarding Steps", ModuleType::Interactive),
    ("pricing", "Pricing Table", ModuleType::Content),
    ("settings", "Settings Panel", ModuleType::Functional),
];

/// Last-resort padding when the pattern has too few focus areas.
const GENERIC_MODULES: &[(&str, ModuleType)] = &[
    ("Page Header", ModuleType::Layout),
    ("Content Section", ModuleType::Content),
];

/// Entrance animation for each module type.
pub fn animation_for(module_type: ModuleType) -> &'static str {
    match module_type {
        ModuleType::Layout => "fadeIn",
        ModuleType::Navigation => "slideDown",
        ModuleType::Visual => "zoomIn",
        ModuleType::Content => "fadeInUp",
        ModuleType::Functional => "slideInRight",
        ModuleType::Interactive => "bounceIn",
    }
}

/// Modules for every structural keyword in `lower`, padded to at least two
/// from `focus_areas`, capped at four.
pub fn extract_modules(lower: &str, focus_areas: &[String]) -> Vec<Module> {
    let mut modules: Vec<Module> = DETECTORS
        .iter()
        .filter(|d| contains_term(lower, d.keyword))
        .map(|d| Module {
            name: d.name.to_string(),
            module_type: d.module_type,
            description: format!("{} detected in retrieved design memory", d.name),
            emphasis: d.emphasis,
            animation: animation_for(d.module_type).to_string(),
            customizable: true,
            ai_generated: true,
            orion_extracted: Some(true),
        })
        .collect();

    if modules.len() < MIN_MODULES {
        for area in focus_areas {
            push_unique(&mut modules, focus_module(area));
        }
    }
    if modules.len() < MIN_MODULES {
        for (name, module_type) in GENERIC_MODULES {
            push_unique(
                &mut modules,
                padded(name.to_string(), *module_type, "general layout".to_string()),
            );
        }
    }

    modules.truncate(MAX_MODULES);
    modules
}

/// The canned module a focus area contributes.
pub fn focus_module(area: &str) -> Module {
    match FOCUS_MODULES.iter().find(|(key, _, _)| *key == area) {
        Some((_, name, module_type)) => padded(name.to_string(), *module_type, area.to_string()),
        None => padded(humanize(area), ModuleType::Content, area.to_string()),
    }
}

fn padded(name: String, module_type: ModuleType, area: String) -> Module {
    Module {
        description: format!("{name} suggested by the {area} focus area"),
        name,
        module_type,
        emphasis: Emphasis::Medium,
        animation: animation_for(module_type).to_string(),
        customizable: true,
        ai_generated: true,
        orion_extracted: None,
    }
}

fn push_unique(modules: &mut Vec<Module>, module: Module) {
    if !modules.iter().any(|m| m.name == module.name) {
        modules.push(module);
    }
}

/// "real-time_updates" → "Real Time Updates".
fn humanize(area: &str) -> String {
    let words: Vec<String> = area
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        return "Content Block".to_string();
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn detected_modules_carry_type_animation() {
        let modules = extract_modules("a hero with a search form", &[]);
        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Hero Section", "Form", "Search Bar"]);
        assert_eq!(modules[0].animation, "zoomIn");
        assert_eq!(modules[1].animation, "slideInRight");
        assert!(modules.iter().all(|m| m.orion_extracted == Some(true)));
    }

    #[test]
    fn single_detection_is_padded_from_focus_areas() {
        let modules = extract_modules("a footer", &areas(&["gallery", "storytelling"]));
        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Footer", "Project Gallery", "Story Timeline"]);
        assert_eq!(modules[1].orion_extracted, None);
    }

    #[test]
    fn capped_at_four() {
        let text = "header hero navigation gallery form dashboard card search footer";
        assert_eq!(extract_modules(text, &[]).len(), MAX_MODULES);
    }

    #[test]
    fn empty_focus_areas_still_reach_two() {
        let modules = extract_modules("", &[]);
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].name, "Page Header");
    }

    #[test]
    fn unknown_focus_area_is_humanized() {
        let module = focus_module("real-time_charts");
        assert_eq!(module.name, "Real Time Charts");
        assert_eq!(module.module_type, ModuleType::Content);
        assert_eq!(focus_module("--").name, "Content Block");
    }

    #[test]
    fn format_is_not_a_form() {
        let modules = extract_modules("markdown format support", &areas(&["pricing", "settings"]));
        assert!(modules.iter().all(|m| m.name != "Form"));
    }
}
