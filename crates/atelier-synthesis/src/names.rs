/// Per-context synthetic template names.
const NAMES: &[(&str, &[&str])] = &[
    (
        "modular_systems",
        &["Atomic Design Kit", "Modular Interface System", "Component Foundry", "Building Blocks UI"],
    ),
    (
        "dashboards",
        &["Analytics Command Center", "Metrics Overview", "Operations Control Panel", "Insight Hub"],
    ),
    (
        "landing_pages",
        &["Launch Landing Page", "Conversion Hero Page", "Product Spotlight", "Waitlist Launchpad"],
    ),
    (
        "portfolios",
        &["Creative Showcase", "Studio Portfolio", "Case Study Gallery", "Personal Brand Folio"],
    ),
    (
        "ecommerce",
        &["Modern Storefront", "Product Showcase Shop", "Boutique Commerce", "Quick Checkout Store"],
    ),
    (
        "saas_applications",
        &["SaaS Workspace", "Onboarding Flow Kit", "Subscription Console", "Team Settings Hub"],
    ),
];

const DEFAULT_NAMES: &[&str] = &[
    "Adaptive Interface Template",
    "Versatile Layout System",
    "Balanced Content Framework",
];

/// Names for the first key that has a list, else a generic list. Never empty.
pub(crate) fn names_for(keys: &[&str]) -> &'static [&'static str] {
    keys.iter()
        .find_map(|key| NAMES.iter().find(|(k, _)| k == key).map(|(_, names)| *names))
        .unwrap_or(DEFAULT_NAMES)
}
