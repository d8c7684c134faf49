use atelier_core::models::{Characteristics, Complexity, Pattern};

struct Entry {
    key: &'static str,
    queries: &'static [&'static str],
    purpose: &'static str,
    complexity: Complexity,
    focus_areas: &'static [&'static str],
}

const ENTRIES: &[Entry] = &[
    Entry {
        key: "modular_systems",
        queries: &[
            "modular design system component library",
            "reusable UI component architecture",
            "design tokens and component patterns",
        ],
        purpose: "scalable component-driven interfaces",
        complexity: Complexity::Medium,
        focus_areas: &["component-library", "design-tokens", "layout-grid"],
    },
    Entry {
        key: "dashboards",
        queries: &[
            "analytics dashboard interface design",
            "data visualization dashboard layout",
            "admin panel metrics UI",
        ],
        purpose: "data monitoring and decision support",
        complexity: Complexity::Complex,
        focus_areas: &["data-visualization", "navigation", "real-time-updates"],
    },
    Entry {
        key: "landing_pages",
        queries: &[
            "high-converting landing page design",
            "hero section call-to-action layout",
            "marketing landing page animations",
        ],
        purpose: "visitor conversion",
        complexity: Complexity::Simple,
        focus_areas: &["hero", "call-to-action", "social-proof"],
    },
    Entry {
        key: "portfolios",
        queries: &[
            "creative portfolio website design",
            "project gallery showcase layout",
            "personal brand portfolio animations",
        ],
        purpose: "showcasing creative work",
        complexity: Complexity::Medium,
        focus_areas: &["gallery", "storytelling", "personal-branding"],
    },
    Entry {
        key: "ecommerce",
        queries: &[
            "ecommerce storefront design",
            "product catalog grid layout",
            "checkout flow user experience",
        ],
        purpose: "online retail and conversion",
        complexity: Complexity::Complex,
        focus_areas: &["product-catalog", "checkout", "search"],
    },
    Entry {
        key: "saas_applications",
        queries: &[
            "saas application onboarding flow",
            "saas pricing page design",
            "web app settings interface",
        ],
        purpose: "software product engagement",
        complexity: Complexity::Complex,
        focus_areas: &["onboarding", "pricing", "settings"],
    },
];

pub(crate) fn patterns() -> impl Iterator<Item = Pattern> {
    ENTRIES.iter().map(|e| Pattern {
        context_key: e.key.to_string(),
        search_queries: e.queries.iter().map(|q| q.to_string()).collect(),
        characteristics: Characteristics {
            purpose: e.purpose.to_string(),
            complexity: e.complexity,
            focus_areas: e.focus_areas.iter().map(|f| f.to_string()).collect(),
        },
    })
}
