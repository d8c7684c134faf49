//! Property tests for the recommendation pipeline.
//!
//! - fixed output size for any limit and any mix of failing queries
//! - non-increasing orionScore order
//! - bounded list fields and unit-interval scores on every template

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use atelier_catalog::PatternCatalog;
use atelier_core::constants::{MAX_MODULES, MAX_MOTION_PRESETS, MAX_TAGS};
use atelier_core::errors::MemoryError;
use common::{engine_with, result, ScriptedBackend};
use proptest::prelude::*;

const CONTEXTS: &[&str] = &[
    "dashboards",
    "landing_pages",
    "portfolios",
    "ecommerce",
    "saas_applications",
    "modular_systems",
    "not_a_context",
];

/// Per query: `None` fails, `Some(similarities)` answers with those results.
fn query_plan() -> impl Strategy<Value = Vec<Option<Vec<f64>>>> {
    prop::collection::vec(
        prop::option::weighted(0.7, prop::collection::vec(0.0f64..=1.0, 0..5)),
        3,
    )
}

fn backend_for(context_key: &str, plan: &[Option<Vec<f64>>]) -> ScriptedBackend {
    let pattern = PatternCatalog::global().lookup(context_key);
    let mut backend = ScriptedBackend::empty();
    for (q, (query, step)) in pattern.search_queries.iter().zip(plan).enumerate() {
        let answer: Result<_, MemoryError> = match step {
            None => Err(common::network_error()),
            Some(similarities) => Ok(similarities
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    result(
                        &format!("mem-{q}-{i}"),
                        "Responsive dashboard with a header, cards and #112233 #445566 #778899",
                        *s,
                    )
                })
                .collect()),
        };
        backend = backend.with(query, answer);
    }
    backend
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn output_is_sized_ranked_and_bounded(
        context in prop::sample::select(CONTEXTS),
        limit in 1usize..=20,
        plan in query_plan(),
        seed in any::<u64>(),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let engine = engine_with(Arc::new(backend_for(context, &plan)), seed);
        let resp = runtime.block_on(engine.recommend(context, limit));

        prop_assert!(resp.success);
        prop_assert_eq!(resp.templates.len(), limit);
        prop_assert_eq!(resp.metadata.fallback_mode, plan.iter().all(Option::is_none));

        for pair in resp.templates.windows(2) {
            prop_assert!(pair[0].design.orion_score >= pair[1].design.orion_score);
        }

        for t in &resp.templates {
            prop_assert!(t.features.tags.len() <= MAX_TAGS);
            prop_assert!(t.architecture.modules.len() <= MAX_MODULES);
            prop_assert!(t.interaction.motion_presets.len() <= MAX_MOTION_PRESETS);
            prop_assert!((3..=5).contains(&t.styling.palette.primary.len()));
            prop_assert!((0.0..=1.0).contains(&t.design.confidence.value()));
            prop_assert!((0.0..=1.0).contains(&t.design.orion_score.value()));
        }
    }
}
