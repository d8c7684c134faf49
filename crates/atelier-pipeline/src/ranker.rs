//! Final ordering of assembled templates.

use std::cmp::Ordering;

use atelier_core::Template;

/// Sort descending by `design.orionScore`. The sort is stable, so equal
/// scores keep their input order.
pub fn rank(templates: &mut [Template]) {
    templates.sort_by(|a, b| {
        b.design
            .orion_score
            .partial_cmp(&a.design.orion_score)
            .unwrap_or(Ordering::Equal)
    });
}
