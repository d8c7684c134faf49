//! # atelier-extraction
//!
//! Derives template features from a single retrieved text snippet.
//!
//! Every function here is pure and total: any input string, including the
//! empty string, yields a well-formed result by falling through to fixed
//! defaults. There is no randomness, so extracting the same text twice
//! gives identical output.

pub mod classify;
mod keywords;
pub mod modules;
pub mod motion;
pub mod name;
pub mod palette;
pub mod summary;
pub mod tags;

use atelier_core::models::{ExtractedFeatures, Pattern};

/// The active pattern's view that extraction needs.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionContext<'a> {
    pub context_key: &'a str,
    pub focus_areas: &'a [String],
}

impl<'a> ExtractionContext<'a> {
    pub fn new(context_key: &'a str, focus_areas: &'a [String]) -> Self {
        Self {
            context_key,
            focus_areas,
        }
    }

    pub fn from_pattern(pattern: &'a Pattern) -> Self {
        Self::new(
            &pattern.context_key,
            &pattern.characteristics.focus_areas,
        )
    }
}

/// Run every extractor over `text`.
pub fn extract(text: &str, ctx: &ExtractionContext<'_>) -> ExtractedFeatures {
    let lower = text.to_lowercase();

    ExtractedFeatures {
        name: name::extract_name(text),
        summary: summary::summarize(text),
        palette: palette::extract_palette(text, &lower),
        motion_presets: motion::motion_presets(&lower),
        modules: modules::extract_modules(&lower, ctx.focus_areas),
        tags: tags::build_tags(ctx.context_key),
        category: classify::category(&lower).to_string(),
        visual_style: classify::visual_style(&lower).to_string(),
        capabilities: classify::capabilities(&lower),
    }
}

/// The features extraction produces when there is nothing to extract.
/// Synthetic templates start from these.
pub fn defaults(ctx: &ExtractionContext<'_>) -> ExtractedFeatures {
    extract("", ctx)
}
