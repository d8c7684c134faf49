//! Assembler: turns a [`TemplateSeed`] into a full [`Template`].
//!
//! Retrieved and synthetic seeds go through the same path. The assembler
//! assigns the id, fills the derived schema fields, clamps list fields to
//! their caps, and finally checks the template's invariants. A failed
//! check is a defect in the pipeline, reported as
//! [`PipelineError::Assembly`].

pub mod schema;

use std::collections::HashSet;
use std::sync::Arc;

use atelier_core::constants::{
    MAX_MODULES, MAX_MOTION_PRESETS, MAX_PRIMARY_COLORS, MAX_TAGS, MIN_MODULES,
    MIN_PRIMARY_COLORS,
};
use atelier_core::errors::PipelineError;
use atelier_core::models::{
    Architecture, DesignProfile, FeatureSet, GenerationMethod, Interaction, LearningData, Palette,
    Provenance, Styling, Template, TemplateMetadata, TemplateSeed,
};
use atelier_core::traits::IEntropySource;
use atelier_extraction::motion::default_motion_presets;
use atelier_extraction::palette::DEFAULT_PALETTE;

/// Seed → template conversion with id generation.
#[derive(Clone)]
pub struct Assembler {
    entropy: Arc<dyn IEntropySource>,
}

impl Assembler {
    pub fn new(entropy: Arc<dyn IEntropySource>) -> Self {
        Self { entropy }
    }

    /// Assemble one seed under a freshly generated id.
    pub fn assemble(&self, seed: TemplateSeed) -> Result<Template, PipelineError> {
        let prefix = match seed.generation_method {
            GenerationMethod::RagEnhanced => "rag",
            GenerationMethod::SyntheticEnhanced => "syn",
        };
        let template = build_template(seed, self.entropy.id(prefix));
        check_invariants(&template)?;
        Ok(template)
    }

    /// Assemble seeds in order, stopping at the first defect.
    pub fn assemble_all(&self, seeds: Vec<TemplateSeed>) -> Result<Vec<Template>, PipelineError> {
        seeds.into_iter().map(|seed| self.assemble(seed)).collect()
    }
}

impl std::fmt::Debug for Assembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assembler").finish_non_exhaustive()
    }
}

/// Build a template from `seed` under `id`. Pure and infallible: list
/// fields are clamped and a short palette is replaced wholesale.
pub fn build_template(seed: TemplateSeed, id: String) -> Template {
    let TemplateSeed {
        features,
        confidence,
        orion_score,
        generation_method,
        context_key,
        characteristics,
        source,
    } = seed;
    let complexity = characteristics.complexity;
    let category = features.category;

    let mut primary = features.palette;
    if primary.len() < MIN_PRIMARY_COLORS {
        primary = schema::to_strings(DEFAULT_PALETTE);
    }
    primary.truncate(MAX_PRIMARY_COLORS);

    let mut motion_presets = features.motion_presets;
    if motion_presets.is_empty() {
        motion_presets = default_motion_presets();
    }
    motion_presets.truncate(MAX_MOTION_PRESETS);

    let mut modules = features.modules;
    modules.truncate(MAX_MODULES);

    let mut tags = dedup(features.tags);
    tags.truncate(MAX_TAGS);

    let capabilities = if features.capabilities.is_empty() {
        schema::to_strings(schema::DEFAULT_CAPABILITIES)
    } else {
        features.capabilities
    };

    let reason = match &source {
        Some(src) => format!(
            "Matched \"{}\" in design memory with {:.2} similarity",
            src.query, src.similarity
        ),
        None => format!(
            "Synthesized from the {} pattern to complete the recommendation set",
            context_key
        ),
    };

    Template {
        id,
        metadata: TemplateMetadata {
            name: features.name,
            industry: schema::industry(&category).to_string(),
            category: category.clone(),
            complexity,
            purpose: characteristics.purpose,
            responsive: true,
            accessibility: true,
            performance: schema::performance(complexity),
        },
        design: DesignProfile {
            summary: features.summary,
            reason,
            confidence,
            orion_score,
            color_scheme: schema::color_scheme(&primary).to_string(),
            visual_style: features.visual_style.clone(),
        },
        styling: Styling {
            palette: Palette {
                gradients: schema::gradients(&primary),
                semantic: schema::semantic_colors(),
                primary,
            },
            typography: schema::typography(&features.visual_style),
            spacing: schema::spacing(),
            layout: schema::layout(&category),
        },
        interaction: Interaction {
            motion_presets,
            animations: schema::animations(complexity),
            micro_interactions: schema::to_strings(schema::MICRO_INTERACTIONS),
            gesture_support: complexity != atelier_core::Complexity::Simple,
        },
        architecture: Architecture {
            modules,
            dependencies: schema::dependencies(&category),
            code_structure: schema::code_structure(complexity).to_string(),
            state_management: schema::state_management(complexity).to_string(),
            data_flow: "unidirectional".to_string(),
        },
        features: FeatureSet {
            tags,
            capabilities,
            integrations: schema::integrations(&category),
            content_types: schema::content_types(&category),
        },
        ai: Provenance {
            source_memory_id: source.as_ref().map(|s| s.memory_id.clone()),
            context_type: context_key,
            generation_method,
            learning_data: LearningData {
                query: source.as_ref().map(|s| s.query.clone()),
                similarity: source.as_ref().map(|s| s.similarity),
                focus_areas: characteristics.focus_areas,
            },
        },
    }
}

/// Verify the schema invariants every emitted template must hold.
pub fn check_invariants(template: &Template) -> Result<(), PipelineError> {
    let violation = |reason: String| {
        Err(PipelineError::Assembly {
            reason: format!("template {}: {reason}", template.id),
        })
    };

    if template.id.is_empty() {
        return violation("empty id".to_string());
    }
    let primary = template.styling.palette.primary.len();
    if !(MIN_PRIMARY_COLORS..=MAX_PRIMARY_COLORS).contains(&primary) {
        return violation(format!("{primary} primary colors"));
    }
    let modules = template.architecture.modules.len();
    if !(MIN_MODULES..=MAX_MODULES).contains(&modules) {
        return violation(format!("{modules} modules"));
    }
    if template.interaction.motion_presets.len() > MAX_MOTION_PRESETS {
        return violation("too many motion presets".to_string());
    }
    if template.features.tags.len() > MAX_TAGS {
        return violation("too many tags".to_string());
    }
    Ok(())
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}
