use atelier_core::errors::PipelineError;
use atelier_core::models::*;
use serde_json::json;

fn sample_module() -> Module {
    Module {
        name: "Hero Banner".to_string(),
        module_type: ModuleType::Visual,
        description: "Full-bleed hero".to_string(),
        emphasis: Emphasis::High,
        animation: "zoomIn".to_string(),
        customizable: true,
        ai_generated: true,
        orion_extracted: None,
    }
}

#[test]
fn module_serializes_with_wire_names() {
    let value = serde_json::to_value(sample_module()).unwrap();
    assert_eq!(value["type"], "visual");
    assert_eq!(value["aiGenerated"], true);
    assert_eq!(value["emphasis"], "high");
    assert!(value.get("orionExtracted").is_none());
}

#[test]
fn generation_method_uses_kebab_case() {
    assert_eq!(
        serde_json::to_value(GenerationMethod::RagEnhanced).unwrap(),
        json!("rag-enhanced")
    );
    assert_eq!(
        serde_json::to_value(GenerationMethod::SyntheticEnhanced).unwrap(),
        json!("synthetic-enhanced")
    );
}

#[test]
fn pattern_deserializes_from_camel_case() {
    let pattern: Pattern = serde_json::from_value(json!({
        "contextKey": "dashboards",
        "searchQueries": ["analytics dashboard layout"],
        "characteristics": {
            "purpose": "data monitoring",
            "complexity": "complex",
            "focusAreas": ["data-visualization"]
        }
    }))
    .unwrap();
    assert_eq!(pattern.context_key, "dashboards");
    assert_eq!(pattern.characteristics.complexity, Complexity::Complex);
}

#[test]
fn request_limit_resolution() {
    let req = RecommendationRequest::new("dashboards");
    assert_eq!(req.validated_limit(6, 48).unwrap(), 6);

    let req = RecommendationRequest::new("dashboards").with_limit(3);
    assert_eq!(req.validated_limit(6, 48).unwrap(), 3);

    let err = RecommendationRequest::new("x")
        .with_limit(0)
        .validated_limit(6, 48)
        .unwrap_err();
    assert!(matches!(err, PipelineError::InvalidLimit { limit: 0, max: 48 }));

    assert!(RecommendationRequest::new("x")
        .with_limit(49)
        .validated_limit(6, 48)
        .is_err());
}

#[test]
fn request_limit_is_optional_on_the_wire() {
    let req: RecommendationRequest =
        serde_json::from_value(json!({ "contextKey": "portfolios" })).unwrap();
    assert_eq!(req.limit, None);
}
