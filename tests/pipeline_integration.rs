//! End-to-end pipeline tests against the recognizer wire format.

use medner::{
    Annotation, Annotator, EntityGroup, Error, MockRecognizer, Pipeline, PipelineConfig,
    RawEntity, TermTypes,
};

const TEXT: &str = "Patient has chest pain and pneumonia";

fn raw(group: &str, word: &str, start: usize, end: usize, score: f64) -> RawEntity {
    RawEntity {
        entity_group: group.to_string(),
        word: word.to_string(),
        start,
        end,
        score,
    }
}

fn recognizer_output() -> Vec<RawEntity> {
    vec![
        raw("BIOLOGICAL_STRUCTURE", "chest", 12, 17, 0.95),
        raw("SIGN_SYMPTOM", "pain", 18, 22, 0.9),
        raw("DISEASE_DISORDER", "pneumonia", 27, 36, 0.97),
    ]
}

#[test]
fn chest_pain_scenario_produces_combined_and_disease() {
    let pipeline = Pipeline::new(PipelineConfig::combining(TermTypes {
        symptom: true,
        disease: true,
        ..TermTypes::default()
    }));

    let annotation = pipeline.process(TEXT, recognizer_output()).unwrap();

    assert_eq!(annotation.text, TEXT);
    assert_eq!(annotation.entities.len(), 2);

    let combined = &annotation.entities[0];
    assert_eq!(combined.group, EntityGroup::CombinedBioSymptom);
    assert_eq!(combined.text, "chest pain");
    assert_eq!((combined.start, combined.end), (12, 22));
    assert!((combined.score - 0.925).abs() < 1e-12);
    let (first, second) = *combined.components.clone().expect("combined entity components");
    assert_eq!(first.text, "chest");
    assert_eq!(second.text, "pain");

    let disease = &annotation.entities[1];
    assert_eq!(disease.group, EntityGroup::DiseaseDisorder);
    assert_eq!((disease.start, disease.end), (27, 36));
    assert!((disease.score - 0.97).abs() < 1e-12);
}

#[test]
fn full_request_shapes_deserialize_from_json() {
    // caller options exactly as the HTTP layer would forward them, including
    // a flag this version does not know about
    let config: PipelineConfig = serde_json::from_str(
        r#"{
            "combineBioStructure": true,
            "termTypes": {"symptom": true, "disease": true, "allEconomicsTerms": true}
        }"#,
    )
    .unwrap();
    assert!(config.combine_bio_structure);
    assert!(config.term_types.symptom);
    assert!(!config.term_types.all_medical_terms);

    let rows: Vec<RawEntity> = serde_json::from_str(
        r#"[
            {"entity_group": "BIOLOGICAL_STRUCTURE", "word": "chest", "start": 12, "end": 17, "score": 0.95},
            {"entity_group": "SIGN_SYMPTOM", "word": "pain", "start": 18, "end": 22, "score": 0.9}
        ]"#,
    )
    .unwrap();

    let annotation = Pipeline::new(config).process(TEXT, rows).unwrap();
    assert_eq!(annotation.terms(), vec!["chest pain"]);
}

#[test]
fn annotation_serializes_in_wire_shape() {
    let pipeline = Pipeline::new(PipelineConfig::combining(TermTypes::all()));
    let annotation = pipeline.process(TEXT, recognizer_output()).unwrap();

    let json = serde_json::to_value(&annotation).unwrap();
    assert_eq!(json["text"], TEXT);
    let entities = json["entities"].as_array().unwrap();
    assert_eq!(entities[0]["entity_group"], "COMBINED_BIO_SYMPTOM");
    assert_eq!(entities[0]["word"], "chest pain");
    assert_eq!(entities[0]["original_entities"][0]["word"], "chest");
    assert_eq!(entities[1]["entity_group"], "DISEASE_DISORDER");
    assert!(entities[1].get("original_entities").is_none());

    let back: Annotation = serde_json::from_value(json).unwrap();
    assert_eq!(back, annotation);
}

#[test]
fn empty_recognizer_output_round_trips_text() {
    let annotator = Annotator::new(
        Box::new(MockRecognizer::new("empty")),
        PipelineConfig::combining(TermTypes::all()),
    );
    let annotation = annotator.annotate(TEXT).unwrap();
    assert_eq!(annotation.text, TEXT);
    assert!(annotation.entities.is_empty());
    assert!(annotation.terms().is_empty());
}

#[test]
fn stale_surface_form_is_rejected_with_offending_entity() {
    let pipeline = Pipeline::new(PipelineConfig::default());
    let err = pipeline
        .process(TEXT, vec![raw("SIGN_SYMPTOM", "ache", 18, 22, 0.9)])
        .unwrap_err();
    match err {
        Error::SurfaceMismatch {
            found,
            expected,
            start,
            end,
        } => {
            assert_eq!(found, "ache");
            assert_eq!(expected, "pain");
            assert_eq!((start, end), (18, 22));
        }
        other => panic!("expected SurfaceMismatch, got {other:?}"),
    }
}

#[test]
fn span_past_text_end_is_rejected() {
    let pipeline = Pipeline::new(PipelineConfig::default());
    let err = pipeline
        .process("short", vec![raw("SIGN_SYMPTOM", "short", 0, 50, 0.9)])
        .unwrap_err();
    assert_eq!(
        err,
        Error::SpanOutOfBounds {
            start: 0,
            end: 50,
            len: 5
        }
    );
}

#[test]
fn unknown_recognizer_labels_pass_through_with_all_terms() {
    let pipeline = Pipeline::new(PipelineConfig {
        combine_bio_structure: false,
        term_types: TermTypes::all(),
    });
    let annotation = pipeline
        .process(TEXT, vec![raw("LAB_VALUE", "chest", 12, 17, 0.6)])
        .unwrap();
    assert_eq!(annotation.entities.len(), 1);
    assert_eq!(
        annotation.entities[0].group,
        EntityGroup::Other("LAB_VALUE".to_string())
    );
}

#[test]
fn character_offsets_survive_multibyte_text() {
    // recognizer offsets count characters; "é" must not shift the span
    let text = "Douleur à la tête et fièvre";
    let pipeline = Pipeline::new(PipelineConfig::combining(TermTypes::all()));
    let annotation = pipeline
        .process(
            text,
            vec![
                raw("BIOLOGICAL_STRUCTURE", "tête", 13, 17, 0.92),
                raw("SIGN_SYMPTOM", "fièvre", 21, 27, 0.88),
            ],
        )
        .unwrap();

    assert_eq!(annotation.entities.len(), 1);
    assert_eq!(annotation.entities[0].group, EntityGroup::CombinedBioSymptom);
    assert_eq!(annotation.entities[0].text, "tête et fièvre");
}

#[test]
fn recognizer_failure_propagates() {
    struct FailingRecognizer;
    impl medner::Recognizer for FailingRecognizer {
        fn recognize(&self, _text: &str) -> medner::Result<Vec<RawEntity>> {
            Err(Error::recognition("model endpoint unreachable"))
        }
        fn name(&self) -> &'static str {
            "failing"
        }
    }

    let annotator = Annotator::new(Box::new(FailingRecognizer), PipelineConfig::default());
    let err = annotator.annotate(TEXT).unwrap_err();
    assert!(matches!(err, Error::Recognition(_)));
}
