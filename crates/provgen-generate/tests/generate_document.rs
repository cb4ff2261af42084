use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use provgen_core::{Degree, GenerationInputs, ProvDocument, TotalNodes, validate_document};
use provgen_generate::{
    GenerateOptions, GenerationEngine, GenerationError, read_document, write_document,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn inputs(total_nodes: u32, degree: u32) -> GenerationInputs {
    GenerationInputs::new(
        TotalNodes::new(total_nodes).expect("valid total nodes"),
        Degree::new(degree).expect("valid degree"),
    )
}

fn seeded_engine(seed: u64) -> GenerationEngine {
    GenerationEngine::new(GenerateOptions {
        seed: Some(seed),
        ..GenerateOptions::default()
    })
}

fn relation_counts(document: &ProvDocument) -> (BTreeMap<String, usize>, BTreeMap<String, usize>) {
    let mut entities = BTreeMap::new();
    let mut activities = BTreeMap::new();
    for (_, entity, activity) in document.edges() {
        *entities.entry(entity.to_string()).or_insert(0) += 1;
        *activities.entry(activity.to_string()).or_insert(0) += 1;
    }
    (entities, activities)
}

#[test]
fn degree_zero_produces_no_relations() {
    let result = seeded_engine(1).run(&inputs(10, 0)).expect("generate");

    assert_eq!(result.document.entity.len(), 5);
    assert_eq!(result.document.activity.len(), 5);
    assert!(result.document.was_generated_by.is_empty());
    assert!(result.document.used.is_empty());
    assert!(result.document.was_derived_from.is_empty());
    assert_eq!(result.report.attempts, 0);
}

#[test]
fn degree_one_pairs_every_node_once() {
    let result = seeded_engine(2).run(&inputs(10, 1)).expect("generate");
    let document = &result.document;

    assert_eq!(document.entity.len(), 5);
    assert_eq!(document.activity.len(), 5);
    assert_eq!(document.relation_count(), 5);

    let (entities, activities) = relation_counts(document);
    assert_eq!(entities.len(), 5);
    assert_eq!(activities.len(), 5);
    assert!(entities.values().all(|count| *count == 1));
    assert!(activities.values().all(|count| *count == 1));
}

#[test]
fn degree_three_is_regular_on_both_sides() {
    let result = seeded_engine(3).run(&inputs(20, 3)).expect("generate");
    let document = &result.document;

    assert_eq!(document.entity.len(), 10);
    assert_eq!(document.activity.len(), 10);
    assert_eq!(document.relation_count(), 30);
    assert_eq!(result.report.relation_count(), 30);

    let (entities, activities) = relation_counts(document);
    assert!(entities.values().all(|count| *count == 3));
    assert!(activities.values().all(|count| *count == 3));
}

#[test]
fn no_activity_repeats_an_entity() {
    for seed in 0..10 {
        let result = seeded_engine(seed).run(&inputs(40, 3)).expect("generate");
        let mut pairs = BTreeSet::new();
        for (_, entity, activity) in result.document.edges() {
            assert!(
                pairs.insert((activity.to_string(), entity.to_string())),
                "duplicate edge {activity} -> {entity}"
            );
        }
    }
}

#[test]
fn edge_ids_are_unique_and_documents_validate() {
    let result = seeded_engine(4).run(&inputs(2000, 3)).expect("generate");
    let ids: BTreeSet<&str> = result.document.edges().map(|(id, _, _)| id).collect();

    assert_eq!(ids.len(), 3000);
    validate_document(&result.document).expect("valid document");
}

#[test]
fn generate_is_deterministic_for_a_seed() {
    let a = seeded_engine(99).run(&inputs(100, 2)).expect("generate a");
    let b = seeded_engine(99).run(&inputs(100, 2)).expect("generate b");

    assert_eq!(a.document, b.document);
    assert_eq!(a.report.document_sha256, b.report.document_sha256);
    assert_eq!(a.report.seed, Some(99));
}

#[test]
fn caller_supplied_rng_is_used() {
    let engine = GenerationEngine::default();
    let a = engine
        .run_with_rng(&inputs(30, 2), &mut ChaCha8Rng::seed_from_u64(5))
        .expect("generate a");
    let b = engine
        .run_with_rng(&inputs(30, 2), &mut ChaCha8Rng::seed_from_u64(5))
        .expect("generate b");

    assert_eq!(a.document, b.document);
    assert_eq!(a.report.seed, None);
}

#[test]
fn zero_attempt_budget_fails_cleanly() {
    let engine = GenerationEngine::new(GenerateOptions {
        seed: Some(1),
        max_attempts: 0,
    });
    let err = engine.run(&inputs(10, 2)).expect_err("invalid options");
    assert!(matches!(err, GenerationError::InvalidOptions(_)));
}

#[test]
fn exhausted_attempt_budget_surfaces_infeasible() {
    let mut infeasible = 0;

    for seed in 0..64 {
        let engine = GenerationEngine::new(GenerateOptions {
            seed: Some(seed),
            max_attempts: 1,
        });
        match engine.run(&inputs(10, 3)) {
            Ok(result) => assert_eq!(result.report.attempts, 1),
            Err(GenerationError::Infeasible {
                partite_size,
                degree,
                attempts,
            }) => {
                assert_eq!((partite_size, degree, attempts), (5, 3, 1));
                infeasible += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert!(infeasible > 0, "a single attempt should fail for some seed");
}

#[test]
fn written_document_round_trips() {
    let result = seeded_engine(6).run(&inputs(50, 2)).expect("generate");
    let path = temp_out_dir("round_trip").join("provenance_file.json");

    let bytes = write_document(&path, &result.document).expect("write document");
    assert!(bytes > 0);

    let decoded = read_document(&path).expect("read document");
    assert_eq!(decoded, result.document);

    let raw = fs::read_to_string(&path).expect("read raw");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse raw");
    let keys: Vec<&String> = value.as_object().expect("object").keys().collect();
    assert_eq!(keys.len(), 5);
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("provgen_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
