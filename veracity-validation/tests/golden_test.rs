//! Golden dataset tests: each fixture carries input content + sources and
//! the expected validation outcome.

use serde_json::Value;
use test_fixtures::load_fixture_value;
use veracity_core::models::{ValidationMetadata, ValidationResult};
use veracity_validation::ValidationEngine;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run_fixture(fixture: &Value) -> ValidationResult {
    let content = fixture["input"]["content"]
        .as_str()
        .expect("fixture must have input.content");
    let sources: Vec<String> = fixture["input"]["sources"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default();

    let engine = ValidationEngine::default();
    engine.validate(content, &ValidationMetadata::with_sources(sources))
}

fn flag_codes(result: &ValidationResult) -> Vec<String> {
    result
        .validation_flags
        .iter()
        .map(|f| f.to_string())
        .collect()
}

fn assert_flag_expectations(result: &ValidationResult, expected: &Value) {
    let codes = flag_codes(result);
    if let Some(include) = expected["flags_include"].as_array() {
        for flag in include {
            let flag = flag.as_str().unwrap();
            assert!(
                codes.iter().any(|c| c == flag),
                "expected flag {} in {:?}",
                flag,
                codes
            );
        }
    }
    if let Some(exclude) = expected["flags_exclude"].as_array() {
        for flag in exclude {
            let flag = flag.as_str().unwrap();
            assert!(
                !codes.iter().any(|c| c == flag),
                "flag {} must be absent from {:?}",
                flag,
                codes
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn golden_absolute_language_without_sources() {
    let fixture = load_fixture_value("golden/validation/absolute_language_without_sources.json");
    let expected = &fixture["expected_output"];
    let result = run_fixture(&fixture);

    assert_eq!(
        result.confidence_distribution.total(),
        expected["total_claims"].as_u64().unwrap() as usize
    );
    assert_eq!(
        result.confidence_distribution.uncertain,
        expected["uncertain_claims"].as_u64().unwrap() as usize
    );
    assert_eq!(
        result.singleton_rate,
        expected["singleton_rate"].as_f64().unwrap()
    );
    assert_eq!(result.passed, expected["passed"].as_bool().unwrap());
    assert_eq!(
        result.hallucination_risk.name(),
        expected["hallucination_risk"].as_str().unwrap()
    );
    assert_flag_expectations(&result, expected);
}

#[test]
fn golden_triple_sourced_empirical_claim() {
    let fixture = load_fixture_value("golden/validation/triple_sourced_empirical_claim.json");
    let expected = &fixture["expected_output"];
    let result = run_fixture(&fixture);

    assert_eq!(
        result.confidence_distribution.total(),
        expected["total_claims"].as_u64().unwrap() as usize
    );
    assert_eq!(
        result.confidence_distribution.high,
        expected["high_claims"].as_u64().unwrap() as usize
    );
    assert_eq!(
        result.singleton_rate,
        expected["singleton_rate"].as_f64().unwrap()
    );
    assert_eq!(
        result.hallucination_risk.name(),
        expected["hallucination_risk"].as_str().unwrap()
    );
    assert_flag_expectations(&result, expected);
}

#[test]
fn golden_abstention_suppresses_uncertainty_flag() {
    let fixture =
        load_fixture_value("golden/validation/abstention_suppresses_uncertainty_flag.json");
    let expected = &fixture["expected_output"];
    let result = run_fixture(&fixture);

    assert_eq!(
        result.confidence_distribution.total(),
        expected["total_claims"].as_u64().unwrap() as usize
    );
    assert_eq!(
        result.singleton_rate,
        expected["singleton_rate"].as_f64().unwrap()
    );
    assert_eq!(result.passed, expected["passed"].as_bool().unwrap());
    assert_eq!(
        result.hallucination_risk.name(),
        expected["hallucination_risk"].as_str().unwrap()
    );
    assert_flag_expectations(&result, expected);
}

#[test]
fn golden_scenario_claim_analysis_matches() {
    // The triple-sourced fixture also pins the per-claim analysis.
    let fixture = load_fixture_value("golden/validation/triple_sourced_empirical_claim.json");
    let expected = &fixture["expected_output"];

    let content = fixture["input"]["content"].as_str().unwrap();
    let sources: Vec<String> = fixture["input"]["sources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();

    let claims = veracity_validation::claims::segmenter::split_claims(content);
    assert_eq!(claims.len(), 1);

    let claim_type = veracity_validation::claims::classifier::classify(&claims[0]);
    assert_eq!(claim_type.label(), expected["claim_type"].as_str().unwrap());

    let support = veracity_validation::claims::support::support_count(&claims[0], &sources);
    assert_eq!(support, expected["support_count"].as_u64().unwrap() as usize);

    let tier = veracity_validation::claims::confidence::assess(claim_type, support);
    assert_eq!(tier.name(), expected["confidence"].as_str().unwrap());
}
