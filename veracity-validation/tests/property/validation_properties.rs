//! Property tests for the scoring pipeline invariants.

use proptest::prelude::*;

use veracity_core::config::ValidatorConfig;
use veracity_core::models::{ClaimType, ConfidenceLevel, ValidationMetadata};
use veracity_validation::claims::{confidence, support};
use veracity_validation::{compile, stages};

/// Vocabulary mixing classifier markers, hedge words, bias terms, and
/// filler, so generated texts exercise every detector.
const VOCAB: &[&str] = &[
    "data",
    "shows",
    "evidence",
    "research",
    "therefore",
    "suggests",
    "might",
    "possibly",
    "algorithm",
    "optimize",
    "always",
    "never",
    "maybe",
    "quite",
    "america",
    "europe",
    "within",
    "scope",
    "uncertain",
    "adoption",
    "increased",
    "growth",
    "sharply",
    "the",
    "results",
    "declined",
];

fn arb_sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 1..8).prop_map(|words| words.join(" "))
}

fn arb_content() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_sentence(), 0..6).prop_map(|sentences| {
        if sentences.is_empty() {
            String::new()
        } else {
            format!("{}.", sentences.join(". "))
        }
    })
}

fn arb_sources() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_sentence(), 0..5)
}

fn arb_claim_type() -> impl Strategy<Value = ClaimType> {
    prop_oneof![
        Just(ClaimType::Empirical),
        Just(ClaimType::Inferential),
        Just(ClaimType::Hypothetical),
        Just(ClaimType::Computational),
        Just(ClaimType::Arbitrary),
    ]
}

// ── Support is monotonic under source append ─────────────────────────────

proptest! {
    #[test]
    fn support_never_decreases_when_sources_are_appended(
        claim in arb_sentence(),
        mut sources in arb_sources(),
        extra in arb_sentence(),
    ) {
        let before = support::support_count(&claim, &sources);
        sources.push(extra);
        let after = support::support_count(&claim, &sources);
        prop_assert!(after >= before);
    }
}

// ── Confidence assignment is total and deterministic ─────────────────────

proptest! {
    #[test]
    fn confidence_is_total_and_deterministic(
        claim_type in arb_claim_type(),
        support_count in 0usize..100,
    ) {
        let tier = confidence::assess(claim_type, support_count);
        prop_assert_eq!(tier, confidence::assess(claim_type, support_count));

        let expected = if support_count >= 3 && claim_type == ClaimType::Empirical {
            ConfidenceLevel::High
        } else if support_count >= 2 {
            ConfidenceLevel::Medium
        } else if support_count >= 1 {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::Uncertain
        };
        prop_assert_eq!(tier, expected);
    }

    #[test]
    fn empirical_with_three_or_more_sources_is_always_high(count in 3usize..50) {
        prop_assert_eq!(
            confidence::assess(ClaimType::Empirical, count),
            ConfidenceLevel::High
        );
    }
}

// ── Compile-step invariants over arbitrary inputs ────────────────────────

proptest! {
    #[test]
    fn overall_score_stays_in_unit_interval(
        content in arb_content(),
        sources in arb_sources(),
    ) {
        let meta = ValidationMetadata::with_sources(sources);
        let config = ValidatorConfig::default();

        let pre = stages::pre_validation::run(&content, &meta);
        let generation = stages::generation::run(&content, &meta, &config);
        let quality = stages::quality::run(&content, &pre, &generation);
        let score = compile::overall_score(&pre, &quality);

        prop_assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
        prop_assert!((0.0..=1.0).contains(&quality.hallucination_risk));
        prop_assert!((0.0..=1.0).contains(&quality.singleton_rate));
    }

    #[test]
    fn verdict_is_exactly_the_three_criteria(
        content in arb_content(),
        sources in arb_sources(),
    ) {
        let meta = ValidationMetadata::with_sources(sources);
        let config = ValidatorConfig::default();

        let pre = stages::pre_validation::run(&content, &meta);
        let generation = stages::generation::run(&content, &meta, &config);
        let quality = stages::quality::run(&content, &pre, &generation);

        let result = compile::compile(&pre, &generation, &quality, &config);
        let expected = compile::overall_score(&pre, &quality) >= 0.7
            && quality.singleton_rate < config.singleton_threshold
            && quality.validation_ratio >= 2.0;

        prop_assert_eq!(result.passed, expected);
    }

    #[test]
    fn distribution_total_matches_claim_count(
        content in arb_content(),
        sources in arb_sources(),
    ) {
        let meta = ValidationMetadata::with_sources(sources);
        let generation =
            stages::generation::run(&content, &meta, &ValidatorConfig::default());
        prop_assert_eq!(
            generation.confidence_distribution.total(),
            generation.total_claims()
        );
    }
}
