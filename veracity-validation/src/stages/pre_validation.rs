//! Stage 1: Pre-Validation — properties derivable from text and metadata
//! before any per-claim confidence scoring.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use veracity_core::models::{ClaimType, ValidationMetadata};

use crate::claims::{classifier, segmenter};
use crate::detectors::singleton;

/// Hedge words counted toward the ambiguity score. Compared against whole
/// whitespace tokens, so "maybe," with trailing punctuation does not count.
const HEDGE_WORDS: [&str; 9] = [
    "maybe",
    "perhaps",
    "might",
    "could",
    "possibly",
    "somewhat",
    "relatively",
    "fairly",
    "quite",
];

/// Phrases indicating the text delimits its own scope.
const SCOPE_INDICATORS: [&str; 6] = [
    "specifically",
    "limited to",
    "within",
    "scope",
    "boundaries",
    "constraints",
];

/// Temporal adverbs anchoring the text in time.
const TIME_MARKERS: [&str; 5] = [
    "currently",
    "recently",
    "historically",
    "previously",
    "future",
];

/// Explicit abstention language.
const ABSTENTION_PHRASES: [&str; 8] = [
    "don't know",
    "uncertain",
    "cannot determine",
    "insufficient data",
    "requires further",
    "unable to",
    "beyond scope",
    "cannot verify",
];

/// Bare 4-digit year.
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

/// Version-like token: "v2", "3.1".
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"v\d+|\d+\.\d+").unwrap());

/// Claim counts per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTypeCounts {
    pub empirical: usize,
    pub inferential: usize,
    pub hypothetical: usize,
    pub computational: usize,
    pub arbitrary: usize,
}

impl ClaimTypeCounts {
    /// Record one claim of the given type.
    pub fn record(&mut self, claim_type: ClaimType) {
        match claim_type {
            ClaimType::Empirical => self.empirical += 1,
            ClaimType::Inferential => self.inferential += 1,
            ClaimType::Hypothetical => self.hypothetical += 1,
            ClaimType::Computational => self.computational += 1,
            ClaimType::Arbitrary => self.arbitrary += 1,
        }
    }

    /// Count for the given type.
    pub fn count(&self, claim_type: ClaimType) -> usize {
        match claim_type {
            ClaimType::Empirical => self.empirical,
            ClaimType::Inferential => self.inferential,
            ClaimType::Hypothetical => self.hypothetical,
            ClaimType::Computational => self.computational,
            ClaimType::Arbitrary => self.arbitrary,
        }
    }

    /// Total claims across all types.
    pub fn total(&self) -> usize {
        self.empirical + self.inferential + self.hypothetical + self.computational + self.arbitrary
    }
}

/// Temporal context markers present in the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalContext {
    pub has_dates: bool,
    pub has_time_markers: bool,
    pub has_version_info: bool,
}

/// Output of Stage 1.
#[derive(Debug, Clone)]
pub struct PreValidation {
    pub claim_types: ClaimTypeCounts,
    /// Fraction of whitespace tokens that are hedge words.
    pub ambiguity_score: f64,
    pub scope_defined: bool,
    pub temporal_context: TemporalContext,
    pub source_count: usize,
    pub has_abstentions: bool,
    /// Claims with at most one corroborating source.
    pub singleton_claims: Vec<String>,
}

/// Run Stage 1 over the text and metadata.
pub fn run(content: &str, metadata: &ValidationMetadata) -> PreValidation {
    let claims = segmenter::split_claims(content);

    let mut claim_types = ClaimTypeCounts::default();
    for claim in &claims {
        claim_types.record(classifier::classify(claim));
    }

    PreValidation {
        claim_types,
        ambiguity_score: ambiguity_score(content),
        scope_defined: scope_defined(content, metadata),
        temporal_context: temporal_context(content),
        source_count: metadata.sources.len(),
        has_abstentions: has_abstentions(content),
        singleton_claims: singleton::find_singletons(&claims, &metadata.sources),
    }
}

/// Fraction of whitespace-split tokens that are hedge words. 0 for empty
/// text.
pub fn ambiguity_score(content: &str) -> f64 {
    let lower = content.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }
    let hedges = words.iter().filter(|w| HEDGE_WORDS.contains(w)).count();
    hedges as f64 / words.len() as f64
}

/// Whether scope is defined: an indicator phrase in the text, or a
/// non-empty scope string in the metadata.
pub fn scope_defined(content: &str, metadata: &ValidationMetadata) -> bool {
    let lower = content.to_lowercase();
    SCOPE_INDICATORS.iter().any(|s| lower.contains(s)) || metadata.has_scope()
}

/// Detect temporal context markers.
pub fn temporal_context(content: &str) -> TemporalContext {
    let lower = content.to_lowercase();
    TemporalContext {
        has_dates: YEAR_RE.is_match(content),
        has_time_markers: TIME_MARKERS.iter().any(|m| lower.contains(m)),
        has_version_info: VERSION_RE.is_match(content),
    }
}

/// Whether the text contains explicit abstention language.
pub fn has_abstentions(content: &str) -> bool {
    let lower = content.to_lowercase();
    ABSTENTION_PHRASES.iter().any(|p| lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguity_counts_whole_tokens_only() {
        // "might" and "could" count; "possibly-not" is not a hedge token.
        let score = ambiguity_score("it might rain and could possibly-not clear up");
        assert!((score - 2.0 / 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ambiguity_is_zero_for_empty_text() {
        assert_eq!(ambiguity_score(""), 0.0);
    }

    #[test]
    fn scope_from_text_or_metadata() {
        let no_meta = ValidationMetadata::default();
        assert!(scope_defined("This is limited to Q3 figures", &no_meta));
        assert!(!scope_defined("General statement", &no_meta));

        let with_scope = ValidationMetadata {
            scope: Some("Q3 2025".into()),
            ..Default::default()
        };
        assert!(scope_defined("General statement", &with_scope));
    }

    #[test]
    fn temporal_markers() {
        let ctx = temporal_context("Released in 2024, currently at v3");
        assert!(ctx.has_dates);
        assert!(ctx.has_time_markers);
        assert!(ctx.has_version_info);

        let none = temporal_context("No anchors here");
        assert_eq!(none, TemporalContext::default());
    }

    #[test]
    fn version_tokens_match_dotted_numbers() {
        assert!(temporal_context("upgraded to 3.14").has_version_info);
        assert!(!temporal_context("three point one four").has_version_info);
    }

    #[test]
    fn abstention_phrases() {
        assert!(has_abstentions("We cannot determine the cause"));
        assert!(has_abstentions("Results are UNCERTAIN at best"));
        assert!(!has_abstentions("The cause is clear"));
    }

    #[test]
    fn stage_counts_types_and_singletons() {
        let meta = ValidationMetadata::default();
        let pre = run(
            "Data shows usage grew. Therefore costs rose. The sky is blue.",
            &meta,
        );
        assert_eq!(pre.claim_types.empirical, 1);
        assert_eq!(pre.claim_types.inferential, 1);
        assert_eq!(pre.claim_types.arbitrary, 1);
        assert_eq!(pre.claim_types.total(), 3);
        // No sources: every claim is a singleton.
        assert_eq!(pre.singleton_claims.len(), 3);
        assert_eq!(pre.source_count, 0);
    }
}
