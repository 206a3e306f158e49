//! Stage 2: Generation Assessment — per-claim confidence against the
//! supplied sources.

use veracity_core::config::ValidatorConfig;
use veracity_core::models::{Claim, ConfidenceDistribution, ValidationMetadata};

use crate::claims::{classifier, confidence, segmenter, support};
use crate::detectors::hardness;

/// Output of Stage 2.
#[derive(Debug, Clone)]
pub struct GenerationAssessment {
    /// Every extracted claim with its derived type, tier, and support.
    pub claims: Vec<Claim>,
    /// Claim counts per confidence tier.
    pub confidence_distribution: ConfidenceDistribution,
    /// Claims whose support count fell below the minimum-sources bar.
    pub unsupported_claims: Vec<String>,
    /// Claims asserting computationally intractable guarantees.
    pub hard_claims: Vec<String>,
}

impl GenerationAssessment {
    /// Total number of extracted claims.
    pub fn total_claims(&self) -> usize {
        self.claims.len()
    }
}

/// Run Stage 2 over the text and metadata.
pub fn run(
    content: &str,
    metadata: &ValidationMetadata,
    config: &ValidatorConfig,
) -> GenerationAssessment {
    let mut claims = Vec::new();
    let mut distribution = ConfidenceDistribution::default();
    let mut unsupported = Vec::new();
    let mut hard = Vec::new();

    for text in segmenter::split_claims(content) {
        let claim_type = classifier::classify(&text);
        let support_count = support::support_count(&text, &metadata.sources);
        let tier = confidence::assess(claim_type, support_count);

        distribution.record(tier);

        if support_count < config.minimum_sources {
            unsupported.push(text.clone());
        }
        if hardness::is_computationally_hard(&text) {
            hard.push(text.clone());
        }

        claims.push(Claim {
            text,
            claim_type,
            confidence: tier,
            support_count,
        });
    }

    GenerationAssessment {
        claims,
        confidence_distribution: distribution,
        unsupported_claims: unsupported,
        hard_claims: hard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veracity_core::models::{ClaimType, ConfidenceLevel};

    #[test]
    fn empty_content_produces_empty_assessment() {
        let assessment = run("", &ValidationMetadata::default(), &ValidatorConfig::default());
        assert_eq!(assessment.total_claims(), 0);
        assert_eq!(assessment.confidence_distribution.total(), 0);
        assert!(assessment.unsupported_claims.is_empty());
        assert!(assessment.hard_claims.is_empty());
    }

    #[test]
    fn claims_without_sources_are_uncertain_and_unsupported() {
        let assessment = run(
            "Market growth accelerated sharply. Adoption rates doubled quickly.",
            &ValidationMetadata::default(),
            &ValidatorConfig::default(),
        );
        assert_eq!(assessment.total_claims(), 2);
        assert_eq!(assessment.confidence_distribution.uncertain, 2);
        assert_eq!(assessment.unsupported_claims.len(), 2);
    }

    #[test]
    fn triple_sourced_empirical_claim_scores_high() {
        let meta = ValidationMetadata::with_sources(vec![
            "Internal data shows revenue increases with retention".into(),
            "Survey data shows revenue increases per cohort".into(),
            "Annual report: data shows revenue increases".into(),
        ]);
        let assessment = run(
            "Data shows revenue increases yearly.",
            &meta,
            &ValidatorConfig::default(),
        );
        let claim = &assessment.claims[0];
        assert_eq!(claim.claim_type, ClaimType::Empirical);
        assert_eq!(claim.support_count, 3);
        assert_eq!(claim.confidence, ConfidenceLevel::High);
        assert!(assessment.unsupported_claims.is_empty());
    }

    #[test]
    fn hard_claims_are_collected() {
        let assessment = run(
            "Our planner can guarantee optimal routes. The sky is blue.",
            &ValidationMetadata::default(),
            &ValidatorConfig::default(),
        );
        assert_eq!(assessment.hard_claims.len(), 1);
        assert!(assessment.hard_claims[0].contains("guarantee optimal"));
    }

    #[test]
    fn minimum_sources_bar_is_configurable() {
        let meta = ValidationMetadata::with_sources(vec![
            "market growth accelerated in Q3".into(),
        ]);
        let strict = ValidatorConfig {
            minimum_sources: 1,
            ..Default::default()
        };
        let assessment = run("Market growth accelerated sharply.", &meta, &strict);
        assert!(assessment.unsupported_claims.is_empty());
    }
}
