//! Stage 3: Quality Assurance — aggregate metrics from the first two
//! stages plus whole-text bias checks.

use crate::detectors::bias::{self, BiasChecks};
use crate::detectors::singleton;
use crate::stages::generation::GenerationAssessment;
use crate::stages::pre_validation::PreValidation;

/// Weight of the singleton rate in the numeric risk.
const RISK_SINGLETON_WEIGHT: f64 = 0.4;
/// Weight of the unsupported-claim ratio in the numeric risk.
const RISK_UNSUPPORTED_WEIGHT: f64 = 0.4;
/// Weight of the confidence shortfall in the numeric risk.
const RISK_CONFIDENCE_WEIGHT: f64 = 0.2;

/// Output of Stage 3.
#[derive(Debug, Clone)]
pub struct QualityScores {
    /// Fraction of claims with at most one corroborating source.
    pub singleton_rate: f64,
    /// Supported-to-unsupported ratio, offset by one: never divides by zero,
    /// and equals the total claim count when everything is supported.
    pub validation_ratio: f64,
    /// Tier-weight average over the confidence distribution.
    pub confidence_weighted_score: f64,
    /// Whole-text bias checks.
    pub bias_checks: BiasChecks,
    /// Numeric hallucination risk in [0, 1].
    pub hallucination_risk: f64,
}

/// Run Stage 3 from the prior stage outputs.
pub fn run(
    content: &str,
    pre: &PreValidation,
    generation: &GenerationAssessment,
) -> QualityScores {
    let total_claims = generation.total_claims();
    let unsupported = generation.unsupported_claims.len();

    let singleton_rate = singleton::singleton_rate(pre.singleton_claims.len(), total_claims);

    let validated = total_claims - unsupported;
    let validation_ratio = validated as f64 / (unsupported + 1) as f64;

    let confidence_weighted_score = generation.confidence_distribution.weighted_score();

    let unsupported_ratio = unsupported as f64 / (total_claims + 1) as f64;
    let risk = RISK_SINGLETON_WEIGHT * singleton_rate
        + RISK_UNSUPPORTED_WEIGHT * unsupported_ratio
        + RISK_CONFIDENCE_WEIGHT * (1.0 - confidence_weighted_score);

    QualityScores {
        singleton_rate,
        validation_ratio,
        confidence_weighted_score,
        bias_checks: bias::check(content),
        hallucination_risk: risk.min(1.0),
    }
}
