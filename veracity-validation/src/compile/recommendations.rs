//! Advisory recommendation strings.
//!
//! Recommendation triggers resemble the flag triggers but fire earlier:
//! the validation-ratio advisory starts below 2.0 where the flag waits for
//! 1.0, and the singleton advisory uses the configured pass threshold
//! rather than the 0.3 flag level. The divergence is intentional — a
//! recommendation is a softer warning than a flag.

use veracity_core::config::ValidatorConfig;
use veracity_core::constants;

use crate::stages::{GenerationAssessment, PreValidation, QualityScores};

/// Generate advisory strings in a fixed order. Never capped here;
/// presentation layers truncate.
pub fn generate(
    pre: &PreValidation,
    generation: &GenerationAssessment,
    quality: &QualityScores,
    config: &ValidatorConfig,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if quality.singleton_rate > config.singleton_threshold {
        recommendations.push(format!(
            "High singleton rate ({:.2}%). Add cross-validation from additional sources.",
            quality.singleton_rate * 100.0
        ));
    }

    if quality.validation_ratio < constants::PASS_VALIDATION_RATIO {
        recommendations.push(
            "Validation ratio below 2:1. Increase supported claims or remove unsupported \
             assertions."
                .to_string(),
        );
    }

    let dist = &generation.confidence_distribution;
    if dist.uncertain > dist.high {
        recommendations.push(
            "More uncertain claims than high-confidence claims. Consider abstaining on \
             uncertain topics."
                .to_string(),
        );
    }

    if !generation.hard_claims.is_empty() {
        recommendations.push(
            "Contains computationally hard claims. Acknowledge computational limitations \
             explicitly."
                .to_string(),
        );
    }

    if quality.bias_checks.any() {
        recommendations.push(format!(
            "Detected potential biases: {}. Review for balanced perspective.",
            quality.bias_checks.detected().join(", ")
        ));
    }

    if !pre.has_abstentions
        && quality.singleton_rate > constants::FLAG_MISSING_ABSTENTION_SINGLETON_RATE
    {
        recommendations.push(
            "Consider adding explicit uncertainty acknowledgments for low-confidence claims."
                .to_string(),
        );
    }

    recommendations
}
