//! Issue flag generation.

use veracity_core::constants;
use veracity_core::models::ValidationFlag;

use crate::stages::{GenerationAssessment, PreValidation, QualityScores};

/// Generate the triggered flags, in their fixed declaration order.
/// Each flag appears at most once.
pub fn generate(
    pre: &PreValidation,
    generation: &GenerationAssessment,
    quality: &QualityScores,
) -> Vec<ValidationFlag> {
    let mut flags = Vec::new();

    if quality.singleton_rate > constants::FLAG_SINGLETON_RATE {
        flags.push(ValidationFlag::HighSingletonRate);
    }

    if quality.validation_ratio < constants::FLAG_VALIDATION_RATIO {
        flags.push(ValidationFlag::PoorValidationRatio);
    }

    if !generation.unsupported_claims.is_empty() {
        flags.push(ValidationFlag::UnsupportedClaims);
    }

    if !generation.hard_claims.is_empty() {
        flags.push(ValidationFlag::ComputationalIntractability);
    }

    if !pre.scope_defined {
        flags.push(ValidationFlag::UndefinedScope);
    }

    if pre.ambiguity_score > constants::FLAG_AMBIGUITY {
        flags.push(ValidationFlag::HighAmbiguity);
    }

    if !pre.has_abstentions
        && quality.singleton_rate > constants::FLAG_MISSING_ABSTENTION_SINGLETON_RATE
    {
        flags.push(ValidationFlag::MissingUncertaintyAcknowledgment);
    }

    if quality.bias_checks.confirmation_bias {
        flags.push(ValidationFlag::ConfirmationBias);
    }
    if quality.bias_checks.recency_bias {
        flags.push(ValidationFlag::RecencyBias);
    }
    if quality.bias_checks.geographic_bias {
        flags.push(ValidationFlag::GeographicBias);
    }

    flags
}
