//! Result compilation: blend the three stage outputs into the final
//! immutable [`ValidationResult`].

pub mod flags;
pub mod recommendations;

use chrono::Utc;

use veracity_core::config::ValidatorConfig;
use veracity_core::constants;
use veracity_core::models::{RiskTier, ValidationResult};

use crate::stages::{GenerationAssessment, PreValidation, QualityScores};

/// Weight of the pre-validation factor in the overall score.
const PRE_VALIDATION_WEIGHT: f64 = 0.3;
/// Weight of the confidence-weighted score in the overall score.
const GENERATION_WEIGHT: f64 = 0.4;
/// Weight of the quality-assurance factor in the overall score.
const QA_WEIGHT: f64 = 0.3;

/// Penalty factor applied when no scope is defined.
const UNDEFINED_SCOPE_FACTOR: f64 = 0.5;
/// Penalty factor applied when no abstention language is present.
const NO_ABSTENTION_FACTOR: f64 = 0.7;
/// Validation ratios at or above this saturate the QA ratio term.
const RATIO_SATURATION: f64 = 4.0;

/// Compile the final result from the three stage outputs.
pub fn compile(
    pre: &PreValidation,
    generation: &GenerationAssessment,
    quality: &QualityScores,
    config: &ValidatorConfig,
) -> ValidationResult {
    let score = overall_score(pre, quality);

    let passed = score >= constants::PASS_SCORE_THRESHOLD
        && quality.singleton_rate < config.singleton_threshold
        && quality.validation_ratio >= constants::PASS_VALIDATION_RATIO;

    ValidationResult {
        timestamp: Utc::now(),
        overall_score: score,
        confidence_distribution: generation.confidence_distribution,
        singleton_rate: quality.singleton_rate,
        validation_flags: flags::generate(pre, generation, quality),
        recommendations: recommendations::generate(pre, generation, quality, config),
        passed,
        hallucination_risk: RiskTier::from_score(quality.hallucination_risk),
    }
}

/// Weighted blend of the three stage scores.
///
/// Every factor is a product or average of values in [0, 1], so the blend
/// stays in [0, 1] without an explicit clamp.
pub fn overall_score(pre: &PreValidation, quality: &QualityScores) -> f64 {
    let pre_val_score = scope_factor(pre.scope_defined)
        * abstention_factor(pre.has_abstentions)
        * (1.0 - pre.ambiguity_score);

    let qa_score = (1.0 - quality.singleton_rate) * 0.5
        + (quality.validation_ratio / RATIO_SATURATION).min(1.0) * 0.5;

    PRE_VALIDATION_WEIGHT * pre_val_score
        + GENERATION_WEIGHT * quality.confidence_weighted_score
        + QA_WEIGHT * qa_score
}

fn scope_factor(scope_defined: bool) -> f64 {
    if scope_defined {
        1.0
    } else {
        UNDEFINED_SCOPE_FACTOR
    }
}

fn abstention_factor(has_abstentions: bool) -> f64 {
    if has_abstentions {
        1.0
    } else {
        NO_ABSTENTION_FACTOR
    }
}
