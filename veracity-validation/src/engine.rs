//! ValidationEngine — runs the three stages in order and compiles the
//! final result.

use tracing::debug;

use veracity_core::config::ValidatorConfig;
use veracity_core::models::{ValidationMetadata, ValidationResult};
use veracity_core::traits::IValidator;

use crate::compile;
use crate::stages::{generation, pre_validation, quality};

/// The three-stage validation engine.
///
/// Holds only its configuration — no text or claims are retained across
/// calls, so one validation call is a pure function of
/// (content, metadata, config). A shared engine needs no locking; callers
/// applying domain overrides pass a config into [`Self::validate_with_config`]
/// instead of mutating shared state.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    config: ValidatorConfig,
}

impl ValidationEngine {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate with the engine's own configuration.
    pub fn validate(&self, content: &str, metadata: &ValidationMetadata) -> ValidationResult {
        self.validate_with_config(content, metadata, &self.config)
    }

    /// Validate with an explicit per-call configuration override.
    pub fn validate_with_config(
        &self,
        content: &str,
        metadata: &ValidationMetadata,
        config: &ValidatorConfig,
    ) -> ValidationResult {
        // Stage 1: Pre-Validation.
        let pre = pre_validation::run(content, metadata);
        debug!(
            claim_count = pre.claim_types.total(),
            singleton_count = pre.singleton_claims.len(),
            ambiguity = pre.ambiguity_score,
            scope_defined = pre.scope_defined,
            "pre-validation complete"
        );

        // Stage 2: Generation Assessment.
        let assessment = generation::run(content, metadata, config);
        debug!(
            unsupported = assessment.unsupported_claims.len(),
            hard = assessment.hard_claims.len(),
            "generation assessment complete"
        );

        // Stage 3: Quality Assurance.
        let scores = quality::run(content, &pre, &assessment);
        debug!(
            singleton_rate = scores.singleton_rate,
            validation_ratio = scores.validation_ratio,
            risk = scores.hallucination_risk,
            "quality assurance complete"
        );

        compile::compile(&pre, &assessment, &scores, config)
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl IValidator for ValidationEngine {
    fn validate(&self, content: &str, metadata: &ValidationMetadata) -> ValidationResult {
        ValidationEngine::validate(self, content, metadata)
    }
}
