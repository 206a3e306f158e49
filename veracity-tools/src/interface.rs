//! ValidationInterface — owns the engine, the result history, and the
//! domain override table.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use veracity_core::config::DomainConfig;
use veracity_core::models::{RiskTier, ValidationMetadata, ValidationResult};
use veracity_validation::ValidationEngine;

use crate::history::ValidationHistory;

/// Flags surfaced in a quick summary.
const KEY_ISSUE_LIMIT: usize = 3;

/// Condensed outcome of a quick validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickSummary {
    pub passed: bool,
    /// Overall score as a percentage, one decimal.
    pub score: f64,
    pub risk: RiskTier,
    /// Up to three triggered flag codes.
    pub key_issues: Vec<String>,
    pub top_recommendation: Option<String>,
}

/// Caller-facing orchestrator: one engine, an accumulating history, and
/// the domain override table.
///
/// Domain overrides are resolved into a per-call config value — the
/// engine's own configuration is never mutated, so a shared interface has
/// no configuration races between calls.
pub struct ValidationInterface {
    engine: ValidationEngine,
    history: ValidationHistory,
    domain_config: DomainConfig,
}

impl ValidationInterface {
    pub fn new() -> Self {
        Self {
            engine: ValidationEngine::default(),
            history: ValidationHistory::new(),
            domain_config: DomainConfig::default(),
        }
    }

    /// Use the given domain override table.
    pub fn with_domain_config(mut self, domain_config: DomainConfig) -> Self {
        self.domain_config = domain_config;
        self
    }

    /// The accumulated history of produced results.
    pub fn history(&self) -> &ValidationHistory {
        &self.history
    }

    /// Validate and condense to a quick summary.
    pub fn quick_validate(&mut self, content: &str, sources: Vec<String>) -> QuickSummary {
        let result = self.validate_recorded(content, ValidationMetadata::with_sources(sources));
        summarize(&result)
    }

    /// Full validation with scope and domain context.
    ///
    /// The domain label selects an override config; the result is recorded
    /// in the history.
    pub fn full_validate(
        &mut self,
        content: &str,
        sources: Vec<String>,
        scope: Option<String>,
        domain: Option<String>,
    ) -> ValidationResult {
        let metadata = ValidationMetadata {
            sources,
            scope,
            domain,
            created_at: Some(Utc::now()),
        };
        self.validate_recorded(content, metadata)
    }

    /// Validate several contents against shared sources.
    pub fn batch_validate(
        &mut self,
        contents: &[String],
        sources: &[String],
    ) -> Vec<QuickSummary> {
        contents
            .iter()
            .map(|content| self.quick_validate(content, sources.to_vec()))
            .collect()
    }

    fn validate_recorded(
        &mut self,
        content: &str,
        metadata: ValidationMetadata,
    ) -> ValidationResult {
        let config = self.domain_config.resolve(metadata.domain.as_deref());
        let result = self.engine.validate_with_config(content, &metadata, &config);
        self.history.record(result.clone());
        result
    }
}

impl Default for ValidationInterface {
    fn default() -> Self {
        Self::new()
    }
}

/// Condense a full result into a [`QuickSummary`].
pub fn summarize(result: &ValidationResult) -> QuickSummary {
    QuickSummary {
        passed: result.passed,
        score: percent(result.overall_score),
        risk: result.hallucination_risk,
        key_issues: result
            .validation_flags
            .iter()
            .take(KEY_ISSUE_LIMIT)
            .map(|f| f.to_string())
            .collect(),
        top_recommendation: result.recommendations.first().cloned(),
    }
}

/// Score as a percentage rounded to one decimal.
pub fn percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}
