use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::ConfidenceLevel;
use super::flags::ValidationFlag;
use crate::constants;

/// Per-tier claim counts. Counts always sum to the total claim count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ConfidenceDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub uncertain: usize,
}

impl ConfidenceDistribution {
    /// Record one claim at the given tier.
    pub fn record(&mut self, level: ConfidenceLevel) {
        match level {
            ConfidenceLevel::High => self.high += 1,
            ConfidenceLevel::Medium => self.medium += 1,
            ConfidenceLevel::Low => self.low += 1,
            ConfidenceLevel::Uncertain => self.uncertain += 1,
        }
    }

    /// Claim count at the given tier.
    pub fn count(&self, level: ConfidenceLevel) -> usize {
        match level {
            ConfidenceLevel::High => self.high,
            ConfidenceLevel::Medium => self.medium,
            ConfidenceLevel::Low => self.low,
            ConfidenceLevel::Uncertain => self.uncertain,
        }
    }

    /// Total claim count across all tiers.
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.uncertain
    }

    /// Weighted average of tier weights over claim counts.
    /// Returns 0.0 when no claims were recorded.
    pub fn weighted_score(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let weighted: f64 = ConfidenceLevel::ALL
            .iter()
            .map(|&level| level.weight() * self.count(level) as f64)
            .sum();
        weighted / total as f64
    }
}

/// Hallucination risk tier, derived from the numeric risk score.
///
/// Independent of the pass/fail verdict — a result can pass with Medium
/// risk or fail with Low risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Derive the tier from a numeric risk in [0, 1].
    /// Boundaries are inclusive on the lower side: exactly 0.2 is Medium,
    /// exactly 0.5 is High.
    pub fn from_score(risk: f64) -> Self {
        if risk < constants::RISK_MEDIUM_FLOOR {
            RiskTier::Low
        } else if risk < constants::RISK_HIGH_FLOOR {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The sole output of a validation call. Created once, immutable thereafter.
///
/// Serializes to a flat record; deserializing that record reproduces the
/// result field-for-field without re-running any computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// When the validation ran.
    pub timestamp: DateTime<Utc>,
    /// Weighted blend of the three stage scores (0.0–1.0).
    pub overall_score: f64,
    /// Claim counts per confidence tier.
    pub confidence_distribution: ConfidenceDistribution,
    /// Fraction of claims with at most one corroborating source.
    pub singleton_rate: f64,
    /// Triggered issue codes, in fixed declaration order, each at most once.
    pub validation_flags: Vec<ValidationFlag>,
    /// Advisory strings. Never capped here; presentation layers truncate.
    pub recommendations: Vec<String>,
    /// Whether all three pass criteria held.
    pub passed: bool,
    /// Derived risk tier.
    pub hallucination_risk: RiskTier,
}
