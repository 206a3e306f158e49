//! Append-only validation history with aggregate statistics.

use serde::{Deserialize, Serialize};

use veracity_core::models::{RiskTier, ValidationResult};

/// How many of the most frequent flags to report.
const COMMON_FLAG_LIMIT: usize = 5;

/// Count of results per risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Aggregates over the full history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryStatistics {
    pub total_validations: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f64,
    pub average_score: f64,
    pub average_singleton_rate: f64,
    pub risk_distribution: RiskDistribution,
    /// Most frequent flags as (code, count), descending by count.
    pub common_issues: Vec<(String, usize)>,
}

/// Ordered log of every produced validation result.
#[derive(Debug, Clone, Default)]
pub struct ValidationHistory {
    entries: Vec<ValidationResult>,
}

impl ValidationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result.
    pub fn record(&mut self, result: ValidationResult) {
        tracing::debug!(
            event = "validation_recorded",
            score = result.overall_score,
            passed = result.passed,
            risk = %result.hallucination_risk,
            "validation recorded"
        );
        self.entries.push(result);
    }

    /// All recorded results, oldest first.
    pub fn entries(&self) -> &[ValidationResult] {
        &self.entries
    }

    /// Number of recorded results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate statistics, or `None` for an empty history.
    pub fn statistics(&self) -> Option<HistoryStatistics> {
        if self.entries.is_empty() {
            return None;
        }

        let total = self.entries.len();
        let passed = self.entries.iter().filter(|r| r.passed).count();

        let average_score =
            self.entries.iter().map(|r| r.overall_score).sum::<f64>() / total as f64;
        let average_singleton_rate =
            self.entries.iter().map(|r| r.singleton_rate).sum::<f64>() / total as f64;

        let mut risk_distribution = RiskDistribution::default();
        for entry in &self.entries {
            match entry.hallucination_risk {
                RiskTier::Low => risk_distribution.low += 1,
                RiskTier::Medium => risk_distribution.medium += 1,
                RiskTier::High => risk_distribution.high += 1,
            }
        }

        let mut flag_counts: std::collections::HashMap<String, usize> =
            std::collections::HashMap::new();
        for entry in &self.entries {
            for flag in &entry.validation_flags {
                *flag_counts.entry(flag.to_string()).or_insert(0) += 1;
            }
        }
        let mut common_issues: Vec<(String, usize)> = flag_counts.into_iter().collect();
        common_issues.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        common_issues.truncate(COMMON_FLAG_LIMIT);

        Some(HistoryStatistics {
            total_validations: total,
            passed,
            failed: total - passed,
            pass_rate: passed as f64 / total as f64,
            average_score,
            average_singleton_rate,
            risk_distribution,
            common_issues,
        })
    }
}
