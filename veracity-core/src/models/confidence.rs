use std::fmt;

use serde::{Deserialize, Serialize};

/// Confidence tier assigned to a claim from its type and source support.
///
/// Each tier carries a numeric weight used both as its threshold label and
/// as its contribution to the confidence-weighted score. Invariant: weights
/// are strictly descending High > Medium > Low > Uncertain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    /// Strongly corroborated empirical claim (weight 0.9).
    High,
    /// Corroborated by at least two sources (weight 0.75).
    Medium,
    /// Corroborated by a single source (weight 0.5).
    Low,
    /// No corroboration — the claim should be abstained on (weight 0.0).
    Uncertain,
}

impl ConfidenceLevel {
    /// All tiers in descending order of weight.
    pub const ALL: [ConfidenceLevel; 4] = [
        ConfidenceLevel::High,
        ConfidenceLevel::Medium,
        ConfidenceLevel::Low,
        ConfidenceLevel::Uncertain,
    ];

    /// Scoring weight attached to this tier.
    pub fn weight(self) -> f64 {
        match self {
            ConfidenceLevel::High => 0.9,
            ConfidenceLevel::Medium => 0.75,
            ConfidenceLevel::Low => 0.5,
            ConfidenceLevel::Uncertain => 0.0,
        }
    }

    /// Canonical upper-case name, as used in serialized distributions.
    pub fn name(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "HIGH",
            ConfidenceLevel::Medium => "MEDIUM",
            ConfidenceLevel::Low => "LOW",
            ConfidenceLevel::Uncertain => "UNCERTAIN",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
