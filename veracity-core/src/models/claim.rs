use std::fmt;

use serde::{Deserialize, Serialize};

use super::confidence::ConfidenceLevel;

/// Epistemological category of a claim.
///
/// A claim has exactly one type, chosen by the first matching keyword
/// heuristic in priority order: empirical > inferential > hypothetical >
/// computational > arbitrary (the catch-all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    /// Grounded in verifiable data ("data shows", "evidence", ...).
    Empirical,
    /// Logical deduction from data ("therefore", "implies", ...).
    Inferential,
    /// Speculation or projection ("might", "possibly", ...).
    Hypothetical,
    /// Requires non-trivial computation ("calculate", "algorithm", ...).
    Computational,
    /// No recognizable pattern — the singleton-prone default.
    Arbitrary,
}

impl ClaimType {
    /// All claim types, in classification priority order.
    pub const ALL: [ClaimType; 5] = [
        ClaimType::Empirical,
        ClaimType::Inferential,
        ClaimType::Hypothetical,
        ClaimType::Computational,
        ClaimType::Arbitrary,
    ];

    /// Lower-case label, as used in serialized classification counts.
    pub fn label(self) -> &'static str {
        match self {
            ClaimType::Empirical => "empirical",
            ClaimType::Inferential => "inferential",
            ClaimType::Hypothetical => "hypothetical",
            ClaimType::Computational => "computational",
            ClaimType::Arbitrary => "arbitrary",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single analyzed claim: a trimmed sentence-like span with its derived
/// type, confidence tier, and source support count.
///
/// Claims are ephemeral — recomputed on every validation call, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub text: String,
    pub claim_type: ClaimType,
    pub confidence: ConfidenceLevel,
    pub support_count: usize,
}
