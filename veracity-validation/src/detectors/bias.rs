//! Bias pattern checks over the full text.
//!
//! Each check is an independent boolean. All matching is case-insensitive
//! substring search, so short terms like "all" also hit inside longer
//! words.

use serde::{Deserialize, Serialize};

/// Absolute one-sided language.
const CONFIRMATION_TERMS: [&str; 6] = ["always", "never", "all", "none", "every", "no one"];

/// Recency-weighted language.
const RECENCY_TERMS: [&str; 5] = [
    "latest",
    "newest",
    "most recent",
    "cutting-edge",
    "state-of-the-art",
];

/// Region terms; two distinct hits indicate a geographic skew.
const GEOGRAPHIC_TERMS: [&str; 5] = ["america", "europe", "asia", "western", "eastern"];

/// Outcome of the three bias checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasChecks {
    pub confirmation_bias: bool,
    pub recency_bias: bool,
    pub geographic_bias: bool,
}

impl BiasChecks {
    /// Whether any bias was detected.
    pub fn any(&self) -> bool {
        self.confirmation_bias || self.recency_bias || self.geographic_bias
    }

    /// Human-readable names of the detected biases, in check order.
    pub fn detected(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.confirmation_bias {
            names.push("confirmation bias");
        }
        if self.recency_bias {
            names.push("recency bias");
        }
        if self.geographic_bias {
            names.push("geographic bias");
        }
        names
    }
}

/// Run all three bias checks on the full text.
pub fn check(content: &str) -> BiasChecks {
    let lower = content.to_lowercase();
    BiasChecks {
        confirmation_bias: CONFIRMATION_TERMS.iter().any(|t| lower.contains(t)),
        recency_bias: RECENCY_TERMS.iter().any(|t| lower.contains(t)),
        geographic_bias: GEOGRAPHIC_TERMS.iter().filter(|t| lower.contains(*t)).count() >= 2,
    }
}
