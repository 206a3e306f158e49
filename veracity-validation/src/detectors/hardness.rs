//! Detect claims asserting solutions to intractable computational problems.

/// Phrases promising computationally impossible or intractable guarantees.
const HARD_INDICATORS: [&str; 7] = [
    "optimize",
    "solve np-hard",
    "factor large",
    "decrypt",
    "break encryption",
    "predict perfectly",
    "guarantee optimal",
];

/// Whether a claim contains an intractability phrase, case-insensitively.
pub fn is_computationally_hard(claim: &str) -> bool {
    let lower = claim.to_lowercase();
    HARD_INDICATORS.iter().any(|p| lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_intractable_guarantees() {
        assert!(is_computationally_hard(
            "Our system can guarantee optimal schedules"
        ));
        assert!(is_computationally_hard("We Decrypt any message"));
    }

    #[test]
    fn matches_inside_longer_words() {
        // "optimize" inside "optimizes" still hits.
        assert!(is_computationally_hard("The planner optimizes every route"));
    }

    #[test]
    fn plain_claims_pass() {
        assert!(!is_computationally_hard("The sky is blue"));
        assert!(!is_computationally_hard(""));
    }
}
