//! Map (claim type, support count) to a confidence tier.

use veracity_core::models::{ClaimType, ConfidenceLevel};

/// Assess the confidence tier for a claim.
///
/// The empirical-with-three-sources rule must be checked before the
/// generic two-source rule: a three-source non-empirical claim falls
/// through to Medium, not High.
pub fn assess(claim_type: ClaimType, support_count: usize) -> ConfidenceLevel {
    if support_count >= 3 && claim_type == ClaimType::Empirical {
        ConfidenceLevel::High
    } else if support_count >= 2 {
        ConfidenceLevel::Medium
    } else if support_count >= 1 {
        ConfidenceLevel::Low
    } else {
        ConfidenceLevel::Uncertain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empirical_with_three_sources_is_high() {
        assert_eq!(assess(ClaimType::Empirical, 3), ConfidenceLevel::High);
        assert_eq!(assess(ClaimType::Empirical, 7), ConfidenceLevel::High);
    }

    #[test]
    fn non_empirical_with_three_sources_is_medium() {
        assert_eq!(assess(ClaimType::Inferential, 3), ConfidenceLevel::Medium);
        assert_eq!(assess(ClaimType::Arbitrary, 5), ConfidenceLevel::Medium);
    }

    #[test]
    fn support_ladder() {
        assert_eq!(assess(ClaimType::Empirical, 2), ConfidenceLevel::Medium);
        assert_eq!(assess(ClaimType::Arbitrary, 1), ConfidenceLevel::Low);
        assert_eq!(assess(ClaimType::Empirical, 0), ConfidenceLevel::Uncertain);
    }
}
