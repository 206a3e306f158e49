//! Keyword-priority claim classification.

use veracity_core::models::ClaimType;

/// Markers of empirically grounded claims.
const EMPIRICAL_MARKERS: [&str; 4] = ["data shows", "evidence", "study", "research"];

/// Markers of logical deduction.
const INFERENTIAL_MARKERS: [&str; 4] = ["therefore", "thus", "implies", "suggests"];

/// Markers of speculation or projection.
const HYPOTHETICAL_MARKERS: [&str; 4] = ["might", "could", "possibly", "hypothesis"];

/// Markers of computation-dependent claims.
const COMPUTATIONAL_MARKERS: [&str; 3] = ["calculate", "compute", "algorithm"];

/// Classify one claim, case-insensitively, by the first matching marker
/// set in priority order. Falls through to [`ClaimType::Arbitrary`].
///
/// Pure function of the claim text alone; ties are impossible because the
/// priority order decides.
pub fn classify(claim: &str) -> ClaimType {
    let lower = claim.to_lowercase();

    if contains_any(&lower, &EMPIRICAL_MARKERS) {
        ClaimType::Empirical
    } else if contains_any(&lower, &INFERENTIAL_MARKERS) {
        ClaimType::Inferential
    } else if contains_any(&lower, &HYPOTHETICAL_MARKERS) {
        ClaimType::Hypothetical
    } else if contains_any(&lower, &COMPUTATIONAL_MARKERS) {
        ClaimType::Computational
    } else {
        ClaimType::Arbitrary
    }
}

fn contains_any(lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| lower.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empirical_markers_win() {
        assert_eq!(classify("Data shows X increases Y"), ClaimType::Empirical);
        assert_eq!(classify("A recent STUDY found this"), ClaimType::Empirical);
    }

    #[test]
    fn empirical_outranks_inferential() {
        // Contains both "evidence" and "therefore": priority order decides.
        assert_eq!(
            classify("The evidence therefore points one way"),
            ClaimType::Empirical
        );
    }

    #[test]
    fn inferential_outranks_hypothetical() {
        assert_eq!(
            classify("This implies the effect might hold"),
            ClaimType::Inferential
        );
    }

    #[test]
    fn hypothetical_and_computational() {
        assert_eq!(classify("It could rain tomorrow"), ClaimType::Hypothetical);
        assert_eq!(
            classify("The algorithm finishes in linear time"),
            ClaimType::Computational
        );
    }

    #[test]
    fn defaults_to_arbitrary() {
        assert_eq!(classify("The sky is blue"), ClaimType::Arbitrary);
        assert_eq!(classify(""), ClaimType::Arbitrary);
    }
}
