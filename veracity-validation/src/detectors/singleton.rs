//! Singleton detection: claims with at most one corroborating source.

use crate::claims::support;

/// Maximum support count for a claim to be a singleton.
const SINGLETON_MAX_SUPPORT: usize = 1;

/// Return the claims corroborated by at most one source.
pub fn find_singletons(claims: &[String], sources: &[String]) -> Vec<String> {
    claims
        .iter()
        .filter(|c| support::support_count(c, sources) <= SINGLETON_MAX_SUPPORT)
        .cloned()
        .collect()
}

/// Singleton rate: singleton count over total claim count, 0 if no claims.
pub fn singleton_rate(singleton_count: usize, total_claims: usize) -> f64 {
    if total_claims == 0 {
        0.0
    } else {
        singleton_count as f64 / total_claims as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sources_makes_every_claim_a_singleton() {
        let claims = vec![
            "market growth accelerated sharply".to_string(),
            "adoption rates doubled overnight".to_string(),
        ];
        let singles = find_singletons(&claims, &[]);
        assert_eq!(singles.len(), 2);
    }

    #[test]
    fn two_supporting_sources_clear_a_claim() {
        let claims = vec!["market growth accelerated sharply".to_string()];
        let sources = vec![
            "market growth accelerated in Q3".to_string(),
            "analysts saw market growth accelerated trends".to_string(),
        ];
        assert!(find_singletons(&claims, &sources).is_empty());
    }

    #[test]
    fn rate_is_zero_for_zero_claims() {
        assert_eq!(singleton_rate(0, 0), 0.0);
    }

    #[test]
    fn rate_is_fraction_of_total() {
        assert!((singleton_rate(1, 4) - 0.25).abs() < f64::EPSILON);
    }
}
