//! Split content into candidate claims at sentence boundaries.

/// Minimum trimmed length for the filtered variant. Fragments at or below
/// this length are dropped.
const MIN_CLAIM_LEN: usize = 20;

/// Split text into claims on runs of sentence-terminating punctuation.
///
/// Fragments that trim to the empty string are discarded; everything else
/// is kept in appearance order. This is the variant the scoring path uses.
pub fn split_claims(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split like [`split_claims`] but additionally drop short fragments.
///
/// Used by the cross-call claim-listing tools, where sub-sentence scraps
/// ("e", "g", list markers) would drown the real claims.
pub fn split_claims_filtered(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.len() > MIN_CLAIM_LEN)
        .map(str::to_string)
        .collect()
}
