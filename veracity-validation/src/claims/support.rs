//! Cross-source support estimation via lexical key-word overlap.
//!
//! A source "supports" a claim when at least half of the claim's key words
//! appear as substrings of the lower-cased source. This is overlap, not
//! entailment: paraphrases are missed and stray substring hits count. Both
//! behaviors are part of the scoring contract.

/// Tokens this short carry no signal and are never key words.
const MIN_KEY_WORD_LEN: usize = 4;

/// Frequent function words excluded from key words despite their length.
const STOP_WORDS: [&str; 6] = ["that", "this", "with", "from", "have", "been"];

/// Fraction of key words that must hit the source.
const MATCH_RATIO: f64 = 0.5;

/// Extract the lower-cased key words of a claim: whitespace tokens longer
/// than four characters, minus the stop-word set.
pub fn key_words(claim: &str) -> Vec<String> {
    claim
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.len() > MIN_KEY_WORD_LEN && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Whether a single source lexically corroborates a claim.
///
/// Claims with fewer than two key words never receive support.
pub fn source_supports(claim: &str, source: &str) -> bool {
    let words = key_words(claim);
    if words.len() < 2 {
        return false;
    }

    let source_lower = source.to_lowercase();
    let matches = words.iter().filter(|w| source_lower.contains(w.as_str())).count();

    matches as f64 >= words.len() as f64 * MATCH_RATIO
}

/// Count the sources corroborating a claim.
///
/// Monotonic non-decreasing as sources are appended.
pub fn support_count(claim: &str, sources: &[String]) -> usize {
    sources.iter().filter(|s| source_supports(claim, s)).count()
}
