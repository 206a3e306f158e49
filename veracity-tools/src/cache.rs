//! Result cache keyed by content, sources, and validation mode.
//!
//! Owned entirely by the tool layer: the engine is a pure function and
//! never observes the cache.

use moka::sync::Cache;

use veracity_core::models::ValidationResult;

/// Default maximum cached results.
const DEFAULT_CAPACITY: u64 = 1024;

/// Composite cache key: blake3 over content, each source, and the mode,
/// with separators so ("ab", ["c"]) and ("a", ["bc"]) hash apart.
pub fn cache_key(content: &str, sources: &[String], mode: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(content.as_bytes());
    hasher.update(&[0]);
    for source in sources {
        hasher.update(source.as_bytes());
        hasher.update(&[0]);
    }
    hasher.update(mode.as_bytes());
    hasher.finalize().to_hex().to_string()
}

/// In-memory validation result cache.
pub struct ResultCache {
    cache: Cache<String, ValidationResult>,
}

impl ResultCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `max_entries` results.
    pub fn with_capacity(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Look up a cached result.
    pub fn get(&self, key: &str) -> Option<ValidationResult> {
        self.cache.get(key)
    }

    /// Cache a result.
    pub fn insert(&self, key: String, result: ValidationResult) {
        self.cache.insert(key, result);
    }

    /// Number of cached results.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_separates_content_from_sources() {
        let a = cache_key("ab", &["c".to_string()], "quick");
        let b = cache_key("a", &["bc".to_string()], "quick");
        assert_ne!(a, b);
    }

    #[test]
    fn key_depends_on_mode() {
        let sources = vec!["s".to_string()];
        assert_ne!(
            cache_key("text", &sources, "quick"),
            cache_key("text", &sources, "full")
        );
    }

    #[test]
    fn key_is_stable() {
        let sources = vec!["s1".to_string(), "s2".to_string()];
        assert_eq!(
            cache_key("text", &sources, "quick"),
            cache_key("text", &sources, "quick")
        );
    }
}
