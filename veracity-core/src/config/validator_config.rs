//! Validator configuration.
//!
//! # Examples
//!
//! ```
//! use veracity_core::config::ValidatorConfig;
//!
//! let config = ValidatorConfig::default();
//! assert!((config.singleton_threshold - 0.2).abs() < f64::EPSILON);
//! assert_eq!(config.minimum_sources, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants;

/// The two numeric knobs of the validation engine.
///
/// A plain value type: callers applying domain-specific rules pass an
/// override into each validate call instead of mutating a shared engine,
/// so concurrent callers never race on configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Singleton rate at or above which a result cannot pass. Default: 0.2.
    pub singleton_threshold: f64,
    /// Sources required for a claim to count as supported. Default: 2.
    pub minimum_sources: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            singleton_threshold: constants::DEFAULT_SINGLETON_THRESHOLD,
            minimum_sources: constants::DEFAULT_MINIMUM_SOURCES,
        }
    }
}
