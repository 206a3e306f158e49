/// Veracity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default singleton-rate ceiling for a passing result.
pub const DEFAULT_SINGLETON_THRESHOLD: f64 = 0.2;

/// Default number of corroborating sources a claim needs to count as supported.
pub const DEFAULT_MINIMUM_SOURCES: usize = 2;

/// Minimum overall score for a passing result.
pub const PASS_SCORE_THRESHOLD: f64 = 0.7;

/// Minimum supported-to-unsupported ratio for a passing result (the 2:1 rule).
pub const PASS_VALIDATION_RATIO: f64 = 2.0;

/// Numeric risk at or above which the tier is Medium.
pub const RISK_MEDIUM_FLOOR: f64 = 0.2;

/// Numeric risk at or above which the tier is High.
pub const RISK_HIGH_FLOOR: f64 = 0.5;

/// Singleton rate above which `HIGH_SINGLETON_RATE` is flagged.
pub const FLAG_SINGLETON_RATE: f64 = 0.3;

/// Validation ratio below which `POOR_VALIDATION_RATIO` is flagged.
pub const FLAG_VALIDATION_RATIO: f64 = 1.0;

/// Ambiguity score above which `HIGH_AMBIGUITY` is flagged.
pub const FLAG_AMBIGUITY: f64 = 0.1;

/// Singleton rate above which a missing uncertainty acknowledgment matters.
pub const FLAG_MISSING_ABSTENTION_SINGLETON_RATE: f64 = 0.1;
