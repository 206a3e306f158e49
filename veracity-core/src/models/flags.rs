use std::fmt;

use serde::{Deserialize, Serialize};

/// Issue codes attached to a validation result.
///
/// Each flag is triggered independently; the declaration order here is the
/// fixed order in which triggered flags appear on a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationFlag {
    /// Singleton rate above 0.3.
    HighSingletonRate,
    /// Supported-to-unsupported ratio below 1.0.
    PoorValidationRatio,
    /// At least one claim below the minimum-sources bar.
    UnsupportedClaims,
    /// At least one claim asserts a computationally intractable guarantee.
    ComputationalIntractability,
    /// Neither the text nor the metadata defines a scope.
    UndefinedScope,
    /// Hedge-word density above 0.1.
    HighAmbiguity,
    /// No abstention language despite a singleton rate above 0.1.
    MissingUncertaintyAcknowledgment,
    /// Absolute one-sided language present.
    ConfirmationBias,
    /// Recency-weighted language present.
    RecencyBias,
    /// Two or more distinct region terms present.
    GeographicBias,
}

impl ValidationFlag {
    /// The SCREAMING_SNAKE issue code.
    pub fn code(self) -> &'static str {
        match self {
            ValidationFlag::HighSingletonRate => "HIGH_SINGLETON_RATE",
            ValidationFlag::PoorValidationRatio => "POOR_VALIDATION_RATIO",
            ValidationFlag::UnsupportedClaims => "UNSUPPORTED_CLAIMS",
            ValidationFlag::ComputationalIntractability => "COMPUTATIONAL_INTRACTABILITY",
            ValidationFlag::UndefinedScope => "UNDEFINED_SCOPE",
            ValidationFlag::HighAmbiguity => "HIGH_AMBIGUITY",
            ValidationFlag::MissingUncertaintyAcknowledgment => {
                "MISSING_UNCERTAINTY_ACKNOWLEDGMENT"
            }
            ValidationFlag::ConfirmationBias => "CONFIRMATION_BIAS",
            ValidationFlag::RecencyBias => "RECENCY_BIAS",
            ValidationFlag::GeographicBias => "GEOGRAPHIC_BIAS",
        }
    }
}

impl fmt::Display for ValidationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
