//! Data model for validation inputs and outputs.

pub mod claim;
pub mod confidence;
pub mod flags;
pub mod metadata;
pub mod validation_result;

pub use claim::{Claim, ClaimType};
pub use confidence::ConfidenceLevel;
pub use flags::ValidationFlag;
pub use metadata::ValidationMetadata;
pub use validation_result::{ConfidenceDistribution, RiskTier, ValidationResult};
