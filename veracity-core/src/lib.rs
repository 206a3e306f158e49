//! # veracity-core
//!
//! Foundation crate for the Veracity output validation system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ValidatorConfig;
pub use errors::{VeracityError, VeracityResult};
pub use models::{
    Claim, ClaimType, ConfidenceDistribution, ConfidenceLevel, RiskTier, ValidationFlag,
    ValidationMetadata, ValidationResult,
};
pub use traits::IValidator;
