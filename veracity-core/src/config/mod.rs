//! Configuration types for the validator and per-domain overrides.

pub mod domain_config;
pub mod validator_config;

pub use domain_config::{DomainConfig, DomainRules};
pub use validator_config::ValidatorConfig;
