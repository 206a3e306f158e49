//! Domain configuration loading and domain-specific flag aliasing.

use std::path::Path;

use veracity_core::config::DomainConfig;
use veracity_core::errors::VeracityResult;
use veracity_core::models::{ValidationFlag, ValidationResult};

/// Load a domain override file from disk.
pub fn load_domain_config(path: &Path) -> VeracityResult<DomainConfig> {
    let raw = std::fs::read_to_string(path)?;
    DomainConfig::from_toml_str(&raw)
}

/// Translate generic flags into domain vocabulary.
///
/// A pure projection over the result's flags; domains without aliases get
/// an empty list.
pub fn domain_flags(result: &ValidationResult, domain: &str) -> Vec<&'static str> {
    let mut flags = Vec::new();
    let has = |flag: ValidationFlag| result.validation_flags.contains(&flag);

    match domain {
        "consulting" => {
            if has(ValidationFlag::MissingUncertaintyAcknowledgment) {
                flags.push("LACKS_EXECUTIVE_CONFIDENCE_FRAMING");
            }
            if has(ValidationFlag::HighSingletonRate) {
                flags.push("INSUFFICIENT_MARKET_VALIDATION");
            }
        }
        "technical" => {
            if has(ValidationFlag::ComputationalIntractability) {
                flags.push("UNREALISTIC_PERFORMANCE_CLAIMS");
            }
            if has(ValidationFlag::UnsupportedClaims) {
                flags.push("MISSING_TECHNICAL_CITATIONS");
            }
        }
        "research" => {
            if has(ValidationFlag::HighSingletonRate) {
                flags.push("NEEDS_PEER_REVIEW");
            }
            if has(ValidationFlag::ConfirmationBias) {
                flags.push("LACKS_ALTERNATIVE_HYPOTHESES");
            }
        }
        _ => {}
    }

    flags
}
