use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validator_config::ValidatorConfig;
use crate::errors::{VeracityError, VeracityResult};

/// Per-domain overrides of the validator knobs.
///
/// Fields left out of the declarative source fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainRules {
    pub singleton_threshold: Option<f64>,
    pub minimum_sources: Option<usize>,
}

impl DomainRules {
    /// Materialize a full config from these rules over the given base.
    pub fn apply(&self, base: ValidatorConfig) -> ValidatorConfig {
        ValidatorConfig {
            singleton_threshold: self.singleton_threshold.unwrap_or(base.singleton_threshold),
            minimum_sources: self.minimum_sources.unwrap_or(base.minimum_sources),
        }
    }
}

/// Declarative map of domain label → override rules.
///
/// ```toml
/// [domains.research]
/// singleton_threshold = 0.1
/// minimum_sources = 3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    pub domains: HashMap<String, DomainRules>,
}

impl DomainConfig {
    /// Parse from TOML text.
    pub fn from_toml_str(raw: &str) -> VeracityResult<Self> {
        toml::from_str(raw).map_err(|e| VeracityError::Config {
            reason: e.to_string(),
        })
    }

    /// Resolve a domain label to a full validator config.
    /// Unknown or absent domains resolve to the defaults.
    pub fn resolve(&self, domain: Option<&str>) -> ValidatorConfig {
        let base = ValidatorConfig::default();
        match domain.and_then(|d| self.domains.get(d)) {
            Some(rules) => rules.apply(base),
            None => base,
        }
    }
}
