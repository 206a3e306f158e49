use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-supplied context for one validation call.
///
/// Immutable for the duration of the call. A missing source list is an
/// empty list, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationMetadata {
    /// Reference source texts. Order irrelevant, duplicates permitted.
    pub sources: Vec<String>,
    /// Scope definition for the content.
    pub scope: Option<String>,
    /// Domain/field label, used by callers to select override rules.
    pub domain: Option<String>,
    /// When the content was created.
    pub created_at: Option<DateTime<Utc>>,
}

impl ValidationMetadata {
    /// Metadata carrying only source texts.
    pub fn with_sources(sources: Vec<String>) -> Self {
        Self {
            sources,
            ..Default::default()
        }
    }

    /// Whether the caller supplied a non-empty scope string.
    pub fn has_scope(&self) -> bool {
        self.scope.as_deref().is_some_and(|s| !s.is_empty())
    }
}
