use crate::models::{ValidationMetadata, ValidationResult};

/// Three-stage output validation.
pub trait IValidator: Send + Sync {
    /// Score a block of text against the supplied metadata.
    ///
    /// Infallible: every text input, including the empty string, yields a
    /// result. Zero-claim texts produce zeroed rates rather than errors.
    fn validate(&self, content: &str, metadata: &ValidationMetadata) -> ValidationResult;
}
