//! The three sequential validation stages.
//!
//! Each stage is a pure function from (text, metadata, prior stage output)
//! to a stage record; stage N+1 depends on stage N's full output and there
//! is no branching back.

pub mod generation;
pub mod pre_validation;
pub mod quality;

pub use generation::GenerationAssessment;
pub use pre_validation::PreValidation;
pub use quality::QualityScores;
