//! # veracity-validation
//!
//! Three-stage validation of generated prose against reference sources,
//! producing a confidence-weighted score, pass/fail verdict, issue flags,
//! and a hallucination risk tier.
//!
//! ## Stages
//! 1. **Pre-Validation** — claim typing, ambiguity, scope, temporal
//!    context, abstention language, singleton detection
//! 2. **Generation Assessment** — per-claim confidence against sources,
//!    unsupported and computationally hard claims
//! 3. **Quality Assurance** — singleton rate, validation ratio,
//!    confidence-weighted score, bias checks, numeric risk
//!
//! Support estimation is approximate lexical overlap, not semantic
//! entailment. The known false positives/negatives of that heuristic are
//! part of the scoring contract.

pub mod claims;
pub mod compile;
pub mod detectors;
pub mod engine;
pub mod stages;

pub use engine::ValidationEngine;
