//! Claim extraction and per-claim analysis.
//!
//! A claim is a trimmed sentence-like span. Each claim gets exactly one
//! type (keyword priority order) and a confidence tier derived from how
//! many sources lexically corroborate it.

pub mod classifier;
pub mod confidence;
pub mod segmenter;
pub mod support;
