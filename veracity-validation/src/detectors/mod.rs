//! Whole-text and per-claim pattern detectors.

pub mod bias;
pub mod hardness;
pub mod singleton;
