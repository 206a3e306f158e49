//! # veracity-tools
//!
//! The collaborator layer around the validation engine: a named-tool
//! registry with JSON argument dispatch, report renderers, an append-only
//! result history with statistics, a content-keyed result cache, and the
//! per-domain configuration loader.
//!
//! Everything here is presentation and transport plumbing. The engine
//! stays a pure function of (content, metadata, config); caching and
//! history live out here.

pub mod cache;
pub mod domains;
pub mod history;
pub mod interface;
pub mod registry;
pub mod report;

pub use interface::ValidationInterface;
pub use registry::ToolRegistry;
