//! Error types for the Veracity workspace.
//!
//! The scoring pipeline itself is infallible: it produces a result for any
//! text input, including the empty string. Errors originate only in the
//! surrounding layers — tool dispatch, argument decoding, config loading.

/// Result alias used throughout the workspace.
pub type VeracityResult<T> = Result<T, VeracityError>;

/// Top-level error for the tool and configuration layers.
#[derive(Debug, thiserror::Error)]
pub enum VeracityError {
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VeracityError {
    /// Shorthand for an `InvalidArguments` error.
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}
