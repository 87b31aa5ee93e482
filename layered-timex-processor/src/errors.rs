//! Error types for batch processing.
//!
//! Only caller mistakes reach the caller as `Err`. Anything that goes wrong
//! with a single sentence is reported inside its
//! [`SentenceResult`](crate::SentenceResult) instead.

use thiserror::Error;

/// Errors that can occur while configuring or running the processor.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`ProcessorConfig`](crate::ProcessorConfig).
    #[error("failed to parse config {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// The dependency parser could not handle a batch.
    #[error("dependency parser failed: {message}")]
    Parser { message: String },

    /// A date string in none of the accepted layouts.
    #[error("invalid date {value:?}: expected YYYY-MM-DD, optionally followed by HH:MM or HH:MM:SS")]
    InvalidDate { value: String },

    /// A per-sentence input list does not line up with the sentences.
    #[error("{what} has {found} entries for {expected} sentences")]
    LengthMismatch {
        what: &'static str,
        found: usize,
        expected: usize,
    },

    /// Rendering results as JSON failed.
    #[error("failed to render json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for processor operations.
pub type ProcessResult<T> = Result<T, ProcessError>;
