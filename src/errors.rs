//! Error types for reading dependency records.

use thiserror::Error;

/// Errors that make a CoNLL-U sentence unusable.
///
/// Every variant is scoped to a single sentence: callers skip the sentence
/// and carry on with the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConlluError {
    /// A row did not have exactly ten tab-separated columns.
    #[error("line {line}: expected 10 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    /// The ID column was not a positive integer.
    #[error("line {line}: invalid token id {value:?}")]
    InvalidId { line: usize, value: String },

    /// The HEAD column was neither `0`, `_`, nor a positive integer.
    #[error("line {line}: invalid head {value:?}")]
    InvalidHead { line: usize, value: String },

    /// A HEAD pointed past the end of the sentence.
    #[error("token {index} points at head {head}, but the sentence has {len} tokens")]
    HeadOutOfRange { index: usize, head: usize, len: usize },

    /// No token was its own head.
    #[error("sentence has no root token")]
    NoRoot,

    /// More than one token was its own head.
    #[error("sentence has {count} root tokens")]
    MultipleRoots { count: usize },

    /// Following heads from a token never reached the root.
    #[error("head chain starting at token {index} does not reach the root")]
    Cycle { index: usize },

    /// The block held no token rows.
    #[error("sentence has no tokens")]
    Empty,
}

/// Result type for tree construction.
pub type ConlluResult<T> = Result<T, ConlluError>;
