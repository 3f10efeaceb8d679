//! Error taxonomy shared by tree construction, parsing and rendering.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the tagwright crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way an operation on the tree can fail.
///
/// Errors are raised synchronously by the operation that violates its
/// contract. Because trees are immutable, a failed operation never leaves a
/// partially edited value behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument was rejected: an empty tag or attribute name, a style key
    /// or value containing `;`, or markup that does not yield exactly one root.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A `style` attribute contains a rule without a `:` separator.
    #[error("malformed style attribute: {0}")]
    Format(String),

    /// The value is in a state that does not permit the operation, such as
    /// rendering a self-closing element that has contents, or strict parsing
    /// of markup with syntax errors.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// An insertion index outside `0..=count`.
    #[error("cannot insert at index {index}, content count is {count}")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of content nodes at the time of the call.
        count: usize,
    },

    /// The output sink refused a write.
    #[error("failed to write markup")]
    Write(#[from] fmt::Error),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
