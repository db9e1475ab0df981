//! Error types for dom-weft.
//!
//! This module defines the error types returned by node and node-list
//! operations. Every failure is a local, synchronous caller-misuse signal;
//! nothing here is transient or retryable.

use crate::node::NodeKind;

/// Error type for node and node-list operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A single-node proxy operation was invoked on an empty node list.
    #[error("{method} called on an empty node list")]
    EmptyList {
        /// The proxy method that was called.
        method: &'static str,
    },

    /// Direct index access outside the resolved valid range.
    #[error("index {index} is out of bounds for a list of {len} nodes")]
    IndexOutOfBounds { index: isize, len: usize },

    /// `import` was given a node of a kind it cannot coerce.
    #[error("cannot import a {kind} node into a document")]
    UnsupportedImport { kind: NodeKind },

    /// `wrap` was given a value whose node kind cannot act as a parent.
    #[error("cannot wrap a node inside a {kind} node")]
    InvalidWrapTarget { kind: NodeKind },

    /// `duplicate` or `repeat` was asked for zero copies of a node.
    #[error("duplicate requires a count of at least one")]
    InvalidDuplicateCount,

    /// An operation was invoked on a node kind that lacks the capability.
    #[error("{operation} is not supported on a {kind} node")]
    KindMismatch {
        operation: &'static str,
        kind: NodeKind,
    },

    /// A sibling-relative operation was invoked on a parentless node.
    #[error("{operation} requires a node with a parent")]
    Detached { operation: &'static str },
}

/// Result type alias for node and node-list operations.
pub type Result<T> = std::result::Result<T, Error>;
