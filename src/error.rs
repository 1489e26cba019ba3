//! Errors reported by [`OrderedTree`](crate::OrderedTree) operations.
//!
//! Every failure is signaled synchronously to the caller and leaves the tree
//! exactly as it was before the call.

/// The error type for tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value is already present. Raised by insertion, which never
    /// overwrites.
    #[error("duplicate value {0} not allowed")]
    DuplicateValue(i64),

    /// The value is not present in the tree.
    #[error("value {0} not found")]
    NotFound(i64),

    /// The operation needs at least one node but the tree has none.
    #[error("tree is empty")]
    EmptyTree,

    /// The requested rank is outside `1..=len`.
    #[error("k={k} out of range for a tree of {len} nodes")]
    OutOfRange {
        /// The 1-indexed rank that was requested.
        k: usize,
        /// The number of nodes in the tree at the time of the call.
        len: usize,
    },

    /// The name does not denote a reversed traversal.
    #[error("unsupported traversal {0:?}")]
    UnsupportedTraversal(String),

    /// The name does not denote a traversal order.
    #[error("unknown order {0:?}")]
    UnknownOrder(String),
}
