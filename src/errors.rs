//! Errors reported by tree construction and queries.

use thiserror::Error;

/// Errors from k-d tree operations.
///
/// Every variant is a recoverable caller error. Broken internal
/// invariants and out-of-range selection ranks are programming errors
/// and are covered by debug assertions instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A nearest-neighbour query against a tree with no stored points.
    #[error("cannot query an empty tree")]
    EmptyTree,

    /// A coordinate row supplied at the construction boundary did not
    /// have the tree's dimension count. Construction aborts without
    /// returning a partially built tree.
    #[error("point has {actual} coordinates, expected {expected}")]
    DimensionMismatch {
        /// The dimension count the tree is configured with.
        expected: usize,
        /// The coordinate count actually supplied.
        actual: usize,
    },

    /// The tree was configured with zero dimensions.
    #[error("dimension count must be at least 1")]
    ZeroDimension,
}
