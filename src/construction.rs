//! Batch construction of a balanced tree by in-place median partitioning.

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::errors::Error;
use crate::kdtree::{Axis, KdTree, Node};
use crate::ordering::smaller_in_dim;
use crate::select::select_nth_by;

impl<A: Axis, const K: usize> KdTree<A, K> {
    /// Builds a balanced tree from a slice of points.
    ///
    /// The points are copied into a scratch buffer that the build
    /// partitions in place; the caller's slice is never mutated. Each
    /// level selects the lower median under that level's splitting
    /// dimension, so the tree depth is minimal for the point count.
    ///
    /// An empty slice produces an empty tree.
    ///
    /// # Panics
    ///
    /// Panics if `K` is zero. A tree must have at least one dimension;
    /// use [`KdTree::try_from_rows`] if the dimension count is only
    /// known at runtime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnn::KdTree;
    ///
    /// let points = vec![[1.0f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
    /// let tree: KdTree<f64, 2> = KdTree::new_from_slice(&points);
    ///
    /// assert_eq!(tree.size(), 3);
    /// ```
    #[inline]
    pub fn new_from_slice(source: &[[A; K]]) -> Self {
        assert!(K > 0, "dimension count must be at least 1");

        Self::build(source.to_vec())
    }

    /// Builds a tree from runtime-sized coordinate rows.
    ///
    /// This is the construction boundary for callers whose point data is
    /// not statically sized. Every row must hold exactly `K`
    /// coordinates; validation happens before any tree node is created,
    /// so a failed call never yields a partially built tree.
    ///
    /// # Errors
    ///
    /// * [`Error::ZeroDimension`] if `K` is zero.
    /// * [`Error::DimensionMismatch`] if any row's length differs
    ///   from `K`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnn::{Error, KdTree};
    ///
    /// let rows = vec![vec![1.0f64, 2.0], vec![3.0, 4.0]];
    /// let tree: KdTree<f64, 2> = KdTree::try_from_rows(&rows).unwrap();
    /// assert_eq!(tree.size(), 2);
    ///
    /// let ragged = vec![vec![1.0f64, 2.0], vec![3.0]];
    /// let result: Result<KdTree<f64, 2>, _> = KdTree::try_from_rows(&ragged);
    /// assert_eq!(result.unwrap_err(), Error::DimensionMismatch { expected: 2, actual: 1 });
    /// ```
    pub fn try_from_rows(rows: &[Vec<A>]) -> Result<Self, Error> {
        if K == 0 {
            return Err(Error::ZeroDimension);
        }

        let mut points = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() != K {
                return Err(Error::DimensionMismatch {
                    expected: K,
                    actual: row.len(),
                });
            }
            points.push(std::array::from_fn(|dim| row[dim]));
        }

        Ok(Self::build(points))
    }

    fn build(mut points: Vec<[A; K]>) -> Self {
        let size = points.len();
        let root = Self::build_subtree(&mut points, 0);

        #[cfg(feature = "tracing")]
        event!(Level::DEBUG, size, dims = K, "k-d tree built");

        Self { root, size }
    }

    /// Places the lower median of `points` under the dimension-`dim`
    /// ordering at the midpoint, makes it this subtree's node, and
    /// recurses into the two halves with the next splitting dimension.
    fn build_subtree(points: &mut [[A; K]], dim: usize) -> Option<Box<Node<A, K>>> {
        if points.is_empty() {
            return None;
        }

        let mid = (points.len() - 1) / 2;
        select_nth_by(points, mid, |a, b| smaller_in_dim(a, b, dim));

        let next_dim = (dim + 1) % K;
        let (left, rest) = points.split_at_mut(mid);
        let point = rest[0];

        Some(Box::new(Node {
            point,
            left: Self::build_subtree(left, next_dim),
            right: Self::build_subtree(&mut rest[1..], next_dim),
        }))
    }
}

impl<A: Axis, const K: usize> From<&[[A; K]]> for KdTree<A, K> {
    fn from(slice: &[[A; K]]) -> Self {
        Self::new_from_slice(slice)
    }
}

impl<A: Axis, const K: usize> From<&Vec<[A; K]>> for KdTree<A, K> {
    fn from(vec: &Vec<[A; K]>) -> Self {
        Self::new_from_slice(vec)
    }
}
