//! The k-d tree itself: a binary tree keyed on alternating dimensions,
//! built once from a batch of points and queried read-only afterwards.

use std::fmt::Debug;

use num_traits::float::FloatCore;

use crate::iter::Iter;

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the first generic parameter, `A`,
/// on [`KdTree`]. This will be [`f64`] or [`f32`].
pub trait Axis: FloatCore + Default + Debug + Copy + Sync + Send {}
impl<T: FloatCore + Default + Debug + Copy + Sync + Send> Axis for T {}

/// One stored point plus exclusive ownership of up to two subtrees.
///
/// Under the splitting dimension assigned to this node's depth, the
/// node's point is not-smaller than everything in the left subtree and
/// not-greater than everything in the right subtree, with ties resolved
/// by the lexicographic whole-point order. Children are owned boxes, so
/// dropping a node drops its whole subtree exactly once and cloning a
/// node clones the subtree with no aliasing.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<A, const K: usize> {
    pub(crate) point: [A; K],
    pub(crate) left: Option<Box<Node<A, K>>>,
    pub(crate) right: Option<Box<Node<A, K>>>,
}

/// A balanced k-d tree over points with `K` coordinates of type `A`.
///
/// The tree is constructed in one shot from a batch of points (see
/// [`KdTree::new_from_slice`] and [`KdTree::try_from_rows`]) and is
/// immutable from then on. Queries take `&self` and keep all scratch
/// state on the call stack, so a built tree can serve any number of
/// concurrent readers.
///
/// `Clone` produces a fully independent deep copy: new nodes, same
/// point values, nothing shared with the source.
///
/// # Examples
///
/// ```rust
/// use kdnn::KdTree;
/// use kdnn::distance::SquaredEuclidean;
///
/// let points = vec![[1.0f64, 2.0, 5.0], [2.0, 3.0, 6.0]];
/// let tree: KdTree<f64, 3> = KdTree::new_from_slice(&points);
///
/// let nearest = tree.nearest_one::<SquaredEuclidean>(&[1.0, 2.0, 5.1]).unwrap();
///
/// assert_eq!(nearest.point, [1.0, 2.0, 5.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KdTree<A, const K: usize> {
    pub(crate) root: Option<Box<Node<A, K>>>,
    pub(crate) size: usize,
}

impl<A: Axis, const K: usize> Default for KdTree<A, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Axis, const K: usize> KdTree<A, K> {
    /// Creates an empty tree.
    ///
    /// An empty tree stores nothing and cannot answer nearest-neighbour
    /// queries; it exists so that "no points yet" has a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnn::KdTree;
    ///
    /// let tree: KdTree<f64, 3> = KdTree::new();
    ///
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of points stored in the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnn::KdTree;
    ///
    /// let tree: KdTree<f64, 3> = KdTree::new_from_slice(&[
    ///     [1.0, 2.0, 5.0],
    ///     [1.1, 2.1, 5.1],
    /// ]);
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree stores no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterates over all stored points, in the in-order traversal order
    /// of the underlying tree. Treat the order as arbitrary but stable
    /// for a given tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnn::KdTree;
    ///
    /// let tree: KdTree<f64, 2> = KdTree::new_from_slice(&[[2.0, 3.0], [1.0, 2.0]]);
    ///
    /// let mut points: Vec<_> = tree.iter().collect();
    /// points.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(points, vec![[1.0, 2.0], [2.0, 3.0]]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, A, K> {
        Iter::new(self)
    }
}
