use crate::distance::DistanceMetric;
use crate::errors::Error;
use crate::kdtree::{Axis, KdTree, Node};
use crate::neighbour::Neighbour;
use crate::ordering::{closer_to, smaller_in_dim};

impl<A: Axis, const K: usize> KdTree<A, K> {
    /// Queries the tree to find the stored point nearest to `query`,
    /// using the specified distance metric.
    ///
    /// The search descends to the leaf the query point would occupy,
    /// then backtracks, visiting the far side of a node's splitting
    /// plane only when the current best distance does not rule it out.
    /// Exact distance ties are broken by the lexicographic order of the
    /// tied points, so the result is fully deterministic.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree holds no points; an empty tree
    /// has no nearest neighbour to return.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnn::KdTree;
    /// use kdnn::distance::SquaredEuclidean;
    ///
    /// let tree: KdTree<f64, 3> = KdTree::new_from_slice(&[
    ///     [1.0, 2.0, 5.0],
    ///     [2.0, 3.0, 6.0],
    /// ]);
    ///
    /// let nearest = tree.nearest_one::<SquaredEuclidean>(&[1.0, 2.0, 5.1]).unwrap();
    ///
    /// assert!((nearest.distance - 0.01f64).abs() < f64::EPSILON);
    /// assert_eq!(nearest.point, [1.0, 2.0, 5.0]);
    /// ```
    #[inline]
    pub fn nearest_one<D>(&self, query: &[A; K]) -> Result<Neighbour<A, K>, Error>
    where
        D: DistanceMetric<A, K>,
    {
        let root = self.root.as_deref().ok_or(Error::EmptyTree)?;
        let point = nearest_in_subtree::<A, D, K>(root, query, 0);

        Ok(Neighbour {
            distance: D::dist(query, &point),
            point,
        })
    }
}

fn nearest_in_subtree<A, D, const K: usize>(
    node: &Node<A, K>,
    query: &[A; K],
    dim: usize,
) -> [A; K]
where
    A: Axis,
    D: DistanceMetric<A, K>,
{
    let (near, far) = if smaller_in_dim(query, &node.point, dim) {
        (&node.left, &node.right)
    } else {
        (&node.right, &node.left)
    };
    let (near, far) = match (near.as_deref(), far.as_deref()) {
        (Some(near), far) => (near, far),
        // the side the query falls on is empty; the one existing child
        // is all there is left to search
        (None, Some(only)) => (only, None),
        (None, None) => return node.point,
    };

    let next_dim = (dim + 1) % K;
    let mut best = nearest_in_subtree::<A, D, K>(near, query, next_dim);
    if closer_to::<A, D, K>(query, &best, &node.point) {
        best = node.point;
    }

    if let Some(far) = far {
        // Everything beyond the splitting plane is at least `split_dist`
        // away along this dimension alone, so the far subtree only needs
        // visiting while the current best does not beat that bound.
        let split_dist = D::dist1(query[dim], node.point[dim]);
        let radius = D::dist(query, &best);
        if radius >= split_dist {
            let potential = nearest_in_subtree::<A, D, K>(far, query, next_dim);
            if closer_to::<A, D, K>(query, &best, &potential) {
                best = potential;
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::distance::{DistanceMetric, SquaredEuclidean};
    use crate::errors::Error;
    use crate::kdtree::{Axis, KdTree};
    use crate::ordering::cmp_points;

    type AX = f32;

    #[test]
    fn can_query_nearest_one_item() {
        let content_to_add: [[AX; 4]; 16] = [
            [0.9, 0.0, 0.9, 0.0],
            [0.4, 0.5, 0.4, 0.51],
            [0.12, 0.3, 0.12, 0.3],
            [0.7, 0.2, 0.7, 0.22],
            [0.13, 0.4, 0.13, 0.4],
            [0.6, 0.3, 0.6, 0.33],
            [0.2, 0.7, 0.2, 0.7],
            [0.14, 0.5, 0.14, 0.5],
            [0.3, 0.6, 0.3, 0.6],
            [0.10, 0.1, 0.10, 0.1],
            [0.16, 0.7, 0.16, 0.7],
            [0.1, 0.8, 0.1, 0.8],
            [0.15, 0.6, 0.15, 0.6],
            [0.5, 0.4, 0.5, 0.44],
            [0.8, 0.1, 0.8, 0.15],
            [0.11, 0.2, 0.11, 0.2],
        ];

        let tree: KdTree<AX, 4> = KdTree::new_from_slice(&content_to_add);
        assert_eq!(tree.size(), 16);

        let query_point = [0.78f32, 0.55, 0.78, 0.55];
        let result = tree.nearest_one::<SquaredEuclidean>(&query_point).unwrap();

        let expected = linear_search::<_, SquaredEuclidean, 4>(&content_to_add, &query_point);
        assert_eq!(result.point, expected.1);
        assert_eq!(result.distance, expected.0);

        let mut rng = ChaCha8Rng::seed_from_u64(23);
        for _ in 0..1000 {
            let query_point = [
                rng.random_range(0f32..1f32),
                rng.random_range(0f32..1f32),
                rng.random_range(0f32..1f32),
                rng.random_range(0f32..1f32),
            ];
            let expected = linear_search::<_, SquaredEuclidean, 4>(&content_to_add, &query_point);

            let result = tree.nearest_one::<SquaredEuclidean>(&query_point).unwrap();

            assert_eq!(result.distance, expected.0);
            assert_eq!(result.point, expected.1);
        }
    }

    #[test]
    fn can_query_nearest_one_item_large_scale() {
        const TREE_SIZE: usize = 100_000;
        const NUM_QUERIES: usize = 100;

        let mut rng = ChaCha8Rng::seed_from_u64(493);

        let content_to_add: Vec<[AX; 4]> = (0..TREE_SIZE)
            .map(|_| {
                [
                    rng.random::<AX>(),
                    rng.random::<AX>(),
                    rng.random::<AX>(),
                    rng.random::<AX>(),
                ]
            })
            .collect();

        let tree: KdTree<AX, 4> = KdTree::new_from_slice(&content_to_add);
        assert_eq!(tree.size(), TREE_SIZE);

        for _ in 0..NUM_QUERIES {
            let query_point = [
                rng.random::<AX>(),
                rng.random::<AX>(),
                rng.random::<AX>(),
                rng.random::<AX>(),
            ];
            let expected = linear_search::<_, SquaredEuclidean, 4>(&content_to_add, &query_point);

            let result = tree.nearest_one::<SquaredEuclidean>(&query_point).unwrap();

            assert_eq!(result.distance, expected.0);
            assert_eq!(result.point, expected.1);
        }
    }

    #[test]
    fn every_stored_point_is_its_own_nearest_neighbour() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let points: Vec<[f64; 3]> = (0..500)
            .map(|_| {
                [
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                ]
            })
            .collect();

        let tree: KdTree<f64, 3> = KdTree::new_from_slice(&points);

        for p in &points {
            let result = tree.nearest_one::<SquaredEuclidean>(p).unwrap();
            assert_eq!(result.point, *p);
            assert_eq!(result.distance, 0.0);
        }
    }

    #[test]
    fn equidistant_points_resolve_to_the_lexicographically_smallest() {
        // four corners of a square, all at squared distance 2 from the centre
        let points = vec![
            [1.0f64, 1.0],
            [1.0, -1.0],
            [-1.0, 1.0],
            [-1.0, -1.0],
        ];
        let tree: KdTree<f64, 2> = KdTree::new_from_slice(&points);

        let result = tree.nearest_one::<SquaredEuclidean>(&[0.0, 0.0]).unwrap();

        assert_eq!(result.point, [-1.0, -1.0]);
        assert_eq!(result.distance, 2.0);
    }

    #[test]
    fn querying_an_empty_tree_fails() {
        let tree: KdTree<f64, 2> = KdTree::new();

        let result = tree.nearest_one::<SquaredEuclidean>(&[1.0, 2.0]);

        assert_eq!(result.unwrap_err(), Error::EmptyTree);
    }

    #[test]
    fn answers_are_independent_of_input_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        let mut points: Vec<[f64; 2]> = (0..200)
            .map(|_| [rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)])
            .collect();

        let tree_a: KdTree<f64, 2> = KdTree::new_from_slice(&points);
        points.reverse();
        let tree_b: KdTree<f64, 2> = KdTree::new_from_slice(&points);

        for _ in 0..200 {
            let query = [rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)];
            let a = tree_a.nearest_one::<SquaredEuclidean>(&query).unwrap();
            let b = tree_b.nearest_one::<SquaredEuclidean>(&query).unwrap();
            assert_eq!(a.point, b.point);
        }
    }

    /// Brute-force reference: minimum distance, ties broken by the same
    /// lexicographic point order the tree uses.
    fn linear_search<A: Axis, D: DistanceMetric<A, K>, const K: usize>(
        content: &[[A; K]],
        query_point: &[A; K],
    ) -> (A, [A; K]) {
        let mut best_dist: A = A::infinity();
        let mut best_point: [A; K] = content[0];

        for p in content {
            let dist = D::dist(query_point, p);
            if dist < best_dist
                || (dist == best_dist && cmp_points(p, &best_point) == Ordering::Less)
            {
                best_point = *p;
                best_dist = dist;
            }
        }

        (best_dist, best_point)
    }
}
