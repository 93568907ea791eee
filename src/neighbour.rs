//! A result item returned by a query
use std::cmp::Ordering;

/// Represents the result of a nearest neighbour query, with `distance`
/// being the distance of the found point from the query point according
/// to the metric the query ran under, and `point` being the stored point
/// itself.
#[derive(Debug, Copy, Clone)]
pub struct Neighbour<A, const K: usize> {
    /// the distance of the found point from the query point according
    /// to the distance metric the query was run with
    pub distance: A,
    /// the stored point that was found by the query
    pub point: [A; K],
}

impl<A: PartialOrd, const K: usize> Ord for Neighbour<A, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

#[allow(unknown_lints)]
#[allow(clippy::non_canonical_partial_ord_impl)]
impl<A: PartialOrd, const K: usize> PartialOrd for Neighbour<A, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl<A: PartialEq, const K: usize> Eq for Neighbour<A, K> {}

impl<A: PartialEq, const K: usize> PartialEq for Neighbour<A, K> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.point == other.point
    }
}

impl<A, const K: usize> From<Neighbour<A, K>> for (A, [A; K]) {
    fn from(elem: Neighbour<A, K>) -> Self {
        (elem.distance, elem.point)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::neighbour::Neighbour;

    #[test]
    fn test_from_tuple() {
        let nn: (f32, [f32; 2]) = Neighbour::<f32, 2> {
            distance: 1.0f32,
            point: [1.0f32, 2.0f32],
        }
        .into();

        assert_eq!(nn.0, 1.0f32);
        assert_eq!(nn.1, [1.0f32, 2.0f32]);
    }

    #[test]
    fn test_partial_cmp() {
        let a = Neighbour {
            distance: 1.0f32,
            point: [0.0f32, 0.0],
        };
        let b = Neighbour {
            distance: 2.0f32,
            point: [1.0f32, 1.0],
        };

        assert_eq!(a.partial_cmp(&b).unwrap(), Ordering::Less);
    }
}
