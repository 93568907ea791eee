//! Ordering predicates over stored points.
//!
//! Everything the build and query phases need to compare points lives
//! here: a lexicographic total order over whole points, the per-dimension
//! ordering used to partition during construction and to choose a descent
//! direction during queries, and the tie-broken "is this candidate
//! closer" test. The total order is what makes partitioning well-defined
//! when coordinate values collide, and what makes query results
//! deterministic when two stored points are exactly equidistant from the
//! query.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::distance::DistanceMetric;
use crate::kdtree::Axis;

/// Lexicographic total order over points.
///
/// Coordinates are compared through [`OrderedFloat`], so the order stays
/// total even for degenerate values like NaN.
pub(crate) fn cmp_points<A: Axis, const K: usize>(a: &[A; K], b: &[A; K]) -> Ordering {
    for dim in 0..K {
        match OrderedFloat(a[dim]).cmp(&OrderedFloat(b[dim])) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// True iff `a` orders strictly before `b` along `dim`.
///
/// Equal coordinate values fall back to the whole-point lexicographic
/// order, so the predicate gives a consistent answer for tied values and
/// partitioning around it is well-defined.
pub(crate) fn smaller_in_dim<A: Axis, const K: usize>(a: &[A; K], b: &[A; K], dim: usize) -> bool {
    match OrderedFloat(a[dim]).cmp(&OrderedFloat(b[dim])) {
        Ordering::Less => true,
        Ordering::Equal => cmp_points(a, b) == Ordering::Less,
        Ordering::Greater => false,
    }
}

/// True iff `candidate` should replace `current_best` as the nearest
/// stored point to `query`: strictly closer under `D`, or exactly tied
/// and lexicographically smaller. The fallback makes the query winner
/// fully deterministic for equidistant points.
pub(crate) fn closer_to<A, D, const K: usize>(
    query: &[A; K],
    current_best: &[A; K],
    candidate: &[A; K],
) -> bool
where
    A: Axis,
    D: DistanceMetric<A, K>,
{
    let candidate_dist = OrderedFloat(D::dist(query, candidate));
    let best_dist = OrderedFloat(D::dist(query, current_best));
    match candidate_dist.cmp(&best_dist) {
        Ordering::Less => true,
        Ordering::Equal => cmp_points(candidate, current_best) == Ordering::Less,
        Ordering::Greater => false,
    }
}
