//! In-place rank selection (quickselect).

use std::cmp::Ordering;

/// Rearranges `v` in place so that the element at `index` is the element
/// that would occupy that position if the whole slice were sorted by
/// `is_less`, everything before it compares not-greater, and everything
/// after it compares not-less. The slice is otherwise left unsorted.
///
/// The pivot is always the element currently occupying the target rank's
/// slot, which gives expected O(n) behaviour on coordinate data but no
/// adversarial worst-case guarantee. Randomising the pivot here would
/// silently change which of several tied elements lands at the median,
/// and with it the shape of trees built on top of this.
///
/// `index` must be within `v`; an out-of-range rank is a caller error.
pub(crate) fn select_nth_by<E, F>(v: &mut [E], index: usize, mut is_less: F)
where
    F: FnMut(&E, &E) -> bool,
{
    debug_assert!(index < v.len(), "selection rank out of range");
    select_rank(v, index, &mut is_less);
}

fn select_rank<E, F>(v: &mut [E], index: usize, is_less: &mut F)
where
    F: FnMut(&E, &E) -> bool,
{
    if v.len() <= 1 {
        return;
    }
    let mid = partition(v, index, is_less);
    match mid.cmp(&index) {
        Ordering::Equal => {}
        Ordering::Greater => select_rank(&mut v[..mid], index, is_less),
        Ordering::Less => select_rank(&mut v[mid + 1..], index - mid - 1, is_less),
    }
}

/// Lomuto partition around the element initially at `pivot`.
///
/// The pivot is parked at the end of the slice, strictly-smaller elements
/// are swapped to the front, and the pivot is swapped back into the gap.
/// Returns the pivot's final index.
fn partition<E, F>(v: &mut [E], pivot: usize, is_less: &mut F) -> usize
where
    F: FnMut(&E, &E) -> bool,
{
    let last = v.len() - 1;
    v.swap(pivot, last);

    let mut store = 0;
    for i in 0..last {
        if is_less(&v[i], &v[last]) {
            v.swap(i, store);
            store += 1;
        }
    }

    v.swap(store, last);
    store
}
