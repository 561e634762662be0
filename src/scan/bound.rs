//! Bound algebra shared by row ranges and row sets.
//!
//! Everything here works on plain [`Bound`] pairs so the same helpers drive
//! membership, intersection and emptiness checks.

use std::{cmp::Ordering, ops::Bound};

/// Whether `key` lies inside `[start, end]` under the given inclusivity.
pub(crate) fn contains<K: Ord + ?Sized>(start: Bound<&K>, end: Bound<&K>, key: &K) -> bool {
    let start_ok = match start {
        Bound::Unbounded => true,
        Bound::Included(bound) => key >= bound,
        Bound::Excluded(bound) => key > bound,
    };
    if !start_ok {
        return false;
    }
    match end {
        Bound::Unbounded => true,
        Bound::Included(bound) => key <= bound,
        Bound::Excluded(bound) => key < bound,
    }
}

// Lower-bound order: Unbounded < Included(x) < Excluded(x) < Included(y) if x<y
fn cmp_lower<K: Ord>(a: &Bound<K>, b: &Bound<K>) -> Ordering {
    use Bound as B;
    match (a, b) {
        (B::Unbounded, B::Unbounded) => Ordering::Equal,
        (B::Unbounded, _) => Ordering::Less,
        (_, B::Unbounded) => Ordering::Greater,
        (B::Included(x), B::Included(y)) | (B::Excluded(x), B::Excluded(y)) => x.cmp(y),
        (B::Included(x), B::Excluded(y)) => x.cmp(y).then(Ordering::Less),
        (B::Excluded(x), B::Included(y)) => x.cmp(y).then(Ordering::Greater),
    }
}

// Upper-bound order: Excluded(x) < Included(x) < Excluded(y) if x<y; Unbounded is largest
fn cmp_upper<K: Ord>(a: &Bound<K>, b: &Bound<K>) -> Ordering {
    use Bound as B;
    match (a, b) {
        (B::Unbounded, B::Unbounded) => Ordering::Equal,
        (B::Unbounded, _) => Ordering::Greater,
        (_, B::Unbounded) => Ordering::Less,
        (B::Included(x), B::Included(y)) | (B::Excluded(x), B::Excluded(y)) => x.cmp(y),
        (B::Included(x), B::Excluded(y)) => x.cmp(y).then(Ordering::Greater),
        (B::Excluded(x), B::Included(y)) => x.cmp(y).then(Ordering::Less),
    }
}

/// The tighter (larger) of two lower bounds. On equal keys an open side wins.
pub(crate) fn max_lower<K: Ord>(a: Bound<K>, b: Bound<K>) -> Bound<K> {
    if cmp_lower(&a, &b) == Ordering::Less {
        b
    } else {
        a
    }
}

/// The tighter (smaller) of two upper bounds. On equal keys an open side wins.
pub(crate) fn min_upper<K: Ord>(a: Bound<K>, b: Bound<K>) -> Bound<K> {
    if cmp_upper(&a, &b) == Ordering::Greater {
        b
    } else {
        a
    }
}

/// Whether no key can satisfy both bounds.
pub(crate) fn is_empty_range<K: Ord>(start: &Bound<K>, end: &Bound<K>) -> bool {
    use Bound as B;
    match (start, end) {
        (B::Unbounded, _) | (_, B::Unbounded) => false,
        (B::Included(a), B::Included(b)) => a > b,
        (B::Included(a), B::Excluded(b))
        | (B::Excluded(a), B::Included(b))
        | (B::Excluded(a), B::Excluded(b)) => a >= b,
    }
}
