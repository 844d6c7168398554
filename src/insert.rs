use std::cmp::Ordering;

/// Insert `element` into the sorted `vec`, keeping it sorted.
///
/// Equivalent to [`insert_in_order_by`] with `T`'s intrinsic ordering.
///
/// # NOTE
/// `vec` must already be sorted or the resulting position is meaningless.
/// This is not checked in release builds.
pub fn insert_in_order<T: Ord>(vec: &mut Vec<T>, element: T) {
    insert_in_order_by(vec, T::cmp, element);
}

/// Insert `element` into `vec`, which is sorted under `compare`, at the
/// position that keeps it sorted.
///
/// The index is found with a binary search. If elements equal to `element`
/// are already present, the new one lands at the index of the first of them,
/// shifting the whole equal run right by one.
///
/// # NOTE
/// `vec` must already be sorted under `compare` or the resulting position is
/// meaningless. This is not checked in release builds.
pub fn insert_in_order_by<T, F>(vec: &mut Vec<T>, mut compare: F, element: T)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(vec
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater));

    let idx = vec.partition_point(|probe| compare(probe, &element) == Ordering::Less);
    vec.insert(idx, element);
}
