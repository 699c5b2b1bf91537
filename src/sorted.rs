//! Helpers for vectors kept in ascending order.
//!
//! Used for small ordered sets (piece indices, peer ids) where a binary search
//! over a `Vec` beats a tree.

/// Returns the position of `value` in the ascending slice `sorted`.
pub fn sorted_find<T: Ord>(sorted: &[T], value: &T) -> Option<usize> {
    let index = sorted.partition_point(|item| item < value);
    match sorted.get(index) {
        Some(item) if item == value => Some(index),
        _ => None,
    }
}

/// Inserts `value` into `sorted`, keeping it ascending.
///
/// An equal element is inserted in front of the existing ones.
pub fn sorted_insert<T: Ord>(sorted: &mut Vec<T>, value: T) {
    let index = sorted.partition_point(|item| *item < value);
    sorted.insert(index, value);
}
