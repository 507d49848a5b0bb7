//! Collection checks

/// Inclusive item count check.
pub fn count_within<T>(items: &[T], min: usize, max: usize) -> bool {
    items.len() >= min && items.len() <= max
}

/// True when no two items compare equal.
///
/// Uses `PartialEq` so it works for values without a total order (floats);
/// quadratic, which is fine for form-sized lists.
pub fn all_unique<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, item)| !items[i + 1..].contains(item))
}
