//! In-place lexicographic permutation stepping.

/// Advance `order` to the next permutation in lexicographic order.
///
/// Returns `false` (leaving `order` sorted ascending again) once the last
/// permutation has been passed.
pub(crate) fn next_permutation(order: &mut [usize]) -> bool {
    // Longest non-increasing suffix starts at `pivot + 1`.
    let Some(pivot) = order.windows(2).rposition(|pair| pair.first() < pair.last()) else {
        order.reverse();
        return false;
    };
    let Some(&pivot_value) = order.get(pivot) else {
        return false;
    };
    let Some(successor) = order.iter().rposition(|&value| value > pivot_value) else {
        return false;
    };
    order.swap(pivot, successor);
    if let Some(suffix) = order.get_mut(pivot.saturating_add(1)..) {
        suffix.reverse();
    }
    true
}
