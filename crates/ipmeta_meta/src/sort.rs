//! Dependency-aware ordering of parameter lists.
//!
//! The ordering predicate is not a strict weak order: it mixes "referenced
//! by" with name order and can be cyclic. A hand-written merge sort is used
//! so that such inputs still produce a deterministic, stable result.

use ipmeta_model::Parameter;

/// Sorts `items` stably with the strict predicate `less`.
///
/// An element only moves ahead of an earlier one when `less(later,
/// earlier)` holds, so equal or unordered elements keep their input order.
/// Never panics, whatever `less` returns.
pub fn stable_sort_by<T, F>(items: Vec<T>, less: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }
    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let mut left = stable_sort_by(left, less).into_iter().peekable();
    let mut right = stable_sort_by(right, less).into_iter().peekable();

    let mut merged = Vec::with_capacity(left.len() + right.len());
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => less(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

/// Returns `true` if `user`'s value mentions `producer`'s value id.
fn references(user: &Parameter, producer: &Parameter) -> bool {
    !producer.value_id.is_empty() && user.value.contains(producer.value_id.as_str())
}

/// Ordering predicate: a parameter goes before the parameters whose values
/// reference it, otherwise names ascend.
pub fn parameter_before(current: &Parameter, next: &Parameter) -> bool {
    if references(next, current) {
        return true;
    }
    if references(current, next) {
        return false;
    }
    current.name < next.name
}

/// Sorts parameters with [`parameter_before`].
///
/// A producer is only guaranteed to precede its consumer when the merge
/// compares the two directly. With three or more parameters an unrelated
/// parameter can sit between them in a comparison and the consumer may stay
/// first: `A = "id_c+1", B = "5", C = "1"` keeps the order `[A, B, C]`.
pub fn sort_parameters(parameters: &mut Vec<Parameter>) {
    *parameters = stable_sort_by(std::mem::take(parameters), &parameter_before);
}
