//! Key enumeration and ordering.

use std::cmp::Ordering;

use nestwalk_types::{Container, KeyOrder, NodeKind};

/// True for objects and arrays.
#[must_use]
pub fn is_container<N: Container>(value: &N) -> bool {
    value.is_container()
}

/// Keys of `container` in lexicographic order of their string form.
///
/// Array indices are sorted as strings as well, so `"10"` comes before `"2"`.
/// Use [`sorted_keys_with`] and [`KeyOrder::Natural`] for numeric index order.
#[must_use]
pub fn sorted_keys<N: Container>(container: &N) -> Vec<String> {
    sorted_keys_with(container, KeyOrder::Lexicographic)
}

#[must_use]
pub fn sorted_keys_with<N: Container>(container: &N, order: KeyOrder) -> Vec<String> {
    let mut keys = container.keys();
    match (order, container.kind()) {
        (KeyOrder::Natural, NodeKind::Array) => keys.sort_unstable_by(|a, b| natural_cmp(a, b)),
        _ => keys.sort_unstable(),
    }
    keys
}

// Indices that don't parse sort after those that do.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<usize>(), b.parse::<usize>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
