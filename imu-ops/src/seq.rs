//! Sequence operations.
//!
//! Elements are compared with `PartialEq`. Every function copies the input
//! slice into a fresh `Vec`.

/// Returns the elements of `seq` followed by `value`.
#[must_use]
pub fn add<T: Clone>(seq: &[T], value: T) -> Vec<T> {
    let mut out = Vec::with_capacity(seq.len() + 1);
    out.extend_from_slice(seq);
    out.push(value);
    out
}

/// Returns `seq` with every element equal to `old` replaced by `new`.
///
/// No match is not an error: the result is an equal copy.
#[must_use]
pub fn set<T: Clone + PartialEq>(seq: &[T], old: &T, new: T) -> Vec<T> {
    seq.iter()
        .map(|item| if item == old { new.clone() } else { item.clone() })
        .collect()
}

/// Returns `seq` without any element equal to `value`.
#[must_use]
pub fn del<T: Clone + PartialEq>(seq: &[T], value: &T) -> Vec<T> {
    seq.iter().filter(|item| *item != value).cloned().collect()
}
