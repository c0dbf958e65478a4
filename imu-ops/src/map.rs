//! Keyed map operations.
//!
//! Keys go through [`Key`] before they touch the map, so any
//! `impl Into<Key>` works and numeric and string spellings collide.

use crate::Key;
use std::collections::BTreeMap;

/// A map from normalized keys to values.
pub type Map<V> = BTreeMap<Key, V>;

/// Returns `map` with `key` bound to `value`, overwriting any previous binding.
///
/// Identical to [`set`] for maps.
#[must_use]
pub fn add<V: Clone>(map: &Map<V>, key: impl Into<Key>, value: V) -> Map<V> {
    set(map, key, value)
}

/// Returns `map` with `key` bound to `value`. The key is added if absent.
#[must_use]
pub fn set<V: Clone>(map: &Map<V>, key: impl Into<Key>, value: V) -> Map<V> {
    let mut out = map.clone();
    out.insert(key.into(), value);
    out
}

/// Returns `map` without `key`. An absent key yields an equal copy.
#[must_use]
pub fn del<V: Clone>(map: &Map<V>, key: impl Into<Key>) -> Map<V> {
    let key: Key = key.into();
    let mut out = map.clone();
    out.remove(&key);
    out
}
