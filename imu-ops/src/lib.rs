//! Immutable updates for sequences and string-keyed maps.
//!
//! Every operation returns a new container and leaves its argument alone:
//!
//! - [`add`] appends to a sequence, or binds a key in a map
//! - [`set`] replaces matching elements in a sequence, or binds a key in a map
//! - [`del`] removes every matching element from a sequence, or a key from a map
//!
//! The facade functions are generic over the [`Immutable`] capability.
//! The concrete behavior lives in two explicitly named modules, [`seq`] and
//! [`map`], and `serde_json::Value` picks between them at runtime by
//! looking at whether it holds an array or an object (see [`json`]).
//!
//! Map keys are always normalized to a [`Key`], so `42` and `"42"` address
//! the same entry.

pub mod json;
mod key;
pub mod map;
pub mod seq;

pub use json::Args;
pub use key::Key;
pub use map::Map;

/// A container that can produce updated copies of itself.
///
/// The argument types differ per shape: a sequence adds a bare value,
/// a map adds a `(key, value)` pair.
pub trait Immutable: Sized {
    /// Arguments accepted by [`Immutable::add`].
    type Add;
    /// Arguments accepted by [`Immutable::set`].
    type Set;
    /// Arguments accepted by [`Immutable::del`].
    type Del;

    /// Returns a copy with the new element or entry added.
    #[must_use]
    fn add(&self, args: Self::Add) -> Self;

    /// Returns a copy with matching elements or the keyed entry replaced.
    #[must_use]
    fn set(&self, args: Self::Set) -> Self;

    /// Returns a copy without the matching elements or the keyed entry.
    #[must_use]
    fn del(&self, args: Self::Del) -> Self;
}

impl<T> Immutable for Vec<T>
where
    T: Clone + PartialEq,
{
    type Add = T;
    type Set = (T, T);
    type Del = T;

    fn add(&self, value: T) -> Self {
        seq::add(self, value)
    }

    fn set(&self, (old, new): (T, T)) -> Self {
        seq::set(self, &old, new)
    }

    fn del(&self, value: T) -> Self {
        seq::del(self, &value)
    }
}

impl<V> Immutable for Map<V>
where
    V: Clone,
{
    type Add = (Key, V);
    type Set = (Key, V);
    type Del = Key;

    fn add(&self, (key, value): (Key, V)) -> Self {
        map::add(self, key, value)
    }

    fn set(&self, (key, value): (Key, V)) -> Self {
        map::set(self, key, value)
    }

    fn del(&self, key: Key) -> Self {
        map::del(self, key)
    }
}

/// Returns `target` with `args` added. See [`Immutable::add`].
#[must_use]
pub fn add<C: Immutable>(target: &C, args: C::Add) -> C {
    target.add(args)
}

/// Returns `target` with `args` applied as a replacement. See [`Immutable::set`].
#[must_use]
pub fn set<C: Immutable>(target: &C, args: C::Set) -> C {
    target.set(args)
}

/// Returns `target` with `args` removed. See [`Immutable::del`].
#[must_use]
pub fn del<C: Immutable>(target: &C, args: C::Del) -> C {
    target.del(args)
}
