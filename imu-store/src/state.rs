use crate::Entity;
use imu_ops::{Key, Map};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A normalized entity collection.
///
/// `by_id` is the lookup table, `all_ids` the canonical order. Values of
/// this type are never changed after construction; reducers build new ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityState {
    pub by_id: Map<Entity>,
    pub all_ids: Vec<Value>,
}

impl EntityState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: impl Into<Key>) -> Option<&Entity> {
        let key: Key = id.into();
        self.by_id.get(&key)
    }

    /// Returns true if `id` is listed in `all_ids`.
    #[must_use]
    pub fn lists(&self, id: impl Into<Key>) -> bool {
        let key: Key = id.into();
        self.all_ids.iter().any(|listed| Key::from(listed) == key)
    }

    /// Number of listed entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }

    /// Entities in `all_ids` order. Ids without a `by_id` entry are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.all_ids
            .iter()
            .filter_map(|id| self.by_id.get(&Key::from(id)))
    }

    /// Checks the normalization invariants: every `by_id` key matches its
    /// entity's id, and `all_ids` lists exactly the `by_id` keys once each.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        let keys_match = self
            .by_id
            .iter()
            .all(|(key, entity)| entity.key().as_ref() == Some(key));

        let mut seen = HashSet::new();
        let listed_once = self
            .all_ids
            .iter()
            .all(|id| seen.insert(Key::from(id)));

        keys_match
            && listed_once
            && seen.len() == self.by_id.len()
            && seen.iter().all(|key| self.by_id.contains_key(key))
    }
}
