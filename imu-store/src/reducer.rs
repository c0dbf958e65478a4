//! The canonical normalized reducer.
//!
//! | kind   | effect                                                          |
//! |--------|-----------------------------------------------------------------|
//! | create | bind `by_id[id]`, append `id` to `all_ids` unless already listed |
//! | update | bind `by_id[id]`; `all_ids` untouched, no existence check        |
//! | delete | drop `by_id[id]` and every listed occurrence of `id`            |
//! | other  | return the same `Arc`                                           |
//!
//! Ids are compared by their normalized [`Key`], so `42` and `"42"` name the
//! same entity. The reducer never generates ids: a create or update
//! without one is ignored.

use crate::{Action, CHARACTERS, Domain, Entity, EntityAction, EntityState};
use imu_ops::{Key, map, seq};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reduces the `characters` domain. `None` starts from the empty state.
#[must_use]
pub fn reduce(state: Option<Arc<EntityState>>, action: &Action) -> Arc<EntityState> {
    reduce_domain(&CHARACTERS, state, action)
}

/// Reduces one entity domain. Actions of other domains pass through.
#[must_use]
pub fn reduce_domain(
    domain: &Domain,
    state: Option<Arc<EntityState>>,
    action: &Action,
) -> Arc<EntityState> {
    let state = state.unwrap_or_default();
    let next = match domain.decode(action) {
        Some(EntityAction::Create(entity)) => create(domain, &state, entity),
        Some(EntityAction::Update(entity)) => update(domain, &state, entity),
        Some(EntityAction::Delete(id)) => delete(&state, &id),
        None => None,
    };

    match next {
        Some(next) => {
            debug!(
                domain = domain.name,
                kind = %action.kind,
                entities = next.all_ids.len(),
                "entity state updated"
            );
            Arc::new(next)
        }
        None => state,
    }
}

fn create(domain: &Domain, state: &EntityState, entity: Entity) -> Option<EntityState> {
    let Some(id) = entity.id().cloned() else {
        warn!(domain = domain.name, "create without an id; ignoring");
        return None;
    };
    let key = Key::from(&id);
    let all_ids = if state.lists(&key) {
        state.all_ids.clone()
    } else {
        seq::add(&state.all_ids, id)
    };
    Some(EntityState {
        by_id: map::set(&state.by_id, key, entity),
        all_ids,
    })
}

fn update(domain: &Domain, state: &EntityState, entity: Entity) -> Option<EntityState> {
    let Some(key) = entity.key() else {
        warn!(domain = domain.name, "update without an id; ignoring");
        return None;
    };
    Some(EntityState {
        by_id: map::set(&state.by_id, key, entity),
        all_ids: state.all_ids.clone(),
    })
}

fn delete(state: &EntityState, id: &Value) -> Option<EntityState> {
    let key = Key::from(id);
    if !state.by_id.contains_key(&key) && !state.lists(&key) {
        return None;
    }
    Some(EntityState {
        by_id: map::del(&state.by_id, key.clone()),
        all_ids: state
            .all_ids
            .iter()
            .filter(|listed| Key::from(*listed) != key)
            .cloned()
            .collect(),
    })
}
