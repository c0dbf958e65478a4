//! Two-slice reducer: `by_id` and `all_ids` reduced independently and
//! joined.
//!
//! Kept for compatibility with state produced by the older store. It
//! differs from [`reducer`](crate::reducer) in two ways:
//! - create always appends to `all_ids`, so re-creating an id lists it twice
//! - delete filters `all_ids` by exact JSON equality, so deleting `"42"`
//!   leaves a listed `42` behind

use crate::{Action, CHARACTERS, Domain, Entity, EntityAction, EntityState};
use imu_ops::{Map, map, seq};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Reduces the `characters` domain with the slice reducers.
#[must_use]
pub fn reduce(state: Option<Arc<EntityState>>, action: &Action) -> Arc<EntityState> {
    reduce_domain(&CHARACTERS, state, action)
}

/// Runs both slice reducers and joins the results. Returns the same `Arc`
/// when neither slice changed.
#[must_use]
pub fn reduce_domain(
    domain: &Domain,
    state: Option<Arc<EntityState>>,
    action: &Action,
) -> Arc<EntityState> {
    let state = state.unwrap_or_default();
    let by_id = by_id(domain, &state.by_id, action);
    let all_ids = all_ids(domain, &state.all_ids, action);
    if by_id.is_none() && all_ids.is_none() {
        return state;
    }
    Arc::new(EntityState {
        by_id: by_id.unwrap_or_else(|| state.by_id.clone()),
        all_ids: all_ids.unwrap_or_else(|| state.all_ids.clone()),
    })
}

/// The lookup slice. `None` means unchanged.
#[must_use]
pub fn by_id(domain: &Domain, state: &Map<Entity>, action: &Action) -> Option<Map<Entity>> {
    match domain.decode(action)? {
        EntityAction::Create(entity) | EntityAction::Update(entity) => {
            let Some(key) = entity.key() else {
                warn!(domain = domain.name, "entity without an id; ignoring");
                return None;
            };
            Some(map::set(state, key, entity))
        }
        EntityAction::Delete(id) => Some(map::del(state, &id)),
    }
}

/// The ordering slice. `None` means unchanged.
#[must_use]
pub fn all_ids(domain: &Domain, state: &[Value], action: &Action) -> Option<Vec<Value>> {
    match domain.decode(action)? {
        EntityAction::Create(entity) => Some(seq::add(state, entity.id()?.clone())),
        EntityAction::Update(_) => None,
        EntityAction::Delete(id) => Some(seq::del(state, &id)),
    }
}
