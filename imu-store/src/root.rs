//! Composition of the entity domains under named keys.

use crate::{
    Action, CHARACTERS, Domain, EntityActions, EntityState, Error, Result, reducer, slices,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The whole application state: one entity collection per domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootState {
    pub characters: Arc<EntityState>,
}

/// Action constructors, keyed like [`RootState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actions {
    pub characters: EntityActions,
}

impl Actions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            characters: EntityActions::new(CHARACTERS),
        }
    }

    /// Looks up a domain's constructors by its key.
    pub fn domain(&self, name: &str) -> Result<&EntityActions> {
        if name == CHARACTERS.name {
            Ok(&self.characters)
        } else {
            Err(Error::UnknownDomain(name.to_owned()))
        }
    }
}

impl Default for Actions {
    fn default() -> Self {
        Self::new()
    }
}

/// The action constructors for every domain.
#[must_use]
pub const fn actions() -> Actions {
    Actions::new()
}

type DomainReducer = fn(&Domain, Option<Arc<EntityState>>, &Action) -> Arc<EntityState>;

/// Feeds `action` to every domain with the canonical reducer.
#[must_use]
pub fn root_reducer(state: Option<Arc<RootState>>, action: &Action) -> Arc<RootState> {
    combine(state, action, reducer::reduce_domain)
}

/// Feeds `action` to every domain with the slice reducers.
#[must_use]
pub fn legacy_root_reducer(state: Option<Arc<RootState>>, action: &Action) -> Arc<RootState> {
    combine(state, action, slices::reduce_domain)
}

// Returns the previous root when no domain produced a new state.
fn combine(
    state: Option<Arc<RootState>>,
    action: &Action,
    reduce: DomainReducer,
) -> Arc<RootState> {
    let state = state.unwrap_or_default();
    let characters = reduce(&CHARACTERS, Some(Arc::clone(&state.characters)), action);
    if Arc::ptr_eq(&characters, &state.characters) {
        return state;
    }
    Arc::new(RootState { characters })
}
