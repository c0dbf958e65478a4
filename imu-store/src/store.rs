//! The root state container.
//!
//! A [`Store`] owns the current state and the reducer that produces the
//! next one. The state is replaced wholesale on every dispatch, never
//! changed in place. `dispatch` takes `&mut self`, so dispatches on one
//! store are serialized; sharing a store across threads is up to the host.

use crate::{Action, RootState, legacy_root_reducer, root_reducer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Kind tag of the action dispatched when a store is created.
pub const INIT: &str = "@@imu/INIT";

type Reducer<S> = Box<dyn Fn(Option<Arc<S>>, &Action) -> Arc<S>>;
type Listener<S> = Box<dyn FnMut(&Arc<S>)>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A unidirectional state container.
pub struct Store<S> {
    reducer: Reducer<S>,
    state: Arc<S>,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_subscription: u64,
}

impl<S> Store<S> {
    /// Creates a store whose initial state is `reducer(None, INIT)`.
    pub fn new(reducer: impl Fn(Option<Arc<S>>, &Action) -> Arc<S> + 'static) -> Self {
        let state = reducer(None, &init_action());
        Self::assemble(Box::new(reducer), state)
    }

    /// Creates a store starting from `state` instead of the default.
    pub fn with_state(
        reducer: impl Fn(Option<Arc<S>>, &Action) -> Arc<S> + 'static,
        state: Arc<S>,
    ) -> Self {
        let state = reducer(Some(state), &init_action());
        Self::assemble(Box::new(reducer), state)
    }

    fn assemble(reducer: Reducer<S>, state: Arc<S>) -> Self {
        Self {
            reducer,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&self.state)
    }

    /// Runs `action` through the reducer, stores the result and notifies
    /// every listener in subscription order. Returns the new state.
    pub fn dispatch(&mut self, action: &Action) -> Arc<S> {
        let next = (self.reducer)(Some(Arc::clone(&self.state)), action);
        let changed = !Arc::ptr_eq(&next, &self.state);
        self.state = next;
        debug!(
            kind = %action.kind,
            changed,
            listeners = self.listeners.len(),
            "dispatched"
        );
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        Arc::clone(&self.state)
    }

    /// Registers a listener called after every dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&Arc<S>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Folds `actions` through the reducer from the initial state, without
    /// touching this store's state or listeners.
    #[must_use]
    pub fn replay<'a>(&self, actions: impl IntoIterator<Item = &'a Action>) -> Arc<S> {
        let initial = (self.reducer)(None, &init_action());
        actions
            .into_iter()
            .fold(initial, |state, action| (self.reducer)(Some(state), action))
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A store over [`RootState`] using the canonical reducer.
#[must_use]
pub fn create_store() -> Store<RootState> {
    Store::new(root_reducer)
}

/// A store over [`RootState`] using the slice reducers.
#[must_use]
pub fn create_legacy_store() -> Store<RootState> {
    Store::new(legacy_root_reducer)
}

fn init_action() -> Action {
    Action::new(INIT, Value::Null)
}
