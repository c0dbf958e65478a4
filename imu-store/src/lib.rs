//! Normalized entity state for imu.
//!
//! This crate holds the pieces a unidirectional store is made of:
//! - [`Entity`] — a JSON object with an optional `id`
//! - [`EntityId`] — random UUID v4 ids, assigned by action constructors
//! - [`Action`] / [`EntityActions`] — `{type, payload}` descriptors and their constructors
//! - [`EntityState`] — the `byId` / `allIds` pair
//! - [`reducer`] — the canonical normalized reducer
//! - [`slices`] — the older two-slice reducer, kept for its legacy behavior
//! - [`RootState`] / [`Actions`] — per-domain composition (`characters`)
//! - [`Store`] — dispatch, state access and subscriptions
//!
//! Reducers are pure functions of `(state, action)`. Randomness only
//! happens in [`EntityActions::create`].

mod action;
mod entity;
mod ids;
pub mod reducer;
mod root;
pub mod slices;
mod state;
mod store;

pub use action::{Action, CHARACTERS, Domain, EntityAction, EntityActions};
pub use entity::Entity;
pub use ids::EntityId;
pub use root::{Actions, RootState, actions, legacy_root_reducer, root_reducer};
pub use state::EntityState;
pub use store::{INIT, Store, SubscriptionId, create_legacy_store, create_store};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the fallible edges: parsing and lookups by name.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("unknown domain: {0}")]
    UnknownDomain(String),
}
