//! Actions and their constructors.
//!
//! An [`Action`] is the serializable envelope `{type, payload}`. A
//! [`Domain`] knows which type tags belong to it and decodes matching
//! envelopes into an [`EntityAction`]. Envelopes from other domains, or
//! with unknown tags, decode to `None` and reducers pass the state through.

use crate::{Entity, EntityId, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// An intended state transition: a kind tag plus its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Domain-prefixed kind tag, e.g. `CHARACTERS_CREATE`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Entity for create/update, id for delete.
    #[serde(default)]
    pub payload: Value,
}

impl Action {
    /// Creates an action from a kind tag and payload.
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            kind: kind.into(),
            payload: payload.into(),
        }
    }

    /// Parses an action from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the action to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A decoded entity action.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityAction {
    Create(Entity),
    Update(Entity),
    Delete(Value),
}

/// The kind tags owned by one entity domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    /// Key of the domain in the root state and in [`Actions`](crate::Actions).
    pub name: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

/// The `characters` domain.
pub const CHARACTERS: Domain = Domain {
    name: "characters",
    create: "CHARACTERS_CREATE",
    update: "CHARACTERS_UPDATE",
    delete: "CHARACTERS_DELETE",
};

impl Domain {
    /// Decodes `action` if its kind tag belongs to this domain.
    ///
    /// A create or update whose payload is not an object is dropped with a
    /// warning.
    #[must_use]
    pub fn decode(&self, action: &Action) -> Option<EntityAction> {
        let kind = action.kind.as_str();
        if kind == self.create || kind == self.update {
            let entity = match Entity::from_value(action.payload.clone()) {
                Ok(entity) => entity,
                Err(err) => {
                    warn!(domain = self.name, kind, %err, "dropping malformed entity payload");
                    return None;
                }
            };
            if kind == self.create {
                Some(EntityAction::Create(entity))
            } else {
                Some(EntityAction::Update(entity))
            }
        } else if kind == self.delete {
            Some(EntityAction::Delete(action.payload.clone()))
        } else {
            None
        }
    }
}

/// Action constructors bound to one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityActions {
    domain: Domain,
}

impl EntityActions {
    #[must_use]
    pub const fn new(domain: Domain) -> Self {
        Self { domain }
    }

    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Builds a create action. An entity without an `id` gets a fresh
    /// [`EntityId`] here, so the reducer never has to invent one.
    #[must_use]
    pub fn create(&self, entity: Entity) -> Action {
        let entity = if entity.id().is_some() {
            entity
        } else {
            entity.with_id(EntityId::new())
        };
        Action::new(self.domain.create, entity)
    }

    /// Builds an update action. The entity is passed through as-is.
    #[must_use]
    pub fn update(&self, entity: Entity) -> Action {
        Action::new(self.domain.update, entity)
    }

    /// Builds a delete action for `id`.
    #[must_use]
    pub fn delete(&self, id: impl Into<Value>) -> Action {
        Action::new(self.domain.delete, id)
    }
}
