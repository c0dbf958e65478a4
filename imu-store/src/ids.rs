//! Ids handed out to entities created without one.

use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// A random (v4) UUID, written as lowercase hyphen-grouped hex:
/// `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`.
///
/// Entities store it as a JSON string, so the only ways out are
/// [`Display`](fmt::Display) and `Value::from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(Uuid);

impl EntityId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl From<EntityId> for Value {
    fn from(id: EntityId) -> Self {
        Value::String(id.to_string())
    }
}
