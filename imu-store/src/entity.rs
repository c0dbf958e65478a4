use crate::{Error, Result};
use imu_ops::Key;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored entity: a JSON object whose `id` field names it.
///
/// The `id` may be any JSON value, or absent until an action constructor
/// fills it in. `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Map<String, Value>);

impl Entity {
    /// Creates an entity with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            Value::Null => Err(Error::NotAnObject("null")),
            Value::Bool(_) => Err(Error::NotAnObject("bool")),
            Value::Number(_) => Err(Error::NotAnObject("number")),
            Value::String(_) => Err(Error::NotAnObject("string")),
            Value::Array(_) => Err(Error::NotAnObject("array")),
        }
    }

    /// The `id` field, unless missing or `null`.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id").filter(|id| !id.is_null())
    }

    /// The normalized map key for this entity's id.
    #[must_use]
    pub fn key(&self) -> Option<Key> {
        self.id().map(Key::from)
    }

    /// Returns a copy with `id` set.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.0.insert("id".to_owned(), id.into());
        self
    }

    /// Returns a copy with one field set.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Returns a top-level field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Extract a string value using a JSON pointer (e.g., "/firstName").
    #[must_use]
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.pointer(pointer).and_then(Value::as_str)
    }

    /// Extract a numeric value using a JSON pointer.
    #[must_use]
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.pointer(pointer).and_then(Value::as_f64)
    }

    /// All fields, `id` included.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts back into a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    // The first segment is resolved here, the remainder by `Value::pointer`.
    fn pointer(&self, pointer: &str) -> Option<&Value> {
        let rest = pointer.strip_prefix('/')?;
        let (head, tail) = match rest.find('/') {
            Some(split) => (&rest[..split], &rest[split..]),
            None => (rest, ""),
        };
        let field = self.0.get(&unescape(head))?;
        if tail.is_empty() {
            Some(field)
        } else {
            field.pointer(tail)
        }
    }
}

// RFC 6901: `~1` is `/`, `~0` is `~`, decoded in that order.
fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

impl TryFrom<Value> for Entity {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for Entity {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<Entity> for Value {
    fn from(entity: Entity) -> Self {
        entity.into_value()
    }
}
