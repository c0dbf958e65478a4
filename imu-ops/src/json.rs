//! Runtime-shape dispatch for `serde_json::Value`.
//!
//! A JSON array takes the [`seq`](crate::seq) path, a JSON object the
//! [`map`](crate::map) path. Arguments are positional, one or two values,
//! and are read according to the shape found:
//!
//! | op    | array                       | object                |
//! |-------|-----------------------------|-----------------------|
//! | `add` | append the first value      | bind first → second   |
//! | `set` | replace first with second   | bind first → second   |
//! | `del` | drop every first            | remove key first      |
//!
//! Arguments that do not fit (a lone key for an object `add`, any scalar
//! target) return an unchanged copy and log a warning.

use crate::{Immutable, Key, seq};
use serde_json::Value;
use tracing::warn;

/// Positional arguments for the JSON operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Args {
    /// A single value: an element, or a key.
    One(Value),
    /// Two values: `(key, value)` or `(old, new)`.
    Two(Value, Value),
}

impl Args {
    /// Returns the first positional argument.
    #[must_use]
    pub fn first(&self) -> &Value {
        match self {
            Self::One(first) | Self::Two(first, _) => first,
        }
    }

    /// Returns the second positional argument, if given.
    #[must_use]
    pub fn second(&self) -> Option<&Value> {
        match self {
            Self::One(_) => None,
            Self::Two(_, second) => Some(second),
        }
    }
}

impl From<Value> for Args {
    fn from(value: Value) -> Self {
        Self::One(value)
    }
}

impl From<(Value, Value)> for Args {
    fn from((first, second): (Value, Value)) -> Self {
        Self::Two(first, second)
    }
}

impl Immutable for Value {
    type Add = Args;
    type Set = Args;
    type Del = Args;

    fn add(&self, args: Args) -> Self {
        match self {
            Value::Array(items) => Value::Array(seq::add(items, args.first().clone())),
            Value::Object(_) => bind(self, "add", &args),
            other => unchanged(other, "add"),
        }
    }

    fn set(&self, args: Args) -> Self {
        match self {
            Value::Array(items) => match args.second() {
                Some(new) => Value::Array(seq::set(items, args.first(), new.clone())),
                None => {
                    warn!(op = "set", "array set needs a replacement value; ignoring");
                    self.clone()
                }
            },
            Value::Object(_) => bind(self, "set", &args),
            other => unchanged(other, "set"),
        }
    }

    fn del(&self, args: Args) -> Self {
        match self {
            Value::Array(items) => Value::Array(seq::del(items, args.first())),
            Value::Object(fields) => {
                let key = Key::from(args.first());
                let mut out = fields.clone();
                out.remove(key.as_str());
                Value::Object(out)
            }
            other => unchanged(other, "del"),
        }
    }
}

fn bind(target: &Value, op: &'static str, args: &Args) -> Value {
    let (Value::Object(fields), Some(value)) = (target, args.second()) else {
        warn!(op, "object update needs a key and a value; ignoring");
        return target.clone();
    };
    let mut out = fields.clone();
    out.insert(Key::from(args.first()).into_string(), value.clone());
    Value::Object(out)
}

fn unchanged(target: &Value, op: &'static str) -> Value {
    warn!(op, kind = kind_of(target), "target is neither an array nor an object; ignoring");
    target.clone()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
