//! String-normalized map keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Borrow;
use std::fmt;

/// A map key in its canonical string form.
///
/// Every key is stored as text, so numbers, booleans and strings that print
/// the same collide: `Key::from(42) == Key::from("42")`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Creates a key from text, verbatim.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&String> for Key {
    fn from(text: &String) -> Self {
        Self(text.clone())
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Self(b.to_string())
    }
}

macro_rules! key_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Key {
                fn from(n: $t) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

key_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Key {
    fn from(n: f64) -> Self {
        Self(float_text(n))
    }
}

impl From<f32> for Key {
    fn from(n: f32) -> Self {
        Self(float_text(f64::from(n)))
    }
}

impl From<&Value> for Key {
    /// Strings are taken unquoted, numbers and booleans by their literal
    /// text, `null` as `"null"`. Arrays join their elements with `,`
    /// (`null` elements print empty) and objects all print as
    /// `"[object Object]"`, so distinct objects share one key.
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => Self(s.clone()),
            Value::Null => Self("null".to_owned()),
            other => Self(value_text(other)),
        }
    }
}

impl From<Value> for Key {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self(s),
            other => Self::from(&other),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                float_text(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

// Integral floats print without a fractional part so `1.0` and `1` collide.
// Magnitudes from 1e21 up, or below 1e-6, switch to exponent form (`1e+21`).
fn float_text(n: f64) -> String {
    if n.is_infinite() {
        let text = if n.is_sign_positive() { "Infinity" } else { "-Infinity" };
        text.to_owned()
    } else if n == 0.0 {
        "0".to_owned()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        n.to_string()
    }
}
