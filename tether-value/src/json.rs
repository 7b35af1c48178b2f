//! Decoding trees from JSON, and encoding them back.

use alloc::string::ToString;
use core::fmt;

use crate::{VObject, Value, ValueType};

/// Error returned when a JSON document cannot become a tree.
#[derive(Debug)]
#[non_exhaustive]
pub enum JsonError {
    /// The input is not valid JSON.
    Syntax(serde_json::Error),
    /// The document parsed, but its root is not an object.
    NotAnObject {
        /// What the root actually was.
        found: ValueType,
    },
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::Syntax(err) => write!(f, "invalid JSON: {err}"),
            JsonError::NotAnObject { found } => {
                write!(f, "expected a JSON object at the root, found {found}")
            }
        }
    }
}

impl core::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            JsonError::Syntax(err) => Some(err),
            JsonError::NotAnObject { .. } => None,
        }
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::Syntax(err)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or_default()),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => items.into_iter().collect(),
            serde_json::Value::Object(map) => Value::Object(map.into()),
        }
    }
}

impl From<serde_json::Map<alloc::string::String, serde_json::Value>> for VObject {
    fn from(map: serde_json::Map<alloc::string::String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl Value {
    /// Encodes this value as JSON. Non-finite numbers become `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => items.iter().map(Value::to_json).collect(),
            Value::Object(obj) => obj.to_json(),
        }
    }
}

impl VObject {
    /// Decodes a JSON document whose root is an object.
    pub fn from_json_str(input: &str) -> Result<VObject, JsonError> {
        Self::from_json(serde_json::from_str(input)?)
    }

    /// Decodes a JSON document, given as bytes, whose root is an object.
    pub fn from_json_slice(input: &[u8]) -> Result<VObject, JsonError> {
        Self::from_json(serde_json::from_slice(input)?)
    }

    fn from_json(json: serde_json::Value) -> Result<VObject, JsonError> {
        match Value::from(json) {
            Value::Object(obj) => Ok(obj),
            other => Err(JsonError::NotAnObject {
                found: other.value_type(),
            }),
        }
    }

    /// Encodes this object as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries()
            .into_iter()
            .map(|(k, v)| (k, v.to_json()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

impl fmt::Display for VObject {
    /// Compact JSON rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json().to_string())
    }
}
