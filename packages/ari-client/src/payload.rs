//! Canonical representation of a decoded ARI message or response body.
//!
//! Everything the client parses goes through [`Payload`] first, so the rest of
//! the crate only ever sees a JSON object.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::EventError;

/// A JSON object received from the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Normalize a decoded JSON value into an object.
    ///
    /// Objects pass through. Arrays and scalars are rejected as malformed for
    /// `kind`.
    pub fn normalize(kind: &str, value: Value) -> Result<Self, EventError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(EventError::malformed(
                kind,
                format!("expected a JSON object, got {}", shape_of(&other)),
            )),
        }
    }

    /// Parse raw JSON text and normalize it.
    pub fn parse(kind: &str, text: &str) -> Result<Self, EventError> {
        let value: Value = serde_json::from_str(text)?;
        Self::normalize(kind, value)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The `type` discriminant, if present and a string.
    pub fn event_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Deserialize the whole object into `T`, reporting failures against `kind`.
    pub fn extract<T: DeserializeOwned>(&self, kind: &str) -> Result<T, EventError> {
        T::deserialize(Value::Object(self.0.clone()))
            .map_err(|e| EventError::malformed(kind, e))
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
