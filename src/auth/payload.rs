//! JSON payload assembly from submitted form entries.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::Serialize;
use serde_json::{Map, Value};

/// Field that may carry several values (checkbox group).
pub const TOPICS_FIELD: &str = "topics";

/// Encoding of the `topics` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TopicsShape {
    /// One value stays a string, several become an array.
    #[default]
    Collapse,
    /// Any selection is an array, even a single value. For endpoints that
    /// store and later iterate the field.
    List,
}

/// Flat field-name to value mapping posted as the request body.
///
/// Built fresh for every submission. Repeated names keep the last value,
/// except `topics`, which keeps all of them in order: none drops the key,
/// more than one becomes an array, and a single value follows `TopicsShape`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormPayload {
    fields: Map<String, Value>,
}

impl FormPayload {
    /// Assemble from `(name, value)` pairs in document order.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_entries_with(entries, TopicsShape::Collapse)
    }

    /// Like `from_entries`, with an explicit `topics` encoding. No selected
    /// topic omits the key in either shape.
    pub fn from_entries_with<I, K, V>(entries: I, shape: TopicsShape) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = Map::new();
        let mut topics = Vec::new();
        for (name, value) in entries {
            let name = name.into();
            let value = value.into();
            if name == TOPICS_FIELD {
                topics.push(value);
            } else {
                fields.insert(name, Value::String(value));
            }
        }

        match topics.len() {
            0 => {}
            1 if shape == TopicsShape::Collapse => {
                fields.insert(TOPICS_FIELD.to_owned(), Value::String(topics.remove(0)));
            }
            _ => {
                let list = topics.into_iter().map(Value::String).collect();
                fields.insert(TOPICS_FIELD.to_owned(), Value::Array(list));
            }
        }

        Self { fields }
    }

    /// String value of `name`, if present and scalar.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize to the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
