// src/domain/metadata.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{HASH_KEY, NOTES_KEY};

/// The key/value description of a model asset as served by the local
/// metadata endpoint. Keys stay in the order the service sent them
/// (`serde_json` is built with `preserve_order`).
///
/// Two keys carry meaning beyond display: the user notes and the
/// content hash. Everything else is shown verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord(Map<String, Value>);

impl MetadataRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Free-text user notes, if the record carries any.
    pub fn notes(&self) -> Option<&str> {
        self.0.get(NOTES_KEY).and_then(Value::as_str)
    }

    /// SHA-256 content hash used as the external lookup key.
    pub fn content_hash(&self) -> Option<&str> {
        self.0.get(HASH_KEY).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All fields in insertion order, values coerced to display text.
    pub fn entries(&self) -> impl Iterator<Item = (&str, String)> {
        self.0.iter().map(|(k, v)| (k.as_str(), coerce(v)))
    }
}

/// String values render bare, null renders empty, anything else renders
/// as its compact JSON text. No recursion into nested structures.
fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
