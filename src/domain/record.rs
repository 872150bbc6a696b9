use crate::error::{CheckoutError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque key/value record exchanged with the wizard's collaborators.
///
/// The controller never inspects the shape of a record beyond merging it into
/// the transaction; each collaborator decides what keys it carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

/// Output of a category data-entry form.
pub type FormData = Record;

/// Identity returned by the authentication collaborator.
pub type UserData = Record;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from any value that serializes to a JSON object.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CheckoutError::ValidationError(format!(
                "expected an object, got {other}"
            ))),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies every entry of `other` into `self`; keys from `other` win.
    pub fn merge(&mut self, other: &Record) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}
