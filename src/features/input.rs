//! Raw request input

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::error::{Error, Result};

/// A single raw field value as received from the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// JSON boolean
    Flag(bool),
    /// JSON string
    Text(String),
    /// Any other JSON value, kept in its JSON text form
    Other(String),
}

impl RawValue {
    /// Convert a JSON value; `null` counts as absent
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(flag) => Some(Self::Flag(*flag)),
            Value::String(text) => Some(Self::Text(text.clone())),
            other => Some(Self::Other(other.to_string())),
        }
    }
}

impl From<bool> for RawValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Request key to raw value mapping for one prediction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSymptomInput {
    values: FxHashMap<String, RawValue>,
}

impl RawSymptomInput {
    /// Create an empty input
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set the value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove the value for `key`
    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.values.remove(key)
    }

    /// Value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    /// Number of present fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no fields are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build from a decoded JSON request body
    ///
    /// The body must be an object. `null` members are dropped so they are
    /// reported as missing fields later on.
    pub fn from_json(body: &Value) -> Result<Self> {
        let object = body
            .as_object()
            .ok_or_else(|| Error::InvalidRequest("request body must be a JSON object".into()))?;

        Ok(object
            .iter()
            .filter_map(|(key, value)| RawValue::from_json(value).map(|raw| (key.clone(), raw)))
            .collect())
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawSymptomInput {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut input = Self::new();
        for (key, value) in iter {
            input.insert(key, value);
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_classifies_values() {
        let input = RawSymptomInput::from_json(&json!({
            "polyuria": true,
            "gender": "female",
            "alopecia": 1,
            "irritability": null,
        }))
        .unwrap();

        assert_eq!(input.get("polyuria"), Some(&RawValue::Flag(true)));
        assert_eq!(input.get("gender"), Some(&RawValue::Text("female".into())));
        assert_eq!(input.get("alopecia"), Some(&RawValue::Other("1".into())));
        assert_eq!(input.get("irritability"), None);
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let err = RawSymptomInput::from_json(&json!([true, false])).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_builder() {
        let input = RawSymptomInput::new().with("polyuria", false).with("gender", "Male");
        assert_eq!(input.get("polyuria"), Some(&RawValue::Flag(false)));
        assert_eq!(input.get("gender"), Some(&RawValue::Text("Male".into())));
    }
}
