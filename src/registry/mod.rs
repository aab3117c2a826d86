//! Categorical encoder registry
//!
//! This module holds one fitted label encoder per trained model column. The
//! registry is loaded once from its exported JSON artifact and then shared
//! read-only by every request.
//!
//! Artifact format: a JSON object mapping each column name to its ordered
//! class list, e.g. `{"Gender": ["Female", "Male"], "Polyuria": ["No", "Yes"]}`.

pub mod encoder;

pub use encoder::CategoricalEncoder;

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};

/// Column name to encoder mapping
#[derive(Debug, Clone, Default)]
pub struct EncoderRegistry {
    encoders: FxHashMap<String, CategoricalEncoder>,
}

impl EncoderRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(column, classes)` pairs
    pub fn from_classes<I, C, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, Vec<S>)>,
        C: Into<String>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (column, classes) in columns {
            let column = column.into();
            let encoder = CategoricalEncoder::new(classes)
                .map_err(|e| Error::configuration(format!("Column '{column}': {e}")))?;
            registry.insert(column, encoder);
        }
        Ok(registry)
    }

    /// Parse the exported encoder artifact
    pub fn from_json_str(json: &str) -> Result<Self> {
        let columns: FxHashMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| Error::configuration(format!("Malformed encoder artifact: {e}")))?;
        Self::from_classes(columns)
    }

    /// Register (or replace) the encoder for `column`
    pub fn insert(&mut self, column: impl Into<String>, encoder: CategoricalEncoder) {
        self.encoders.insert(column.into(), encoder);
    }

    /// Encoder for `column`
    #[must_use]
    pub fn encoder(&self, column: &str) -> Option<&CategoricalEncoder> {
        self.encoders.get(column)
    }

    /// Encode `value` for `column`
    ///
    /// An unknown value is a request-level [`Error::UnknownCategory`]; an
    /// unknown column means the registry does not match the model and is a
    /// configuration error.
    pub fn encode(&self, column: &str, value: &str) -> Result<u32> {
        let encoder = self.encoder(column).ok_or_else(|| {
            Error::configuration(format!("No encoder registered for column '{column}'"))
        })?;
        encoder
            .encode(value)
            .ok_or_else(|| Error::unknown_category(column, value))
    }

    /// Registered column names, sorted
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.encoders.keys().map(String::as_str).sorted().collect()
    }

    /// Number of registered columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    /// Whether no columns are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }

    /// Check that the registered columns are exactly `expected`
    ///
    /// Both missing and unexpected columns are reported.
    pub fn validate_columns(&self, expected: &[&str]) -> Result<()> {
        let expected_set: FxHashSet<&str> = expected.iter().copied().collect();

        let missing = expected
            .iter()
            .filter(|column| !self.encoders.contains_key(**column))
            .map(|column| format!("'{column}'"))
            .join(", ");
        let unexpected = self
            .columns()
            .into_iter()
            .filter(|column| !expected_set.contains(column))
            .map(|column| format!("'{column}'"))
            .join(", ");

        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }

        let mut problems = Vec::new();
        if !missing.is_empty() {
            problems.push(format!("missing columns {missing}"));
        }
        if !unexpected.is_empty() {
            problems.push(format!("unexpected columns {unexpected}"));
        }
        Err(Error::configuration(format!(
            "Encoder registry does not match the model input: {}",
            problems.join("; ")
        )))
    }
}
