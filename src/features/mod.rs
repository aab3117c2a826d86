//! Feature vector construction
//!
//! Turns a [`RawSymptomInput`] into the ordered, label-encoded vector the
//! classifier expects:
//!
//! 1. every field in [`FIELDS`] must be present, otherwise
//!    [`Error::MissingField`] names the request key;
//! 2. booleans become `"Yes"`/`"No"`, gender text is capitalized;
//! 3. the normalized value is encoded with that column's encoder, unknown
//!    values yielding [`Error::UnknownCategory`];
//! 4. codes are written in table order, independent of request key order.

pub mod fields;
pub mod input;

pub use fields::{FEATURE_COUNT, FIELDS, FieldDefinition, FieldKind};
pub use input::{RawSymptomInput, RawValue};

use crate::error::{Error, Result};
use crate::registry::EncoderRegistry;

/// Label-encoded model input in training column order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVector([u32; FEATURE_COUNT]);

impl FeatureVector {
    /// Wrap already encoded codes
    #[must_use]
    pub const fn new(codes: [u32; FEATURE_COUNT]) -> Self {
        Self(codes)
    }

    /// Encoded codes
    #[must_use]
    pub const fn codes(&self) -> &[u32; FEATURE_COUNT] {
        &self.0
    }

    /// Codes as floating point model input
    #[must_use]
    pub fn to_f64(&self) -> Vec<f64> {
        self.0.iter().map(|&code| f64::from(code)).collect()
    }

    /// Always [`FEATURE_COUNT`]
    #[must_use]
    pub const fn len(&self) -> usize {
        FEATURE_COUNT
    }

    /// Always false
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Capitalize like the training data: first character upper case, rest lower case
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Normalize a raw value into the category string used at training time
#[must_use]
pub fn normalize(field: &FieldDefinition, value: &RawValue) -> String {
    match (value, field.kind) {
        (RawValue::Flag(true), _) => "Yes".to_string(),
        (RawValue::Flag(false), _) => "No".to_string(),
        (RawValue::Text(text) | RawValue::Other(text), FieldKind::Gender) => capitalize(text),
        (RawValue::Text(text) | RawValue::Other(text), FieldKind::Symptom) => text.clone(),
    }
}

/// Fetch and normalize the value of `field`
fn normalized_value(field: &FieldDefinition, raw: &RawSymptomInput) -> Result<String> {
    raw.get(field.key)
        .map(|value| normalize(field, value))
        .ok_or_else(|| Error::MissingField(field.key.to_string()))
}

/// Human-readable names of the symptoms present in `raw`, in table order
///
/// Gender is never a risk factor. Absent fields are skipped.
#[must_use]
pub fn risk_factors(raw: &RawSymptomInput) -> Vec<String> {
    FIELDS
        .iter()
        .filter(|field| field.is_symptom())
        .filter(|field| {
            raw.get(field.key)
                .is_some_and(|value| normalize(field, value) == "Yes")
        })
        .map(|field| field.label.to_string())
        .collect()
}

/// Builds feature vectors against a loaded encoder registry
#[derive(Debug, Clone, Copy)]
pub struct FeatureVectorBuilder<'a> {
    registry: &'a EncoderRegistry,
}

impl<'a> FeatureVectorBuilder<'a> {
    /// Create a builder over `registry`
    #[must_use]
    pub const fn new(registry: &'a EncoderRegistry) -> Self {
        Self { registry }
    }

    /// Encode `raw` into a [`FeatureVector`]
    ///
    /// Fields are checked in table order, so the first missing or invalid
    /// field in that order is the one reported.
    pub fn build(&self, raw: &RawSymptomInput) -> Result<FeatureVector> {
        let mut codes = [0u32; FEATURE_COUNT];
        for (slot, field) in codes.iter_mut().zip(FIELDS.iter()) {
            let value = normalized_value(field, raw)?;
            *slot = self.registry.encode(field.column, &value)?;
        }
        Ok(FeatureVector(codes))
    }
}
