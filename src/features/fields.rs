//! Fixed field table
//!
//! Maps each request key to the model column it feeds. The table order is the
//! feature order the classifier was trained on.

use serde::Serialize;

/// Number of model input features
pub const FEATURE_COUNT: usize = 8;

/// How a field's raw value is normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Yes/No symptom; counts as a risk factor when present
    Symptom,
    /// Free-text gender, capitalized before encoding
    Gender,
}

/// Definition of one model input field
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldDefinition {
    /// Request key
    pub key: &'static str,
    /// Model column name
    pub column: &'static str,
    /// Human-readable name
    pub label: &'static str,
    /// Short explanation shown next to the form control
    pub description: &'static str,
    #[serde(skip)]
    pub kind: FieldKind,
}

impl FieldDefinition {
    const fn symptom(
        key: &'static str,
        column: &'static str,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            column,
            label,
            description,
            kind: FieldKind::Symptom,
        }
    }

    /// Whether this field is reported as a risk factor
    #[must_use]
    pub const fn is_symptom(&self) -> bool {
        matches!(self.kind, FieldKind::Symptom)
    }
}

/// Model input fields in training order
pub static FIELDS: [FieldDefinition; FEATURE_COUNT] = [
    FieldDefinition::symptom(
        "polyuria",
        "Polyuria",
        "Polyuria",
        "Excessive or frequent urination",
    ),
    FieldDefinition {
        key: "gender",
        column: "Gender",
        label: "Gender",
        description: "Biological sex of the individual (Male/Female)",
        kind: FieldKind::Gender,
    },
    FieldDefinition::symptom(
        "polydipsia",
        "Polydipsia",
        "Polydipsia",
        "Excessive or abnormal thirst",
    ),
    FieldDefinition::symptom(
        "suddenWeightLoss",
        "sudden weight loss",
        "Sudden Weight Loss",
        "Rapid loss of weight without trying",
    ),
    FieldDefinition::symptom(
        "partialParesis",
        "partial paresis",
        "Partial Paresis",
        "Muscle weakness or partial loss of movement",
    ),
    FieldDefinition::symptom(
        "visualBlurring",
        "visual blurring",
        "Visual Blurring",
        "Vision that looks less sharp and unclear",
    ),
    FieldDefinition::symptom("alopecia", "Alopecia", "Alopecia", "Sudden hair loss"),
    FieldDefinition::symptom(
        "irritability",
        "Irritability",
        "Irritability",
        "Tendency to get easily annoyed or agitated",
    ),
];

/// Model column names in training order
#[must_use]
pub fn columns() -> [&'static str; FEATURE_COUNT] {
    FIELDS.map(|field| field.column)
}

/// Look up a field by its request key
#[must_use]
pub fn by_key(key: &str) -> Option<&'static FieldDefinition> {
    FIELDS.iter().find(|field| field.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_matches_training() {
        assert_eq!(
            columns(),
            [
                "Polyuria",
                "Gender",
                "Polydipsia",
                "sudden weight loss",
                "partial paresis",
                "visual blurring",
                "Alopecia",
                "Irritability",
            ]
        );
    }

    #[test]
    fn test_gender_is_the_only_non_symptom() {
        let non_symptoms: Vec<_> = FIELDS.iter().filter(|f| !f.is_symptom()).collect();
        assert_eq!(non_symptoms.len(), 1);
        assert_eq!(non_symptoms[0].key, "gender");
    }

    #[test]
    fn test_by_key() {
        assert_eq!(by_key("suddenWeightLoss").unwrap().column, "sudden weight loss");
        assert!(by_key("Polyuria").is_none());
    }
}
