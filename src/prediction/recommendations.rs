//! Static advice returned alongside a prediction

use super::Label;

const DIABETIC: [&str; 4] = [
    "Consult with a healthcare provider immediately",
    "Consider blood glucose testing",
    "Monitor your diet and exercise regularly",
    "Keep a symptom diary",
];

const NON_DIABETIC: [&str; 4] = [
    "Continue maintaining a healthy lifestyle",
    "Regular checkups with healthcare provider",
    "Monitor for any new symptoms",
    "Keep a balanced diet and exercise routine",
];

/// Recommendations for `label`
#[must_use]
pub fn for_label(label: Label) -> &'static [&'static str] {
    match label {
        Label::Diabetic => &DIABETIC,
        Label::NonDiabetic => &NON_DIABETIC,
    }
}
