#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use diabetes_shield::config::AssetPaths;
use diabetes_shield::features::{FIELDS, FieldKind};
use diabetes_shield::{
    AssetSource, Assets, Classifier, EncoderRegistry, RawSymptomInput, Result,
};

/// Classifier returning a fixed probability
#[derive(Debug)]
pub struct FixedClassifier {
    pub probability: f64,
}

impl Classifier for FixedClassifier {
    fn input_width(&self) -> usize {
        FIELDS.len()
    }

    fn predict_probability(&self, _features: &[f64]) -> Result<f64> {
        Ok(self.probability)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Encoder classes as produced by fitting on the symptom dataset
pub fn encoder_json() -> String {
    let columns: serde_json::Map<String, serde_json::Value> = FIELDS
        .iter()
        .map(|field| {
            let classes = match field.kind {
                FieldKind::Gender => serde_json::json!(["Female", "Male"]),
                FieldKind::Symptom => serde_json::json!(["No", "Yes"]),
            };
            (field.column.to_string(), classes)
        })
        .collect();
    serde_json::Value::Object(columns).to_string()
}

/// Registry built from [`encoder_json`]
pub fn trained_registry() -> EncoderRegistry {
    EncoderRegistry::from_json_str(&encoder_json()).unwrap()
}

/// Assets whose classifier always returns `probability`
pub fn fixed_assets(probability: f64) -> Assets {
    Assets::new(
        trained_registry(),
        None,
        Box::new(FixedClassifier { probability }),
    )
    .unwrap()
}

/// Source counting how often it is asked to load
pub struct CountingSource {
    pub loads: Arc<AtomicUsize>,
    pub probability: f64,
}

impl CountingSource {
    pub fn new(probability: f64) -> (Self, Arc<AtomicUsize>) {
        let loads = Arc::new(AtomicUsize::new(0));
        (
            Self {
                loads: Arc::clone(&loads),
                probability,
            },
            loads,
        )
    }
}

impl AssetSource for CountingSource {
    fn load(&self) -> Result<Assets> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        // widen the window for concurrent first callers
        std::thread::sleep(Duration::from_millis(20));
        Ok(fixed_assets(self.probability))
    }
}

/// Form with polyuria and polydipsia ticked for a female patient
pub fn sample_input() -> RawSymptomInput {
    RawSymptomInput::new()
        .with("polyuria", true)
        .with("gender", "Female")
        .with("polydipsia", true)
        .with("suddenWeightLoss", false)
        .with("partialParesis", false)
        .with("visualBlurring", false)
        .with("alopecia", false)
        .with("irritability", false)
}

/// Same form as [`sample_input`] as a JSON body
pub fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "polyuria": true,
        "gender": "Female",
        "polydipsia": true,
        "suddenWeightLoss": false,
        "partialParesis": false,
        "visualBlurring": false,
        "alopecia": false,
        "irritability": false
    })
}

/// Logistic model weighting polyuria and polydipsia
pub const LOGISTIC_MODEL: &str = r#"{
    "type": "logistic",
    "coefficients": [2.0, -0.5, 2.0, 1.0, 1.0, 0.5, 0.0, 0.5],
    "intercept": -2.0
}"#;

/// Write encoders and model (and optionally a scaler) into `dir`
pub fn write_artifacts(dir: &Path, model: &str, scaler: Option<&str>) -> AssetPaths {
    let paths = AssetPaths::in_dir(dir);
    std::fs::write(&paths.encoders, encoder_json()).unwrap();
    std::fs::write(&paths.model, model).unwrap();
    if let Some(scaler) = scaler {
        std::fs::write(&paths.scaler, scaler).unwrap();
    }
    paths
}
