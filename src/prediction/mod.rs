//! Prediction service
//!
//! Drives the feature builder and the loaded classifier for one request and
//! assembles the response payload: label, confidence, risk factors and
//! recommendations.

pub mod recommendations;

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::assets::{AssetLoader, Assets};
use crate::error::{Error, Result};
use crate::features::{self, FeatureVectorBuilder, RawSymptomInput};

/// Binary decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    #[serde(rename = "Diabetic")]
    Diabetic,
    #[serde(rename = "Non-Diabetic")]
    NonDiabetic,
}

impl Label {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diabetic => "Diabetic",
            Self::NonDiabetic => "Non-Diabetic",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probability cut-off between the two labels (inclusive on the diabetic side)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionThreshold(f64);

impl DecisionThreshold {
    /// Create a threshold within `[0, 1]`
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::configuration(format!(
                "threshold must be within [0, 1], got {value}"
            )))
        }
    }

    /// Threshold value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Label for probability `p`
    #[must_use]
    pub fn classify(self, p: f64) -> Label {
        if p >= self.0 {
            Label::Diabetic
        } else {
            Label::NonDiabetic
        }
    }
}

impl Default for DecisionThreshold {
    fn default() -> Self {
        Self(crate::config::DEFAULT_THRESHOLD)
    }
}

/// Probability as a percentage rounded to one decimal place
///
/// Rounds the exact binary value of `p * 100` half to even, so 0.6785 gives
/// 67.8 rather than 67.9.
#[must_use]
pub fn confidence_percent(p: f64) -> f64 {
    let percent = p * 100.0;
    format!("{percent:.1}").parse().unwrap_or(percent)
}

/// Outcome of one prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    #[serde(rename = "prediction")]
    pub label: Label,
    #[serde(skip)]
    pub probability: f64,
    pub confidence: f64,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Run the pipeline against already loaded assets
pub fn evaluate(
    assets: &Assets,
    raw: &RawSymptomInput,
    threshold: DecisionThreshold,
) -> Result<PredictionResult> {
    let vector = FeatureVectorBuilder::new(assets.encoders()).build(raw)?;
    let probability = assets.score(&vector)?;
    let label = threshold.classify(probability);

    debug!("Predicted {label} with probability {probability:.4}");

    Ok(PredictionResult {
        label,
        probability,
        confidence: confidence_percent(probability),
        risk_factors: features::risk_factors(raw),
        recommendations: recommendations::for_label(label)
            .iter()
            .map(|text| (*text).to_string())
            .collect(),
    })
}

/// Prediction entry point combining the asset loader and a fixed threshold
#[derive(Debug)]
pub struct PredictionService {
    loader: AssetLoader,
    threshold: DecisionThreshold,
}

impl PredictionService {
    /// Create a service; assets are loaded on first use
    #[must_use]
    pub const fn new(loader: AssetLoader, threshold: DecisionThreshold) -> Self {
        Self { loader, threshold }
    }

    /// Asset loader
    #[must_use]
    pub const fn loader(&self) -> &AssetLoader {
        &self.loader
    }

    /// Configured threshold
    #[must_use]
    pub const fn threshold(&self) -> DecisionThreshold {
        self.threshold
    }

    /// Predict for one request
    pub async fn predict(&self, raw: &RawSymptomInput) -> Result<PredictionResult> {
        let assets = self.loader.ensure_loaded().await?;
        evaluate(&assets, raw, self.threshold)
    }
}
