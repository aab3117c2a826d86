//! Linear classifier with a logistic link

use serde::{Deserialize, Serialize};

use super::{Classifier, check_width, sigmoid};
use crate::error::{Error, Result};

/// Logistic regression model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    /// One coefficient per input feature
    pub coefficients: Vec<f64>,
    /// Bias term
    pub intercept: f64,
}

impl LogisticClassifier {
    /// Create a model, rejecting empty or non-finite parameters
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        let model = Self {
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    /// Check parameters loaded from an artifact
    pub fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(Error::Model("logistic model has no coefficients".into()));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::Model("logistic model has non-finite parameters".into()));
        }
        Ok(())
    }
}

impl Classifier for LogisticClassifier {
    fn input_width(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_probability(&self, features: &[f64]) -> Result<f64> {
        check_width(features, self.coefficients.len())?;
        let score = self
            .coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (w, x)| acc + w * x);
        Ok(sigmoid(score))
    }

    fn name(&self) -> &str {
        "logistic"
    }
}
