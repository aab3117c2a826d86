//! Classifier abstraction and the concrete models loadable from artifacts
//!
//! The pipeline only depends on [`Classifier`]: a read-only model mapping a
//! numeric feature vector to the probability of the positive class.

pub mod artifact;
pub mod logistic;
pub mod mlp;
pub mod scaler;

pub use artifact::ModelArtifact;
pub use logistic::LogisticClassifier;
pub use mlp::{Activation, DenseLayer, MlpClassifier};
pub use scaler::StandardScaler;

use std::fmt;

use crate::error::{Error, Result};

/// Binary classifier producing a positive-class probability
pub trait Classifier: Send + Sync + fmt::Debug {
    /// Number of input features the model was trained on
    fn input_width(&self) -> usize;

    /// Probability of the positive class for `features`
    fn predict_probability(&self, features: &[f64]) -> Result<f64>;

    /// Short human readable model kind
    fn name(&self) -> &str {
        "classifier"
    }
}

/// Logistic function
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Fail unless `features` has exactly `expected` entries
pub(crate) fn check_width(features: &[f64], expected: usize) -> Result<()> {
    if features.len() == expected {
        Ok(())
    } else {
        Err(Error::Model(format!(
            "expected {expected} input features, got {}",
            features.len()
        )))
    }
}
