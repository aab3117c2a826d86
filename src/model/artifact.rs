//! Serialized classifier artifact
//!
//! ```json
//! {"type": "logistic", "coefficients": [0.8, 0.1], "intercept": -0.3}
//! {"type": "mlp", "layers": [{"kernel": [[...]], "bias": [...], "activation": "relu"}]}
//! ```

use serde::{Deserialize, Serialize};

use super::{Classifier, LogisticClassifier, MlpClassifier};
use crate::error::{Error, Result};

/// Classifier artifact tagged by model family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ModelArtifact {
    Mlp(MlpClassifier),
    Logistic(LogisticClassifier),
}

impl ModelArtifact {
    /// Parse an artifact without validating it
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::configuration(format!("Malformed model artifact: {e}")))
    }

    /// Validate the parameters and produce a shareable classifier
    pub fn into_classifier(self) -> Result<Box<dyn Classifier>> {
        match self {
            Self::Mlp(model) => {
                model.validate()?;
                Ok(Box::new(model))
            }
            Self::Logistic(model) => {
                model.validate()?;
                Ok(Box::new(model))
            }
        }
    }
}
