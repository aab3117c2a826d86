//! Trained artifacts shared by every request
//!
//! [`Assets`] bundles the encoder registry, the optional scaler and the
//! classifier after checking that they agree with the fixed field table.
//! [`AssetSource`] abstracts where they come from; [`FsAssetSource`] reads the
//! exported JSON files and [`AssetLoader`] caches the result for the life of
//! the process.

pub mod loader;

pub use loader::AssetLoader;

use log::info;

use crate::config::AssetPaths;
use crate::error::util::{read_artifact, read_optional_artifact};
use crate::error::{Error, Result};
use crate::features::{FEATURE_COUNT, FeatureVector, fields};
use crate::model::{Classifier, ModelArtifact, StandardScaler};
use crate::registry::EncoderRegistry;

/// Immutable, validated model assets
#[derive(Debug)]
pub struct Assets {
    encoders: EncoderRegistry,
    scaler: Option<StandardScaler>,
    classifier: Box<dyn Classifier>,
}

impl Assets {
    /// Bundle the assets, rejecting any that do not match the model input
    ///
    /// The registry must hold exactly the trained columns, and the classifier
    /// (and scaler, if any) must take [`FEATURE_COUNT`] inputs.
    pub fn new(
        encoders: EncoderRegistry,
        scaler: Option<StandardScaler>,
        classifier: Box<dyn Classifier>,
    ) -> Result<Self> {
        encoders.validate_columns(&fields::columns())?;

        if classifier.input_width() != FEATURE_COUNT {
            return Err(Error::configuration(format!(
                "Classifier expects {} inputs but {FEATURE_COUNT} features are produced",
                classifier.input_width()
            )));
        }

        if let Some(scaler) = &scaler {
            if scaler.width() != FEATURE_COUNT {
                return Err(Error::configuration(format!(
                    "Scaler was fitted on {} features but {FEATURE_COUNT} are produced",
                    scaler.width()
                )));
            }
        }

        Ok(Self {
            encoders,
            scaler,
            classifier,
        })
    }

    /// Encoder registry
    #[must_use]
    pub fn encoders(&self) -> &EncoderRegistry {
        &self.encoders
    }

    /// Feature scaler, when one was exported
    #[must_use]
    pub fn scaler(&self) -> Option<&StandardScaler> {
        self.scaler.as_ref()
    }

    /// Classifier
    #[must_use]
    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Positive-class probability for an encoded vector
    pub fn score(&self, vector: &FeatureVector) -> Result<f64> {
        let mut features = vector.to_f64();
        if let Some(scaler) = &self.scaler {
            scaler.transform(&mut features)?;
        }
        let probability = self.classifier.predict_probability(&features)?;
        if probability.is_finite() {
            Ok(probability)
        } else {
            Err(Error::Model(format!(
                "{} classifier returned {probability}",
                self.classifier.name()
            )))
        }
    }
}

/// Source of model assets
pub trait AssetSource: Send + Sync {
    /// Load and validate the assets; blocking I/O is allowed
    fn load(&self) -> Result<Assets>;

    /// Description for log messages
    fn describe(&self) -> String {
        "asset source".to_string()
    }
}

/// Reads JSON artifacts from disk
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    paths: AssetPaths,
}

impl FsAssetSource {
    /// Create a source reading from `paths`
    #[must_use]
    pub const fn new(paths: AssetPaths) -> Self {
        Self { paths }
    }

    /// Artifact locations
    #[must_use]
    pub const fn paths(&self) -> &AssetPaths {
        &self.paths
    }
}

impl AssetSource for FsAssetSource {
    fn load(&self) -> Result<Assets> {
        let encoders = read_artifact(&self.paths.encoders, "encoder registry")
            .and_then(|json| EncoderRegistry::from_json_str(&json))
            .map_err(|e| e.into_configuration(&format!("{}", self.paths.encoders.display())))?;

        let classifier = read_artifact(&self.paths.model, "classifier")
            .and_then(|json| ModelArtifact::from_json_str(&json))
            .and_then(ModelArtifact::into_classifier)
            .map_err(|e| e.into_configuration(&format!("{}", self.paths.model.display())))?;

        let scaler = read_optional_artifact(&self.paths.scaler, "feature scaler")
            .and_then(|json| json.as_deref().map(StandardScaler::from_json_str).transpose())
            .map_err(|e| e.into_configuration(&format!("{}", self.paths.scaler.display())))?;

        if scaler.is_none() {
            info!(
                "No scaler at {}, feeding encoded features unscaled",
                self.paths.scaler.display()
            );
        }

        Assets::new(encoders, scaler, classifier)
    }

    fn describe(&self) -> String {
        format!(
            "model {} with encoders {}",
            self.paths.model.display(),
            self.paths.encoders.display()
        )
    }
}
