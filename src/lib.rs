//! A diabetes risk prediction service: validates and label-encodes a symptom
//! form, runs a pre-trained classifier and returns a structured decision.

pub mod assets;
pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod prediction;
pub mod registry;
pub mod server;

// Re-export the most common types for easier use
// Core types
pub use config::ServiceConfig;
pub use error::{Error, ErrorKind, Result};

// Pipeline
pub use assets::{AssetLoader, AssetSource, Assets, FsAssetSource};
pub use features::{FeatureVector, FeatureVectorBuilder, RawSymptomInput, RawValue};
pub use prediction::{DecisionThreshold, Label, PredictionResult, PredictionService, evaluate};
pub use registry::{CategoricalEncoder, EncoderRegistry};

// Models
pub use model::{Classifier, LogisticClassifier, MlpClassifier, StandardScaler};
