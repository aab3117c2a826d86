//! Configuration for the prediction service.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::prediction::DecisionThreshold;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "DIABETES_SHIELD_";

/// Default decision threshold of the deployed service
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Configuration for the prediction service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory holding the artifacts; relative paths are resolved against
    /// the executable's directory, never the working directory
    pub assets_dir: PathBuf,
    /// Classifier artifact file name
    pub model_file: String,
    /// Encoder registry artifact file name
    pub encoder_file: String,
    /// Optional feature scaler artifact file name
    pub scaler_file: String,
    /// Probability at or above which a prediction is labelled diabetic
    pub threshold: f64,
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Load artifacts before serving so a broken deployment fails at startup
    pub eager_load: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            model_file: "model.json".to_string(),
            encoder_file: "encoders.json".to_string(),
            scaler_file: "scaler.json".to_string(),
            threshold: DEFAULT_THRESHOLD,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            eager_load: true,
        }
    }
}

/// Resolved artifact locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub model: PathBuf,
    pub encoders: PathBuf,
    pub scaler: PathBuf,
}

impl AssetPaths {
    /// Standard file names inside `dir`
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        let defaults = ServiceConfig::default();
        Self {
            model: dir.join(defaults.model_file),
            encoders: dir.join(defaults.encoder_file),
            scaler: dir.join(defaults.scaler_file),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::configuration(format!(
            "{key} must be a boolean, got '{value}'"
        ))),
    }
}

impl ServiceConfig {
    /// Apply overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Keys are `DIABETES_SHIELD_` followed by `ASSETS_DIR`, `MODEL_FILE`,
    /// `ENCODER_FILE`, `SCALER_FILE`, `THRESHOLD`, `BIND` or `EAGER_LOAD`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            let key = format!("{ENV_PREFIX}{name}");
            lookup(&key).map(|value| (key, value))
        };

        let mut config = Self::default();

        if let Some((_, dir)) = var("ASSETS_DIR") {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Some((_, file)) = var("MODEL_FILE") {
            config.model_file = file;
        }
        if let Some((_, file)) = var("ENCODER_FILE") {
            config.encoder_file = file;
        }
        if let Some((_, file)) = var("SCALER_FILE") {
            config.scaler_file = file;
        }
        if let Some((key, value)) = var("THRESHOLD") {
            config.threshold = value.trim().parse().map_err(|_| {
                Error::configuration(format!("{key} must be a number, got '{value}'"))
            })?;
        }
        if let Some((key, value)) = var("BIND") {
            config.bind_addr = value.trim().parse().map_err(|_| {
                Error::configuration(format!("{key} must be a socket address, got '{value}'"))
            })?;
        }
        if let Some((key, value)) = var("EAGER_LOAD") {
            config.eager_load = parse_bool(&key, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        self.decision_threshold().map(|_| ())
    }

    /// Configured threshold as a validated [`DecisionThreshold`]
    pub fn decision_threshold(&self) -> Result<DecisionThreshold> {
        DecisionThreshold::new(self.threshold)
    }

    /// Artifact paths with a relative `assets_dir` resolved against `base`
    #[must_use]
    pub fn asset_paths(&self, base: &Path) -> AssetPaths {
        let dir = if self.assets_dir.is_absolute() {
            self.assets_dir.clone()
        } else {
            base.join(&self.assets_dir)
        };

        AssetPaths {
            model: dir.join(&self.model_file),
            encoders: dir.join(&self.encoder_file),
            scaler: dir.join(&self.scaler_file),
        }
    }

    /// Artifact paths resolved against the running executable's directory
    pub fn asset_paths_for_executable(&self) -> Result<AssetPaths> {
        let exe = std::env::current_exe().map_err(|e| {
            Error::configuration(format!("Cannot determine executable location: {e}"))
        })?;
        let base = exe.parent().ok_or_else(|| {
            Error::configuration(format!("Executable {} has no parent directory", exe.display()))
        })?;
        Ok(self.asset_paths(base))
    }
}
