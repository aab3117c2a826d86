//! Feature standardization applied between encoding and the classifier

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-feature `(x - mean) / scale` transform fitted at training time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Parse the exported scaler artifact
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scaler: Self = serde_json::from_str(json)?;
        scaler.validate()?;
        Ok(scaler)
    }

    /// Check that mean and scale agree in width and are finite
    pub fn validate(&self) -> Result<()> {
        if self.mean.len() != self.scale.len() {
            return Err(Error::Model(format!(
                "scaler has {} means but {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(Error::Model("scaler has non-finite parameters".into()));
        }
        Ok(())
    }

    /// Number of features the scaler was fitted on
    #[must_use]
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Standardize `features` in place; zero scales are treated as one
    pub fn transform(&self, features: &mut [f64]) -> Result<()> {
        super::check_width(features, self.width())?;
        for ((x, mean), scale) in features.iter_mut().zip(&self.mean).zip(&self.scale) {
            let scale = if *scale == 0.0 { 1.0 } else { *scale };
            *x = (*x - mean) / scale;
        }
        Ok(())
    }
}
