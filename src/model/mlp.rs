//! Feed-forward network inference
//!
//! Dense layers are stored in the exported kernel layout: `kernel[i][j]` is the
//! weight from input `i` to unit `j`.

use serde::{Deserialize, Serialize};

use super::{Classifier, check_width};
use crate::error::{Error, Result};

/// Layer activation function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Sigmoid,
    Tanh,
    Linear,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Self::Relu => x.max(0.0),
            Self::Sigmoid => super::sigmoid(x),
            Self::Tanh => x.tanh(),
            Self::Linear => x,
        }
    }
}

/// Fully connected layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    /// `inputs x units` weight matrix
    pub kernel: Vec<Vec<f64>>,
    /// One bias per unit
    pub bias: Vec<f64>,
    pub activation: Activation,
}

impl DenseLayer {
    /// Number of inputs
    #[must_use]
    pub fn inputs(&self) -> usize {
        self.kernel.len()
    }

    /// Number of output units
    #[must_use]
    pub fn units(&self) -> usize {
        self.bias.len()
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.kernel.is_empty() || self.bias.is_empty() {
            return Err(Error::Model(format!("layer {index} is empty")));
        }
        if let Some(row) = self.kernel.iter().position(|row| row.len() != self.units()) {
            return Err(Error::Model(format!(
                "layer {index}: kernel row {row} has {} weights, expected {}",
                self.kernel[row].len(),
                self.units()
            )));
        }
        let finite = self.bias.iter().chain(self.kernel.iter().flatten()).all(|w| w.is_finite());
        if !finite {
            return Err(Error::Model(format!("layer {index} has non-finite weights")));
        }
        Ok(())
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        let mut output = self.bias.clone();
        for (x, row) in input.iter().zip(&self.kernel) {
            for (out, w) in output.iter_mut().zip(row) {
                *out += x * w;
            }
        }
        for out in &mut output {
            *out = self.activation.apply(*out);
        }
        output
    }
}

/// Multi-layer perceptron with a single sigmoid-style output unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlpClassifier {
    pub layers: Vec<DenseLayer>,
}

impl MlpClassifier {
    /// Create a network after checking that layer shapes chain
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self> {
        let model = Self { layers };
        model.validate()?;
        Ok(model)
    }

    /// Check layer shapes loaded from an artifact
    pub fn validate(&self) -> Result<()> {
        let Some(last) = self.layers.last() else {
            return Err(Error::Model("network has no layers".into()));
        };

        for (index, layer) in self.layers.iter().enumerate() {
            layer.validate(index)?;
        }

        for (index, pair) in self.layers.windows(2).enumerate() {
            if pair[0].units() != pair[1].inputs() {
                return Err(Error::Model(format!(
                    "layer {} outputs {} units but layer {} expects {} inputs",
                    index,
                    pair[0].units(),
                    index + 1,
                    pair[1].inputs()
                )));
            }
        }

        if last.units() != 1 {
            return Err(Error::Model(format!(
                "output layer must have exactly one unit, found {}",
                last.units()
            )));
        }
        Ok(())
    }
}

impl Classifier for MlpClassifier {
    fn input_width(&self) -> usize {
        self.layers.first().map_or(0, DenseLayer::inputs)
    }

    fn predict_probability(&self, features: &[f64]) -> Result<f64> {
        check_width(features, self.input_width())?;
        let output = self
            .layers
            .iter()
            .fold(features.to_vec(), |activations, layer| layer.forward(&activations));
        output
            .first()
            .copied()
            .ok_or_else(|| Error::Model("network produced no output".into()))
    }

    fn name(&self) -> &str {
        "mlp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(kernel: Vec<Vec<f64>>, bias: Vec<f64>, activation: Activation) -> DenseLayer {
        DenseLayer {
            kernel,
            bias,
            activation,
        }
    }

    #[test]
    fn test_forward_pass() {
        // hidden = relu([x0 - x1, x1]); out = sigmoid(h0 - h1)
        let model = MlpClassifier::new(vec![
            layer(
                vec![vec![1.0, 0.0], vec![-1.0, 1.0]],
                vec![0.0, 0.0],
                Activation::Relu,
            ),
            layer(vec![vec![1.0], vec![-1.0]], vec![0.0], Activation::Sigmoid),
        ])
        .unwrap();

        assert_eq!(model.input_width(), 2);
        assert_eq!(model.predict_probability(&[0.0, 0.0]).unwrap(), 0.5);

        let p = model.predict_probability(&[3.0, 0.0]).unwrap();
        assert!((p - super::super::sigmoid(3.0)).abs() < 1e-12);

        // relu clamps h0 to zero
        let p = model.predict_probability(&[0.0, 2.0]).unwrap();
        assert!((p - super::super::sigmoid(-2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_shape_validation() {
        let err = MlpClassifier::new(vec![
            layer(vec![vec![1.0, 1.0]], vec![0.0, 0.0], Activation::Relu),
            layer(vec![vec![1.0]], vec![0.0], Activation::Sigmoid),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("layer 0 outputs 2 units"));

        let err = MlpClassifier::new(vec![layer(
            vec![vec![1.0, 1.0]],
            vec![0.0, 0.0],
            Activation::Sigmoid,
        )])
        .unwrap_err();
        assert!(err.to_string().contains("exactly one unit"));

        let err = MlpClassifier::new(vec![layer(
            vec![vec![1.0], vec![1.0, 2.0]],
            vec![0.0],
            Activation::Sigmoid,
        )])
        .unwrap_err();
        assert!(err.to_string().contains("kernel row 1"));

        assert!(MlpClassifier::new(vec![]).is_err());
    }
}
