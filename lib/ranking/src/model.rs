//! Predictive model interface
//!
//! The engine only consumes inference. A model receives one batch per column
//! and returns class probabilities per input row; index [`POSITIVE_CLASS`]
//! holds the probability that the candidate is the correct match.

use serde::{Deserialize, Serialize};

/// Index of the match probability in each prediction row
pub const POSITIVE_CLASS: usize = 1;

/// Binary classifier inference
///
/// Implementations must return exactly one probability row per input row.
/// The engine never calls `predict` with an empty batch.
pub trait Model: Send + Sync {
    fn predict(&self, batch: &[&[f64]]) -> anyhow::Result<Vec<Vec<f64>>>;
}

/// Logistic regression over the raw feature values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    #[serde(default)]
    pub bias: f64,
}

impl LogisticModel {
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    fn probability(&self, row: &[f64]) -> f64 {
        let z: f64 = self
            .weights
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        1.0 / (1.0 + (-z).exp())
    }
}

impl Model for LogisticModel {
    fn predict(&self, batch: &[&[f64]]) -> anyhow::Result<Vec<Vec<f64>>> {
        batch
            .iter()
            .enumerate()
            .map(|(i, row)| {
                anyhow::ensure!(
                    row.len() == self.weights.len(),
                    "row {} has {} features, model expects {}",
                    i,
                    row.len(),
                    self.weights.len()
                );
                let p = self.probability(row);
                Ok(vec![1.0 - p, p])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logistic_zero_input() {
        let model = LogisticModel::new(vec![1.0, 1.0], 0.0);
        let out = model.predict(&[&[0.0, 0.0]]).unwrap();
        assert_eq!(out, vec![vec![0.5, 0.5]]);
    }

    #[test]
    fn test_logistic_monotonic() {
        let model = LogisticModel::new(vec![2.0], -1.0);
        let out = model.predict(&[&[0.1], &[0.9]]).unwrap();
        assert!(out[1][POSITIVE_CLASS] > out[0][POSITIVE_CLASS]);
        for row in &out {
            assert!((row[0] + row[1] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_logistic_dimension_mismatch() {
        let model = LogisticModel::new(vec![1.0, 2.0], 0.0);
        let err = model.predict(&[&[1.0]]).unwrap_err();
        assert!(err.to_string().contains("model expects 2"));
    }

    #[test]
    fn test_deserialize_without_bias() {
        let model: LogisticModel = serde_json::from_str(r#"{"weights": [0.5, 0.5]}"#).unwrap();
        assert_eq!(model.bias, 0.0);
    }
}
