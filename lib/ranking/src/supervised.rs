//! Model-backed scoring
//!
//! A column's feature vectors go to the model as a single batch. The positive
//! class probability of each prediction row, rounded, is the candidate score.

use crate::model::{Model, POSITIVE_CLASS};
use crate::score::round_score;
use crate::strategy::ensure_uniform_header;
use linkrank_core::{Error, FeatureVector, Result};
use std::sync::Arc;

#[derive(Clone)]
pub struct SupervisedScorer {
    model: Arc<dyn Model>,
}

impl SupervisedScorer {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self { model }
    }

    /// Score every vector of a column with one inference call.
    ///
    /// An empty column makes no call and yields no scores.
    pub fn score_column(&self, column: usize, vectors: &[FeatureVector]) -> Result<Vec<f64>> {
        if vectors.is_empty() {
            return Ok(Vec::new());
        }
        ensure_uniform_header(column, vectors)?;

        let batch: Vec<&[f64]> = vectors.iter().map(FeatureVector::values).collect();
        let predictions = self
            .model
            .predict(&batch)
            .map_err(|source| Error::Inference { column, source })?;

        if predictions.len() != vectors.len() {
            return Err(Error::MalformedPrediction {
                column,
                index: predictions.len().min(vectors.len()),
                reason: format!(
                    "model returned {} rows for a batch of {}",
                    predictions.len(),
                    vectors.len()
                ),
            });
        }

        predictions
            .iter()
            .enumerate()
            .map(|(index, probabilities)| {
                let p = *probabilities.get(POSITIVE_CLASS).ok_or_else(|| {
                    Error::MalformedPrediction {
                        column,
                        index,
                        reason: format!("expected at least 2 classes, got {}", probabilities.len()),
                    }
                })?;
                let score = round_score(p);
                if !score.is_finite() {
                    return Err(Error::MalformedPrediction {
                        column,
                        index,
                        reason: format!("positive class probability is {}", p),
                    });
                }
                Ok(score)
            })
            .collect()
    }
}

impl std::fmt::Debug for SupervisedScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupervisedScorer").finish_non_exhaustive()
    }
}
