//! Heuristic scoring without a model
//!
//! The score of a candidate is the mean of its registered heuristic features,
//! i.e. a linear combination where every selected feature weighs `1 / n`.
//! The name-to-index selection comes from the first vector of the column and
//! is applied to every vector, so the column header must be uniform.

use crate::registry::FeatureRegistry;
use crate::score::round_score;
use crate::strategy::ensure_uniform_header;
use linkrank_core::{Error, FeatureVector, Result};

#[derive(Debug, Clone, Default)]
pub struct UnsupervisedScorer {
    registry: FeatureRegistry,
}

impl UnsupervisedScorer {
    pub fn new(registry: FeatureRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    pub fn score_column(&self, column: usize, vectors: &[FeatureVector]) -> Result<Vec<f64>> {
        let header = match ensure_uniform_header(column, vectors)? {
            Some(header) => header,
            None => return Ok(Vec::new()),
        };

        let selected = self.registry.select_indices(header);
        if selected.is_empty() {
            return Err(Error::EmptyFeatureSelection { column });
        }
        let weight = 1.0 / selected.len() as f64;

        Ok(vectors
            .iter()
            .map(|vector| {
                let values = vector.values();
                let score: f64 = selected.iter().map(|&i| weight * values[i]).sum();
                round_score(score)
            })
            .collect())
    }
}
