use crate::model::Model;
use crate::registry::FeatureRegistry;
use crate::supervised::SupervisedScorer;
use crate::unsupervised::UnsupervisedScorer;
use linkrank_core::{Error, FeatureVector, Result};
use serde::Serialize;
use std::sync::Arc;

/// How candidate scores are computed, chosen once per ranker
#[derive(Debug, Clone)]
pub enum ScoringStrategy {
    Supervised(SupervisedScorer),
    Unsupervised(UnsupervisedScorer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Supervised,
    Unsupervised,
}

impl ScoringStrategy {
    /// Supervised when a model is supplied, unsupervised otherwise
    pub fn select(model: Option<Arc<dyn Model>>, registry: FeatureRegistry) -> Self {
        match model {
            Some(model) => ScoringStrategy::Supervised(SupervisedScorer::new(model)),
            None => ScoringStrategy::Unsupervised(UnsupervisedScorer::new(registry)),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            ScoringStrategy::Supervised(_) => StrategyKind::Supervised,
            ScoringStrategy::Unsupervised(_) => StrategyKind::Unsupervised,
        }
    }

    /// One rounded score per vector, in vector order
    pub fn score_column(&self, column: usize, vectors: &[FeatureVector]) -> Result<Vec<f64>> {
        match self {
            ScoringStrategy::Supervised(scorer) => scorer.score_column(column, vectors),
            ScoringStrategy::Unsupervised(scorer) => scorer.score_column(column, vectors),
        }
    }

    /// Inference calls a column costs: one per non-empty column when supervised
    pub(crate) fn inference_calls(&self, vectors: &[FeatureVector]) -> usize {
        match self {
            ScoringStrategy::Supervised(_) if !vectors.is_empty() => 1,
            _ => 0,
        }
    }
}

/// Header shared by every vector of the column, `None` for an empty column
pub(crate) fn ensure_uniform_header(
    column: usize,
    vectors: &[FeatureVector],
) -> Result<Option<&[String]>> {
    let Some(first) = vectors.first() else {
        return Ok(None);
    };
    if let Some(index) = vectors.iter().position(|v| !v.same_header(first)) {
        return Err(Error::HeaderMismatch { column, index });
    }
    Ok(Some(first.header()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogisticModel;

    #[test]
    fn test_select_by_model_presence() {
        let supervised = ScoringStrategy::select(
            Some(Arc::new(LogisticModel::new(vec![1.0], 0.0))),
            FeatureRegistry::default(),
        );
        assert_eq!(supervised.kind(), StrategyKind::Supervised);

        let unsupervised = ScoringStrategy::select(None, FeatureRegistry::default());
        assert_eq!(unsupervised.kind(), StrategyKind::Unsupervised);
    }

    #[test]
    fn test_uniform_header_empty() {
        assert!(ensure_uniform_header(0, &[]).unwrap().is_none());
    }
}
