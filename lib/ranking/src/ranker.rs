//! Candidate ranker
//!
//! Scores every candidate of every cell and orders each cell's candidates by
//! descending score. A pass runs in three steps:
//!
//! 1. **Align** - walk rows, cells and candidates with one cursor per column
//!    and check that each column's feature vectors are consumed exactly.
//! 2. **Score** - one [`ScoringStrategy::score_column`] call per column,
//!    fanned out on rayon when enabled.
//! 3. **Commit** - walk again, write the score field, stably sort each cell.
//!
//! Steps 1 and 2 never touch the dataset, so an error leaves it exactly as it
//! was passed in.

use crate::config::{CancellationToken, RankerConfig};
use crate::cursor::AlignmentCursor;
use crate::model::Model;
use crate::registry::FeatureRegistry;
use crate::score::descending;
use crate::strategy::{ScoringStrategy, StrategyKind};
use linkrank_core::{Candidate, Dataset, Error, FeatureProvider, FeatureVector, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of a completed ranking pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankSummary {
    pub strategy: StrategyKind,
    pub columns: usize,
    pub candidates: usize,
    pub inference_calls: usize,
}

#[derive(Debug, Clone)]
pub struct CandidateRanker {
    strategy: ScoringStrategy,
    config: RankerConfig,
}

impl CandidateRanker {
    /// Supervised when `model` is given, unsupervised over `registry` otherwise
    pub fn new(
        model: Option<Arc<dyn Model>>,
        registry: FeatureRegistry,
        config: RankerConfig,
    ) -> Self {
        Self {
            strategy: ScoringStrategy::select(model, registry),
            config,
        }
    }

    pub fn supervised(model: Arc<dyn Model>) -> Self {
        Self::new(Some(model), FeatureRegistry::default(), RankerConfig::default())
    }

    pub fn unsupervised(registry: FeatureRegistry) -> Self {
        Self::new(None, registry, RankerConfig::default())
    }

    pub fn with_config(mut self, config: RankerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strategy(&self) -> &ScoringStrategy {
        &self.strategy
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Score all candidates into `field` and sort every cell by it
    pub fn rank<P>(&self, dataset: &mut Dataset, features: &P, field: &str) -> Result<RankSummary>
    where
        P: FeatureProvider + ?Sized,
    {
        self.rank_with_cancel(dataset, features, field, &CancellationToken::new())
    }

    pub fn rank_with_cancel<P>(
        &self,
        dataset: &mut Dataset,
        features: &P,
        field: &str,
        cancel: &CancellationToken,
    ) -> Result<RankSummary>
    where
        P: FeatureProvider + ?Sized,
    {
        match self.run(dataset, features, field, cancel) {
            Ok(summary) => {
                info!(
                    "Ranked {} candidates over {} columns into '{}' ({:?}, {} inference calls)",
                    summary.candidates,
                    summary.columns,
                    field,
                    summary.strategy,
                    summary.inference_calls
                );
                Ok(summary)
            }
            Err(e) => {
                warn!(
                    "Ranking into '{}' aborted ({:?}, column {:?}): {}",
                    field,
                    e.kind(),
                    e.column(),
                    e
                );
                Err(e)
            }
        }
    }

    fn run<P>(
        &self,
        dataset: &mut Dataset,
        features: &P,
        field: &str,
        cancel: &CancellationToken,
    ) -> Result<RankSummary>
    where
        P: FeatureProvider + ?Sized,
    {
        let columns = align(dataset, features)?;
        let scores = self.score_columns(features, &columns, cancel)?;
        let candidates = commit(dataset, &scores, field)?;
        sort_cells(dataset, field, self.config.parallel);

        let inference_calls = columns
            .iter()
            .map(|&c| self.strategy.inference_calls(features.vectors_for_column(c)))
            .sum();

        Ok(RankSummary {
            strategy: self.strategy.kind(),
            columns: columns.len(),
            candidates,
            inference_calls,
        })
    }

    fn score_columns<P>(
        &self,
        features: &P,
        columns: &[usize],
        cancel: &CancellationToken,
    ) -> Result<BTreeMap<usize, Vec<f64>>>
    where
        P: FeatureProvider + ?Sized,
    {
        let completed = AtomicUsize::new(0);
        let score_one = |&column: &usize| -> Result<(usize, Vec<f64>)> {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled {
                    completed_columns: completed.load(Ordering::Acquire),
                });
            }
            let vectors = features.vectors_for_column(column);
            let scores = self.strategy.score_column(column, vectors)?;
            debug!(
                "Scored column {} ({} candidates, {:?})",
                column,
                scores.len(),
                self.strategy.kind()
            );
            completed.fetch_add(1, Ordering::AcqRel);
            Ok((column, scores))
        };

        if self.config.parallel {
            columns.par_iter().map(&score_one).collect()
        } else {
            columns.iter().map(&score_one).collect()
        }
    }
}

/// Check the alignment invariant and return the columns to score, ascending.
///
/// Every column that has feature vectors or candidates gets a cursor.
/// Cells without candidates never touch a cursor.
fn walk_alignment<P>(dataset: &Dataset, features: &P) -> Result<Vec<usize>>
where
    P: FeatureProvider + ?Sized,
{
    let mut cursors: BTreeMap<usize, AlignmentCursor<'_, FeatureVector>> = features
        .column_ids()
        .into_iter()
        .map(|c| (c, AlignmentCursor::new(c, features.vectors_for_column(c))))
        .collect();

    for cell in dataset.cells() {
        if cell.candidates().is_empty() {
            continue;
        }
        let column = cell.column_id();
        let cursor = cursors
            .entry(column)
            .or_insert_with(|| AlignmentCursor::new(column, features.vectors_for_column(column)));
        for _ in cell.candidates() {
            cursor.next()?;
        }
    }

    for cursor in cursors.values() {
        cursor.finish()?;
    }
    Ok(cursors.into_keys().collect())
}

/// [`walk_alignment`], logging candidate and vector counts per column on failure
fn align<P>(dataset: &Dataset, features: &P) -> Result<Vec<usize>>
where
    P: FeatureProvider + ?Sized,
{
    walk_alignment(dataset, features).map_err(|e| {
        for (column, candidates) in dataset.candidate_counts() {
            let vectors = features.vectors_for_column(column).len();
            if candidates != vectors {
                warn!(
                    "Column {} has {} candidates but {} feature vectors",
                    column, candidates, vectors
                );
            }
        }
        for column in features.column_ids() {
            if !dataset.cells().any(|cell| cell.column_id() == column) {
                warn!(
                    "Column {} has {} feature vectors but no cells",
                    column,
                    features.vectors_for_column(column).len()
                );
            }
        }
        e
    })
}

/// Write each candidate's score under `field`, returning how many were written
fn commit(dataset: &mut Dataset, scores: &BTreeMap<usize, Vec<f64>>, field: &str) -> Result<usize> {
    let mut cursors: BTreeMap<usize, AlignmentCursor<'_, f64>> = scores
        .iter()
        .map(|(&c, s)| (c, AlignmentCursor::new(c, s.as_slice())))
        .collect();

    let mut written = 0;
    for row in dataset.rows_mut() {
        for cell in row.cells_mut() {
            if cell.candidates.is_empty() {
                continue;
            }
            let column = cell.column_id;
            let cursor = cursors
                .get_mut(&column)
                .ok_or(Error::AlignmentOverrun { column, available: 0 })?;
            for candidate in cell.candidates.iter_mut() {
                candidate.set_score(field, *cursor.next()?);
                written += 1;
            }
        }
    }

    for cursor in cursors.values() {
        cursor.finish()?;
    }
    Ok(written)
}

fn sort_cells(dataset: &mut Dataset, field: &str, parallel: bool) {
    let sort = |candidates: &mut Vec<Candidate>| {
        // sort_by is stable: equal scores keep their generation order
        candidates.sort_by(|a, b| descending(score_of(a, field), score_of(b, field)));
    };

    if parallel {
        dataset
            .rows
            .par_iter_mut()
            .flat_map_iter(|row| row.cells.iter_mut())
            .for_each(|cell| sort(&mut cell.candidates));
    } else {
        for cell in dataset.rows.iter_mut().flat_map(|row| row.cells.iter_mut()) {
            sort(&mut cell.candidates);
        }
    }
}

fn score_of(candidate: &Candidate, field: &str) -> f64 {
    candidate.score(field).unwrap_or(f64::NEG_INFINITY)
}
