//! Running a pass from async code
//!
//! Model inference can take a while, so inside a tokio runtime the pass runs
//! on the blocking pool instead of a worker thread.

use crate::config::CancellationToken;
use crate::ranker::{CandidateRanker, RankSummary};
use linkrank_core::{Dataset, Error, FeatureProvider, Result};
use std::sync::Arc;

/// Rank `dataset` on tokio's blocking pool and hand it back when done.
///
/// The dataset is returned only on success; on error it is dropped, matching
/// the rule that a failed pass leaves nothing usable.
pub async fn rank_detached<P>(
    ranker: Arc<CandidateRanker>,
    mut dataset: Dataset,
    features: Arc<P>,
    field: String,
    cancel: CancellationToken,
) -> Result<(Dataset, RankSummary)>
where
    P: FeatureProvider + Send + 'static,
{
    let handle = tokio::task::spawn_blocking(move || -> Result<(Dataset, RankSummary)> {
        let summary = ranker.rank_with_cancel(&mut dataset, features.as_ref(), &field, &cancel)?;
        Ok((dataset, summary))
    });

    match handle.await {
        Ok(result) => result,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(_) => Err(Error::Cancelled {
            completed_columns: 0,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FeatureRegistry;
    use linkrank_core::{Candidate, Cell, FeatureTable, Row};

    fn job() -> (Dataset, FeatureTable) {
        let dataset = Dataset::new(vec![Row::new(
            0,
            vec![Cell::new(0, "Berlin")
                .with_candidates(vec![Candidate::new("Q821244"), Candidate::new("Q64")])],
        )]);
        let mut table = FeatureTable::new();
        table
            .push_column(0, vec!["ed_score".to_string()], vec![vec![0.4], vec![1.0]])
            .unwrap();
        (dataset, table)
    }

    #[tokio::test]
    async fn test_rank_detached() {
        let (dataset, table) = job();
        let ranker = Arc::new(CandidateRanker::unsupervised(FeatureRegistry::default()));

        let (ranked, summary) = rank_detached(
            ranker,
            dataset,
            Arc::new(table),
            "rank".to_string(),
            CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(summary.candidates, 2);
        assert_eq!(ranked.rows[0].cells[0].candidates[0].id, "Q64");
    }

    #[tokio::test]
    async fn test_rank_detached_cancelled() {
        let (dataset, table) = job();
        let ranker = Arc::new(CandidateRanker::unsupervised(FeatureRegistry::default()));
        let token = CancellationToken::new();
        token.cancel();

        let result = rank_detached(ranker, dataset, Arc::new(table), "rank".to_string(), token).await;
        assert!(matches!(result, Err(Error::Cancelled { .. })));
    }
}
