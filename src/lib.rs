//! # linkrank
//!
//! Candidate scoring and ranking for linking table cells to knowledge-graph
//! entities.
//!
//! Upstream components propose entity candidates for every cell and compute
//! heuristic features for each candidate. linkrank turns those features into
//! one score per candidate, supervised (a trained classifier) or unsupervised
//! (a uniform average of heuristic features), and sorts each cell's candidates
//! best first.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! linkrank --input job.json --output ranked.json
//! linkrank --input job.json --model model.json --field prediction
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use linkrank::prelude::*;
//!
//! let mut dataset = Dataset::new(vec![Row::new(0, vec![
//!     Cell::new(0, "Rome").with_candidates(vec![Candidate::new("Q220")]),
//! ])]);
//! let mut features = FeatureTable::new();
//! features.push_column(0, vec!["ed_score".to_string()], vec![vec![0.95]]).unwrap();
//!
//! let summary = CandidateRanker::unsupervised(FeatureRegistry::default())
//!     .rank(&mut dataset, &features, "rank")
//!     .unwrap();
//! assert_eq!(summary.candidates, 1);
//! ```
//!
//! ## Crate Structure
//!
//! - `linkrank-core` - Dataset, rows, cells, candidates, feature vectors, errors
//! - `linkrank-ranking` - Scorers, alignment cursor and the candidate ranker

pub mod job;

// Re-export core types
pub use linkrank_core::{
    Candidate, Cell, Dataset, Row,
    FeatureColumn, FeatureProvider, FeatureTable, FeatureVector,
    Error, ErrorKind, Result,
};

// Re-export ranking
pub use linkrank_ranking::{
    CandidateRanker, RankSummary, RankerConfig, CancellationToken,
    FeatureRegistry, Model, LogisticModel,
    ScoringStrategy, StrategyKind,
    rank_detached,
};

pub use job::RankingJob;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Candidate, Cell, Dataset, Row,
        FeatureProvider, FeatureTable, FeatureVector,
        Error, ErrorKind, Result,
        CandidateRanker, RankSummary, RankerConfig, CancellationToken,
        FeatureRegistry, Model, LogisticModel,
    };
}
