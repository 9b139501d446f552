//! # linkrank Ranking
//!
//! Candidate scoring and ranking for table-to-knowledge-graph entity linking.
//!
//! Every cell of a table carries a list of entity candidates. This crate
//! assigns each candidate a relevance score from precomputed features and
//! orders every cell's candidates by that score, best first.
//!
//! ## Strategies
//!
//! - **Supervised**: a trained binary classifier ([`Model`]) scores a whole
//!   column in one inference call; the positive-class probability is the score.
//! - **Unsupervised**: the mean of the heuristic features named in a
//!   [`FeatureRegistry`].
//!
//! The strategy is picked once, by whether a model is supplied.
//!
//! ## Example
//!
//! ```rust
//! use linkrank_core::{Candidate, Cell, Dataset, FeatureTable, Row};
//! use linkrank_ranking::{CandidateRanker, FeatureRegistry};
//!
//! let mut dataset = Dataset::new(vec![Row::new(0, vec![
//!     Cell::new(0, "Paris").with_candidates(vec![
//!         Candidate::new("Q167646"),
//!         Candidate::new("Q90"),
//!     ]),
//! ])]);
//!
//! let mut features = FeatureTable::new();
//! features.push_column(
//!     0,
//!     vec!["ed_score".to_string(), "jaccard_score".to_string()],
//!     vec![vec![0.4, 0.2], vec![1.0, 0.8]],
//! ).unwrap();
//!
//! let ranker = CandidateRanker::unsupervised(FeatureRegistry::default());
//! ranker.rank(&mut dataset, &features, "rank").unwrap();
//!
//! let best = &dataset.rows[0].cells[0].candidates[0];
//! assert_eq!(best.id, "Q90");
//! assert_eq!(best.score("rank"), Some(0.9));
//! ```
//!
//! ## Failure
//!
//! Alignment, scoring and configuration errors abort the pass before the
//! dataset is modified.

pub mod config;
pub mod cursor;
pub mod detached;
pub mod model;
pub mod ranker;
pub mod registry;
pub mod score;
pub mod strategy;
pub mod supervised;
pub mod unsupervised;

pub use config::{CancellationToken, RankerConfig};
pub use cursor::AlignmentCursor;
pub use detached::rank_detached;
pub use model::{LogisticModel, Model, POSITIVE_CLASS};
pub use ranker::{CandidateRanker, RankSummary};
pub use registry::{FeatureRegistry, HEURISTIC_FEATURES};
pub use score::{round_score, SCORE_DECIMALS};
pub use strategy::{ScoringStrategy, StrategyKind};
pub use supervised::SupervisedScorer;
pub use unsupervised::UnsupervisedScorer;
