//! # linkrank Core
//!
//! Core data model for linkrank, the candidate scoring and ranking engine
//! for table-to-knowledge-graph entity linking.
//!
//! - [`Dataset`] - ordered rows of cells, each cell holding entity [`Candidate`]s
//! - [`FeatureVector`] - named heuristic signals for one candidate
//! - [`FeatureProvider`] - per-column feature vectors in candidate order
//! - [`Error`] - every failure a ranking pass can report
//!
//! ## Example
//!
//! ```rust
//! use linkrank_core::{Candidate, Cell, Dataset, FeatureProvider, FeatureTable, Row};
//!
//! let dataset = Dataset::new(vec![Row::new(0, vec![
//!     Cell::new(0, "Paris").with_candidates(vec![Candidate::new("Q90")]),
//! ])]);
//!
//! let mut features = FeatureTable::new();
//! features.push_column(0, vec!["ed_score".to_string()], vec![vec![0.9]]).unwrap();
//!
//! assert_eq!(dataset.candidate_counts()[&0], features.vectors_for_column(0).len());
//! ```

pub mod candidate;
pub mod dataset;
pub mod error;
pub mod feature;

pub use candidate::Candidate;
pub use dataset::{Cell, Dataset, Row};
pub use error::{Error, ErrorKind, Result};
pub use feature::{FeatureColumn, FeatureProvider, FeatureTable, FeatureVector};
