use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Feature vectors and candidates disagree in count.
    Alignment,
    /// The predictive model failed or returned something unusable.
    Scoring,
    /// Registry or header setup makes scoring impossible.
    Configuration,
    /// Malformed input data.
    InvalidInput,
    /// The pass was cancelled between columns.
    Cancelled,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Alignment overrun on column {column}: only {available} feature vectors available")]
    AlignmentOverrun { column: usize, available: usize },

    #[error("Alignment underrun on column {column}: expected {expected} feature vectors to be consumed, got {consumed}")]
    AlignmentUnderrun {
        column: usize,
        expected: usize,
        consumed: usize,
    },

    #[error("Inference failed on column {column}: {source}")]
    Inference {
        column: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("Malformed prediction on column {column} at index {index}: {reason}")]
    MalformedPrediction {
        column: usize,
        index: usize,
        reason: String,
    },

    #[error("No registered feature found in header of column {column}")]
    EmptyFeatureSelection { column: usize },

    #[error("Header of feature vector {index} on column {column} differs from the column header")]
    HeaderMismatch { column: usize, index: usize },

    #[error("Feature registry cannot be empty")]
    EmptyRegistry,

    #[error("Invalid feature vector: header has {header_len} names, got {values_len} values")]
    InvalidFeatureVector { header_len: usize, values_len: usize },

    #[error("Feature '{name}' is not a finite number")]
    NonFiniteFeature { name: String },

    #[error("Ranking cancelled after {completed_columns} columns")]
    Cancelled { completed_columns: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlignmentOverrun { .. } | Error::AlignmentUnderrun { .. } => ErrorKind::Alignment,
            Error::Inference { .. } | Error::MalformedPrediction { .. } => ErrorKind::Scoring,
            Error::EmptyFeatureSelection { .. }
            | Error::HeaderMismatch { .. }
            | Error::EmptyRegistry => ErrorKind::Configuration,
            Error::InvalidFeatureVector { .. } | Error::NonFiniteFeature { .. } => {
                ErrorKind::InvalidInput
            }
            Error::Cancelled { .. } => ErrorKind::Cancelled,
        }
    }

    /// Column the error was raised for, when it is column-scoped.
    pub fn column(&self) -> Option<usize> {
        match self {
            Error::AlignmentOverrun { column, .. }
            | Error::AlignmentUnderrun { column, .. }
            | Error::Inference { column, .. }
            | Error::MalformedPrediction { column, .. }
            | Error::EmptyFeatureSelection { column }
            | Error::HeaderMismatch { column, .. } => Some(*column),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kinds() {
        assert_eq!(
            Error::AlignmentOverrun { column: 0, available: 2 }.kind(),
            ErrorKind::Alignment
        );
        assert_eq!(Error::EmptyRegistry.kind(), ErrorKind::Configuration);
        assert_eq!(
            Error::Cancelled { completed_columns: 1 }.kind(),
            ErrorKind::Cancelled
        );
    }

    #[test]
    fn test_inference_keeps_source() {
        let err = Error::Inference {
            column: 3,
            source: anyhow::anyhow!("model offline"),
        };
        assert_eq!(err.kind(), ErrorKind::Scoring);
        assert_eq!(err.column(), Some(3));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("model offline"));
    }
}
