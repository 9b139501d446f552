//! Per-column feature vectors
//!
//! Feature vectors are computed outside this crate, one per candidate, and
//! handed over grouped by column. Within a column the i-th vector describes
//! the i-th candidate met when walking the dataset row by row, cell by cell.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Named numeric signals describing one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    header: Arc<[String]>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Create a feature vector, rejecting length mismatches and non-finite values
    pub fn new(header: Arc<[String]>, values: Vec<f64>) -> Result<Self> {
        if header.len() != values.len() {
            return Err(Error::InvalidFeatureVector {
                header_len: header.len(),
                values_len: values.len(),
            });
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteFeature {
                name: header[pos].clone(),
            });
        }
        Ok(Self { header, values })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of the named feature
    pub fn get(&self, name: &str) -> Option<f64> {
        self.header
            .iter()
            .position(|h| h == name)
            .map(|i| self.values[i])
    }

    /// True when both vectors use the same header, by identity or by content
    pub fn same_header(&self, other: &FeatureVector) -> bool {
        Arc::ptr_eq(&self.header, &other.header) || self.header == other.header
    }
}

/// Source of per-column feature vectors
pub trait FeatureProvider: Sync {
    /// Vectors for a column in candidate order; empty for unknown columns
    fn vectors_for_column(&self, column_id: usize) -> &[FeatureVector];

    /// Columns that have vectors, ascending
    fn column_ids(&self) -> Vec<usize>;
}

/// Serialized shape of one column of features
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureColumn {
    pub column: usize,
    pub header: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// In-memory [`FeatureProvider`]
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    columns: BTreeMap<usize, Vec<FeatureVector>>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rows to a column; every row shares `header`
    pub fn push_column(
        &mut self,
        column_id: usize,
        header: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Result<&mut Self> {
        let header: Arc<[String]> = header.into();
        let vectors = rows
            .into_iter()
            .map(|values| FeatureVector::new(header.clone(), values))
            .collect::<Result<Vec<_>>>()?;
        self.columns.entry(column_id).or_default().extend(vectors);
        Ok(self)
    }

    /// Append a single, already built vector to a column
    pub fn push_vector(&mut self, column_id: usize, vector: FeatureVector) {
        self.columns.entry(column_id).or_default().push(vector);
    }

    pub fn from_columns(columns: Vec<FeatureColumn>) -> Result<Self> {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column.column, column.header, column.rows)?;
        }
        Ok(table)
    }

    pub fn len(&self, column_id: usize) -> usize {
        self.columns.get(&column_id).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.values().all(Vec::is_empty)
    }
}

impl FeatureProvider for FeatureTable {
    fn vectors_for_column(&self, column_id: usize) -> &[FeatureVector] {
        self.columns
            .get(&column_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn column_ids(&self) -> Vec<usize> {
        self.columns.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = FeatureVector::new(header(&["a", "b"]).into(), vec![1.0]);
        assert!(matches!(
            result,
            Err(Error::InvalidFeatureVector { header_len: 2, values_len: 1 })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = FeatureVector::new(header(&["a", "b"]).into(), vec![1.0, f64::NAN]);
        match result {
            Err(Error::NonFiniteFeature { name }) => assert_eq!(name, "b"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_table_columns_share_header() {
        let mut table = FeatureTable::new();
        table
            .push_column(1, header(&["ed_score", "p_obj_ne"]), vec![vec![0.1, 0.2], vec![0.3, 0.4]])
            .unwrap();

        let vectors = table.vectors_for_column(1);
        assert_eq!(vectors.len(), 2);
        assert!(vectors[0].same_header(&vectors[1]));
        assert_eq!(vectors[1].get("p_obj_ne"), Some(0.4));
        assert!(table.vectors_for_column(9).is_empty());
        assert_eq!(table.column_ids(), vec![1]);
    }

    #[test]
    fn test_from_columns_json() {
        let json = r#"[
            {"column": 2, "header": ["x"], "rows": [[0.5]]},
            {"column": 0, "header": ["y"], "rows": [[0.1], [0.2]]}
        ]"#;
        let columns: Vec<FeatureColumn> = serde_json::from_str(json).unwrap();
        let table = FeatureTable::from_columns(columns).unwrap();
        assert_eq!(table.column_ids(), vec![0, 2]);
        assert_eq!(table.len(0), 2);
        assert!(!table.is_empty());
    }
}
