//! Rows, cells and datasets
//!
//! Iteration order is significant everywhere in this module: rows in
//! dataset order, cells in row order, candidates in generation order.
//! Feature vectors are matched to candidates by that order alone.

use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One value position in a table row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cell {
    #[serde(alias = "id_col")]
    pub column_id: usize,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl Cell {
    pub fn new(column_id: usize, value: impl Into<String>) -> Self {
        Self {
            column_id,
            value: value.into(),
            candidates: Vec::new(),
        }
    }

    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn column_id(&self) -> usize {
        self.column_id
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidates_mut(&mut self) -> &mut Vec<Candidate> {
        &mut self.candidates
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Row {
    #[serde(default, alias = "id_row")]
    pub id: usize,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(id: usize, cells: Vec<Cell>) -> Self {
        Self { id, cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

/// Ordered collection of rows
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    /// Number of candidates per column, across all rows
    pub fn candidate_counts(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for cell in self.cells() {
            *counts.entry(cell.column_id).or_insert(0) += cell.candidates.len();
        }
        counts
    }

    pub fn total_candidates(&self) -> usize {
        self.cells().map(|cell| cell.candidates.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Row::new(
                0,
                vec![
                    Cell::new(0, "Paris").with_candidates(vec![
                        Candidate::new("Q90"),
                        Candidate::new("Q167646"),
                    ]),
                    Cell::new(1, "France").with_candidates(vec![Candidate::new("Q142")]),
                ],
            ),
            Row::new(
                1,
                vec![
                    Cell::new(0, "Rome").with_candidates(vec![Candidate::new("Q220")]),
                    Cell::new(1, ""),
                ],
            ),
        ])
    }

    #[test]
    fn test_candidate_counts() {
        let dataset = sample();
        let counts = dataset.candidate_counts();
        assert_eq!(counts.get(&0), Some(&3));
        assert_eq!(counts.get(&1), Some(&1));
        assert_eq!(dataset.total_candidates(), 4);
    }

    #[test]
    fn test_serde_aliases() {
        let json = r#"{"rows": [{"id_row": 7, "cells": [{"id_col": 2, "value": "x"}]}]}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.rows[0].id, 7);
        assert_eq!(dataset.rows[0].cells[0].column_id(), 2);
        assert!(dataset.rows[0].cells[0].candidates().is_empty());
    }
}
