//! Ranking job files
//!
//! A job bundles a dataset with the feature columns computed for it:
//!
//! ```json
//! {
//!   "dataset": {"rows": [{"id": 0, "cells": [{"column_id": 0, "value": "Paris",
//!                "candidates": [{"id": "Q90"}]}]}]},
//!   "features": [{"column": 0, "header": ["ed_score"], "rows": [[0.9]]}]
//! }
//! ```

use anyhow::Context;
use linkrank_core::{Dataset, FeatureColumn, FeatureTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingJob {
    pub dataset: Dataset,
    #[serde(default)]
    pub features: Vec<FeatureColumn>,
}

impl RankingJob {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file {:?}", path))?;
        serde_json::from_str(&raw).with_context(|| format!("Invalid job file {:?}", path))
    }

    /// Split into the dataset and a feature provider built from the columns
    pub fn into_parts(self) -> anyhow::Result<(Dataset, FeatureTable)> {
        let features = FeatureTable::from_columns(self.features)
            .context("Invalid feature columns")?;
        Ok((self.dataset, features))
    }
}

/// Read a JSON file into any deserializable type
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {:?}", path))
}
