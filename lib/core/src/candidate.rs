use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A knowledge-graph entity proposed as a match for a cell value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    /// Entity identifier in the knowledge graph (e.g. a Wikidata QID)
    pub id: String,
    /// Entity label, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Heuristic features computed upstream
    #[serde(default)]
    pub features: HashMap<String, f64>,
    /// Scores written by ranking passes, keyed by field name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scores: BTreeMap<String, f64>,
}

impl Candidate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            features: HashMap::new(),
            scores: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_feature(mut self, name: impl Into<String>, value: f64) -> Self {
        self.features.insert(name.into(), value);
        self
    }

    /// Score stored under `field`, if a pass has written one
    pub fn score(&self, field: &str) -> Option<f64> {
        self.scores.get(field).copied()
    }

    /// Add or overwrite the score stored under `field`
    pub fn set_score(&mut self, field: &str, value: f64) {
        self.scores.insert(field.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_fields_coexist() {
        let mut candidate = Candidate::new("Q90").with_name("Paris");
        candidate.set_score("rank", 0.5);
        candidate.set_score("rank_v2", 0.7);
        candidate.set_score("rank", 0.9);

        assert_eq!(candidate.score("rank"), Some(0.9));
        assert_eq!(candidate.score("rank_v2"), Some(0.7));
        assert_eq!(candidate.score("missing"), None);
    }

    #[test]
    fn test_builder_keeps_features() {
        let candidate = Candidate::new("Q90")
            .with_feature("ed_score", 0.9)
            .with_feature("p_obj_ne", 0.4);
        assert_eq!(candidate.features.len(), 2);
        assert_eq!(candidate.features.get("ed_score"), Some(&0.9));

        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["features"]["p_obj_ne"], 0.4);
    }

    #[test]
    fn test_deserialize_without_scores() {
        let candidate: Candidate = serde_json::from_str(
            r#"{"id": "Q64", "features": {"ed_score": 0.8}}"#,
        )
        .unwrap();
        assert_eq!(candidate.id, "Q64");
        assert!(candidate.scores.is_empty());
        assert_eq!(candidate.features.get("ed_score"), Some(&0.8));
    }
}
