//! Heuristic feature registry
//!
//! Names the features that the unsupervised scorer averages. The registry is
//! plain configuration: build one from any list of names, load it from JSON,
//! or use [`FeatureRegistry::default`] for the standard heuristic set.

use ahash::AHashSet;
use linkrank_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Standard heuristic features: string similarity, subject/object type
/// compatibility, and column (cta) / column-pair (cpa) classification tiers.
pub const HEURISTIC_FEATURES: [&str; 18] = [
    "ed_score",
    "jaccard_score",
    "jaccardNgram_score",
    "p_subj_ne",
    "p_subj_lit_datatype",
    "p_subj_lit_all_datatype",
    "p_subj_lit_row",
    "p_obj_ne",
    "cta_t1",
    "cta_t2",
    "cta_t3",
    "cta_t4",
    "cta_t5",
    "cpa_t1",
    "cpa_t2",
    "cpa_t3",
    "cpa_t4",
    "cpa_t5",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureRegistry {
    names: Vec<String>,
    #[serde(skip)]
    lookup: AHashSet<String>,
}

impl FeatureRegistry {
    /// Build a registry from feature names. Duplicates collapse, first one wins.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lookup = AHashSet::new();
        let mut ordered = Vec::new();
        for name in names {
            let name = name.into();
            if lookup.insert(name.clone()) {
                ordered.push(name);
            }
        }
        if ordered.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        Ok(Self {
            names: ordered,
            lookup,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Positions in `header` whose name is registered, in header order
    pub fn select_indices(&self, header: &[String]) -> Vec<usize> {
        header
            .iter()
            .enumerate()
            .filter(|(_, name)| self.contains(name))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self {
            names: HEURISTIC_FEATURES.iter().map(|s| s.to_string()).collect(),
            lookup: HEURISTIC_FEATURES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PartialEq for FeatureRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl TryFrom<Vec<String>> for FeatureRegistry {
    type Error = Error;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::new(names)
    }
}

impl From<FeatureRegistry> for Vec<String> {
    fn from(registry: FeatureRegistry) -> Self {
        registry.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_registry() {
        let registry = FeatureRegistry::default();
        assert_eq!(registry.len(), 18);
        assert!(registry.contains("jaccardNgram_score"));
        assert!(registry.contains("cpa_t5"));
        assert!(!registry.contains("cpa_t6"));
    }

    #[test]
    fn test_select_indices_in_header_order() {
        let registry = FeatureRegistry::new(["jaccard_score", "ed_score"]).unwrap();
        let indices = registry.select_indices(&header(&["ed_score", "foo", "jaccard_score"]));
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let registry = FeatureRegistry::new(["a", "b", "a"]).unwrap();
        assert_eq!(registry.names(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_empty_registry_error() {
        let result = FeatureRegistry::new(Vec::<String>::new());
        assert!(matches!(result, Err(Error::EmptyRegistry)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let registry = FeatureRegistry::new(["ed_score", "p_obj_ne"]).unwrap();
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, r#"["ed_score","p_obj_ne"]"#);

        let parsed: FeatureRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, registry);
        assert!(parsed.contains("p_obj_ne"));

        assert!(serde_json::from_str::<FeatureRegistry>("[]").is_err());
    }
}
