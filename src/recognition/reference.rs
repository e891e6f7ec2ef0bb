use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{GestureDockError, GestureDockResult};
use crate::recognition::types::FEATURE_LEN;

const BUILTIN_REFERENCES: &str = include_str!("../../assets/reference_gestures.json");

/// Default maximum distance for a reference match.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 2.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceGesture {
    pub label: String,
    pub features: Vec<f32>,
}

/// Named reference poses for nearest-reference classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTable {
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    pub references: Vec<ReferenceGesture>,
}

fn default_threshold() -> f32 {
    DEFAULT_MATCH_THRESHOLD
}

impl ReferenceTable {
    pub fn new(references: Vec<ReferenceGesture>, threshold: f32) -> Self {
        Self { threshold, references }
    }

    /// The table shipped with the crate.
    pub fn builtin() -> GestureDockResult<Self> {
        Self::from_json_str(BUILTIN_REFERENCES)
    }

    pub fn from_json_str(json: &str) -> GestureDockResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &Path) -> GestureDockResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), count = table.references.len(), "reference table loaded");
        Ok(table)
    }

    fn validate(&self) -> GestureDockResult<()> {
        if let Some(bad) = self.references.iter().find(|r| r.features.len() != FEATURE_LEN) {
            return Err(GestureDockError::Classifier(format!(
                "reference '{}' has {} features, expected {FEATURE_LEN}",
                bad.label,
                bad.features.len()
            )));
        }
        Ok(())
    }

    /// Closest reference and its distance, if the table is non-empty.
    pub fn nearest(&self, features: &[f32]) -> Option<(&str, f32)> {
        self.references
            .iter()
            .map(|r| (r.label.as_str(), euclidean_distance(features, &r.features)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Label of the closest reference strictly under the threshold.
    pub fn best_match(&self, features: &[f32]) -> Option<&str> {
        self.nearest(features)
            .filter(|(_, dist)| *dist < self.threshold)
            .map(|(label, _)| label)
    }
}

pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}
