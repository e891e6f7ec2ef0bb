use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::{GestureDockError, GestureDockResult};
use crate::recognition::normalizer::normalize;
use crate::recognition::reference::ReferenceTable;
use crate::recognition::types::{Keypoint, INDEX_MCP, INDEX_TIP, THUMB_MCP, THUMB_TIP};
use crate::recognition::vocabulary::{self, NONE_LABEL};

/// Opaque classifier model: feature vector in, probability per label index out.
#[async_trait]
pub trait GestureModel: Send + Sync {
    async fn predict(&self, features: &[f32]) -> GestureDockResult<Vec<f32>>;
}

/// Maps model output indices to gesture labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelIndex {
    labels: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabelIndex {
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl LabelIndex {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Accepts either `["Four", "Open Hand", …]` or `{"0": "Four", "1": "Open Hand", …}`.
    pub fn from_json_str(json: &str) -> GestureDockResult<Self> {
        match serde_json::from_str::<RawLabelIndex>(json)? {
            RawLabelIndex::List(labels) => Ok(Self { labels }),
            RawLabelIndex::Map(map) => {
                let mut indexed = Vec::with_capacity(map.len());
                for (key, label) in map {
                    let idx: usize = key.parse().map_err(|_| {
                        let message = format!("label index key '{key}' is not a number");
                        GestureDockError::Classifier(message)
                    })?;
                    indexed.push((idx, label));
                }
                indexed.sort_by_key(|(idx, _)| *idx);
                if indexed.iter().enumerate().any(|(pos, (idx, _))| pos != *idx) {
                    return Err(GestureDockError::Classifier(
                        "label index keys must be contiguous from 0".into(),
                    ));
                }
                Ok(Self {
                    labels: indexed.into_iter().map(|(_, l)| l).collect(),
                })
            }
        }
    }

    pub fn load(path: &Path) -> GestureDockResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let index = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), count = index.len(), "label index loaded");
        Ok(index)
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.labels.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// How a feature vector is turned into a label.
#[derive(Clone)]
pub enum ClassifierStrategy {
    NearestReference(ReferenceTable),
    Model {
        model: Arc<dyn GestureModel>,
        labels: LabelIndex,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PointDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Cardinal direction of the base → tip vector in image space (y down).
/// Horizontal wins only when strictly larger; `mirrored` flips left/right.
pub fn direction_between(base: Keypoint, tip: Keypoint, mirrored: bool) -> PointDirection {
    let mut dx = tip.x - base.x;
    if mirrored {
        dx = -dx;
    }
    let dy = tip.y - base.y;
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            PointDirection::Right
        } else {
            PointDirection::Left
        }
    } else if dy > 0.0 {
        PointDirection::Down
    } else {
        PointDirection::Up
    }
}

/// Direction for labels that carry one; `None` for every other label.
pub fn pointing_direction(
    keypoints: &[Keypoint],
    label: &str,
    mirrored: bool,
) -> Option<PointDirection> {
    let (base, tip) = match label {
        "Point" => (INDEX_MCP, INDEX_TIP),
        "Thumb Point" => (THUMB_MCP, THUMB_TIP),
        _ => return None,
    };
    let (base, tip) = (keypoints.get(base)?, keypoints.get(tip)?);
    Some(direction_between(*base, *tip, mirrored))
}

pub struct GestureClassifier {
    strategy: ClassifierStrategy,
    mirror_enabled: bool,
}

impl GestureClassifier {
    pub fn new(strategy: ClassifierStrategy) -> Self {
        Self {
            strategy,
            mirror_enabled: false,
        }
    }

    pub fn with_mirror(mut self, mirror_enabled: bool) -> Self {
        self.mirror_enabled = mirror_enabled;
        self
    }

    pub fn set_mirror(&mut self, mirror_enabled: bool) {
        self.mirror_enabled = mirror_enabled;
    }

    pub fn strategy_name(&self) -> &'static str {
        match self.strategy {
            ClassifierStrategy::NearestReference(_) => "nearest_reference",
            ClassifierStrategy::Model { .. } => "model",
        }
    }

    /// Classify a normalized feature vector. `Ok(None)` means no confident gesture.
    pub async fn classify_features(&self, features: &[f32]) -> GestureDockResult<Option<String>> {
        if features.is_empty() {
            return Ok(None);
        }
        match &self.strategy {
            ClassifierStrategy::NearestReference(table) => {
                Ok(table.best_match(features).map(str::to_string))
            }
            ClassifierStrategy::Model { model, labels } => {
                let probs = model.predict(features).await?;
                let (best, _) = probs
                    .iter()
                    .enumerate()
                    .max_by(|a, b| a.1.total_cmp(b.1))
                    .ok_or_else(|| {
                        GestureDockError::Classifier("model returned no scores".into())
                    })?;
                let label = labels.label(best).ok_or_else(|| {
                    GestureDockError::Classifier(format!(
                        "model index {best} outside label index of {}",
                        labels.len()
                    ))
                })?;
                Ok(Some(label.to_string()))
            }
        }
    }

    /// Full per-frame classification, including the directional suffix.
    /// Always yields a label; "None" when nothing matched.
    pub async fn classify(&self, keypoints: &[Keypoint]) -> GestureDockResult<String> {
        let features = normalize(keypoints);
        let Some(label) = self.classify_features(&features).await? else {
            return Ok(NONE_LABEL.to_string());
        };
        if vocabulary::is_directional(&label) {
            if let Some(dir) = pointing_direction(keypoints, &label, self.mirror_enabled) {
                return Ok(vocabulary::with_direction(&label, dir.as_str()));
            }
        }
        Ok(label)
    }
}
