//! ONNX gesture classifier.
//!
//! Loads a small dense network (42 inputs → softmax over the label index)
//! exported from the training pipeline. Falls back gracefully if the model
//! file is missing.
use std::path::Path;

use async_trait::async_trait;
use ndarray::Array2;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Tensor;
use tokio::sync::Mutex;

use crate::errors::{GestureDockError, GestureDockResult};
use crate::recognition::classifier::GestureModel;
use crate::recognition::types::FEATURE_LEN;

pub struct OnnxGestureModel {
    session: Mutex<Session>,
}

impl OnnxGestureModel {
    /// Try to construct the model. Returns `None` if the file does not exist
    /// or cannot be loaded.
    pub fn try_new(model_path: &Path) -> Option<Self> {
        if !model_path.exists() {
            tracing::warn!(path = %model_path.display(), "gesture model not found; model classification disabled");
            return None;
        }
        match Self::build(model_path) {
            Ok(model) => {
                tracing::info!(path = %model_path.display(), "gesture model loaded");
                Some(model)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load gesture model");
                None
            }
        }
    }

    fn build(model_path: &Path) -> GestureDockResult<Self> {
        let session = Session::builder()
            .map_err(|e| GestureDockError::Model(format!("ort session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| GestureDockError::Model(format!("ort opt-level: {e}")))?
            .commit_from_file(model_path)
            .map_err(|e| GestureDockError::Model(format!("ort load model: {e}")))?;

        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

#[async_trait]
impl GestureModel for OnnxGestureModel {
    async fn predict(&self, features: &[f32]) -> GestureDockResult<Vec<f32>> {
        if features.len() != FEATURE_LEN {
            return Err(GestureDockError::Model(format!(
                "expected {FEATURE_LEN} features, got {}",
                features.len()
            )));
        }

        let input = Array2::from_shape_vec((1, FEATURE_LEN), features.to_vec())
            .map_err(|e| GestureDockError::Model(format!("input shape: {e}")))?;
        let input_value = Tensor::from_array(input)
            .map_err(|e| GestureDockError::Model(format!("ort tensor: {e}")))?;

        let mut session = self.session.lock().await;
        let outputs = session
            .run(ort::inputs![input_value])
            .map_err(|e| GestureDockError::Model(format!("ort run: {e}")))?;

        // Output shape: [1, num_labels]
        let scores: Vec<f32> = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| GestureDockError::Model(format!("extract tensor: {e}")))?
            .iter()
            .copied()
            .collect();
        Ok(scores)
    }
}
