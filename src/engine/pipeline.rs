//! Per-frame gesture pipeline: detections → raw label → stable label →
//! resolved action → handler.
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::actions::handler::ActionContext;
use crate::actions::host::BrowserHost;
use crate::actions::map::{ActionMap, CooldownTable};
use crate::actions::registry::ActionRegistry;
use crate::config::{AppConfig, ClassifierConfig, ClassifierKind};
use crate::engine::event_bus::{EventBus, PipelineEvent};
use crate::engine::journal::ActionJournal;
use crate::errors::{GestureDockError, GestureDockResult};
use crate::recognition::classifier::{ClassifierStrategy, GestureClassifier, LabelIndex};
use crate::recognition::filter::filter_detections;
use crate::recognition::onnx_model::OnnxGestureModel;
use crate::recognition::reference::ReferenceTable;
use crate::recognition::stability::{Promotion, StabilityTracker};
use crate::recognition::types::HandDetection;
use crate::recognition::vocabulary::NONE_LABEL;

/// Result of one pipeline step.
#[derive(Debug, Default)]
pub struct FrameOutcome {
    /// Label fed to the tracker; `None` when the frame was dropped.
    pub raw_label: Option<String>,
    pub promotion: Option<Promotion>,
    /// Background task running the dispatched handler, if any.
    pub dispatch: Option<JoinHandle<()>>,
}

/// Build the configured classifier strategy.
pub fn classifier_from_config(
    config: &ClassifierConfig,
    mirror_enabled: bool,
) -> GestureDockResult<GestureClassifier> {
    let strategy = match config.strategy {
        ClassifierKind::NearestReference => {
            let mut table = match &config.reference_path {
                Some(path) => ReferenceTable::load(path)?,
                None => ReferenceTable::builtin()?,
            };
            table.threshold = config.threshold;
            ClassifierStrategy::NearestReference(table)
        }
        ClassifierKind::Model => {
            let model_path = config.model_path.as_deref().ok_or_else(|| {
                GestureDockError::Config(
                    "classifier.model_path is required for the model strategy".into(),
                )
            })?;
            let label_path = config.label_map_path.as_deref().ok_or_else(|| {
                GestureDockError::Config(
                    "classifier.label_map_path is required for the model strategy".into(),
                )
            })?;
            let labels = LabelIndex::load(label_path)?;
            let model = OnnxGestureModel::try_new(model_path).ok_or_else(|| {
                GestureDockError::Model(format!("model unavailable at {}", model_path.display()))
            })?;
            ClassifierStrategy::Model {
                model: Arc::new(model),
                labels,
            }
        }
    };
    Ok(GestureClassifier::new(strategy).with_mirror(mirror_enabled))
}

/// Owns all per-stream state. Calls must be made sequentially, one frame at
/// a time, in arrival order.
pub struct GesturePipeline {
    classifier: GestureClassifier,
    tracker: StabilityTracker,
    action_map: ActionMap,
    cooldowns: CooldownTable,
    min_spread: f32,
    registry: Arc<ActionRegistry>,
    host: Arc<dyn BrowserHost>,
    events: EventBus,
    journal: Option<ActionJournal>,
}

impl GesturePipeline {
    pub fn new(
        config: &AppConfig,
        classifier: GestureClassifier,
        registry: Arc<ActionRegistry>,
        host: Arc<dyn BrowserHost>,
    ) -> Self {
        let mut pipeline = Self {
            classifier,
            tracker: StabilityTracker::new(config.stability()),
            action_map: ActionMap::default(),
            cooldowns: CooldownTable::new(
                config.cooldowns.clone(),
                config.recognition.default_cooldown_ms,
            ),
            min_spread: config.recognition.min_spread_px,
            registry,
            host,
            events: EventBus::new(),
            journal: None,
        };
        pipeline.apply_config(config);
        pipeline
    }

    pub fn with_journal(mut self, journal: ActionJournal) -> Self {
        tracing::info!(session = %journal.session_id, path = %journal.path().display(), "action journal enabled");
        self.journal = Some(journal);
        self
    }

    /// Swap in new user settings. Tracker progress is kept; the classifier
    /// strategy itself is fixed at construction.
    pub fn apply_config(&mut self, config: &AppConfig) {
        self.classifier.set_mirror(config.recognition.mirror_enabled);
        self.tracker.set_config(config.stability());
        self.cooldowns = CooldownTable::new(
            config.cooldowns.clone(),
            config.recognition.default_cooldown_ms,
        );
        self.min_spread = config.recognition.min_spread_px;
        self.action_map = ActionMap::from_config(&config.action_map);

        for (gesture, descriptor) in self.action_map.iter() {
            if !descriptor.action_id.is_empty() && !self.registry.contains(&descriptor.action_id) {
                tracing::warn!(gesture = %gesture, action = %descriptor.action_id, "action map references unknown action");
            }
        }
        tracing::debug!(
            mappings = self.action_map.len(),
            mirror = config.recognition.mirror_enabled,
            classifier = self.classifier.strategy_name(),
            "pipeline configured"
        );
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn stable_label(&self) -> &str {
        self.tracker.stable_label()
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    /// Run one frame of pose-source output through the pipeline.
    pub async fn process_frame(
        &mut self,
        detections: Vec<HandDetection>,
        now_ms: u64,
    ) -> FrameOutcome {
        let hands = filter_detections(detections, self.min_spread);
        let label = match hands.first() {
            None => NONE_LABEL.to_string(),
            Some(hand) => match self.classifier.classify(&hand.keypoints).await {
                Ok(label) => label,
                Err(e) => {
                    tracing::warn!(error = %e, "classification failed; frame dropped");
                    self.events.send(PipelineEvent::FrameDropped { reason: e.to_string() });
                    return FrameOutcome::default();
                }
            },
        };
        self.process_label(&label, now_ms).await
    }

    /// Feed an already classified raw label.
    pub async fn process_label(&mut self, raw_label: &str, now_ms: u64) -> FrameOutcome {
        let mut outcome = FrameOutcome {
            raw_label: Some(raw_label.to_string()),
            ..FrameOutcome::default()
        };

        let Some(promotion) = self.tracker.observe(raw_label, now_ms) else {
            return outcome;
        };
        if promotion.changed {
            self.events.send(PipelineEvent::StableGestureChanged {
                gesture: promotion.label.clone(),
                timestamp_ms: now_ms,
            });
        }
        outcome.dispatch = self.trigger_action(&promotion.label).await;
        outcome.promotion = Some(promotion);
        outcome
    }

    async fn trigger_action(&mut self, gesture: &str) -> Option<JoinHandle<()>> {
        let descriptor = self.action_map.resolve(gesture)?.clone();

        // Throttle repeats before the handler gets a chance to run.
        let cooldown_ms = self.cooldowns.cooldown_ms(&descriptor.action_id);
        self.tracker.apply_cooldown(cooldown_ms);

        let active_tab = match self.host.active_tab().await {
            Ok(tab) => tab,
            Err(e) => {
                tracing::warn!(error = %e, "active tab lookup failed; continuing without tab");
                None
            }
        };

        if let Some(journal) = &self.journal {
            let value = descriptor.value.as_deref();
            if let Err(e) = journal.record(gesture, &descriptor.action_id, value) {
                tracing::warn!(error = %e, "journal write failed");
            }
        }
        self.events.send(PipelineEvent::ActionDispatched {
            gesture: gesture.to_string(),
            action_id: descriptor.action_id.clone(),
            value: descriptor.value.clone(),
            cooldown_ms,
        });

        let ctx = ActionContext::new(self.host.clone(), active_tab);
        let registry = self.registry.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = registry
                .dispatch(&descriptor.action_id, descriptor.value.as_deref(), &ctx)
                .await
            {
                tracing::warn!(action = %descriptor.action_id, error = %e, "action failed");
            }
        }))
    }
}
