pub mod actions;
pub mod config;
pub mod engine;
pub mod errors;
pub mod recognition;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc};

use crate::actions::host::{BrowserHost, LoggingHost};
use crate::actions::registry::ActionRegistry;
use crate::config::AppConfig;
use crate::engine::engine::FrameEngine;
use crate::engine::journal::ActionJournal;
use crate::engine::pipeline::{classifier_from_config, GesturePipeline};
use crate::engine::state::{EngineMessage, FrameInput};
use crate::errors::{GestureDockError, GestureDockResult};
use crate::recognition::classifier::{ClassifierStrategy, GestureClassifier};
use crate::recognition::reference::ReferenceTable;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Build the pipeline from config, falling back to the built-in reference
/// table when the configured classifier cannot be loaded.
pub fn build_pipeline(
    config: &AppConfig,
    host: Arc<dyn BrowserHost>,
) -> GestureDockResult<GesturePipeline> {
    let mirror = config.recognition.mirror_enabled;
    let classifier = match classifier_from_config(&config.classifier, mirror) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load classifier; using built-in reference table");
            let table = ReferenceTable::builtin()?;
            GestureClassifier::new(ClassifierStrategy::NearestReference(table)).with_mirror(mirror)
        }
    };
    let registry = Arc::new(ActionRegistry::with_builtin_handlers());
    tracing::info!(actions = ?registry.list_ids(), classifier = classifier.strategy_name(), "pipeline ready");

    let mut pipeline = GesturePipeline::new(config, classifier, registry, host);
    if config.journal.enabled {
        pipeline = pipeline.with_journal(ActionJournal::new(config.journal.dir.as_deref()));
    }
    Ok(pipeline)
}

/// Command-line driver: reads JSON-lines frames from stdin, writes pipeline
/// events as JSON lines to stdout. Browser operations go to the log.
pub async fn run() -> GestureDockResult<()> {
    // Load .env file if present (ignore error if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match config::load_or_init_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load config; starting with defaults");
            AppConfig::default()
        }
    };

    let pipeline = build_pipeline(&config, Arc::new(LoggingHost))?;
    let mut events = pipeline.events().subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::warn!(error = %e, "event serialization failed"),
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "event printer lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    // Create the frame queue (buffer=32).
    let (tx, rx) = mpsc::channel::<EngineMessage>(32);

    tracing::info!("spawning FrameEngine background task");
    let engine_task = tokio::spawn(async move {
        let mut engine = FrameEngine::new(pipeline, rx);
        engine.run_loop().await;
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let frame: FrameInput = match serde_json::from_str(line) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(error = %e, "malformed frame line skipped");
                continue;
            }
        };
        if tx.send(EngineMessage::Frame(frame)).await.is_err() {
            tracing::warn!("frame engine gone; stopping input");
            break;
        }
    }

    let _ = tx.send(EngineMessage::Stop).await;
    engine_task
        .await
        .map_err(|e| GestureDockError::Engine(format!("frame engine task failed: {e}")))
}
