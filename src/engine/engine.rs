use std::time::Instant;

use tokio::sync::mpsc;

use crate::engine::event_bus::PipelineEvent;
use crate::engine::pipeline::GesturePipeline;
use crate::engine::state::EngineMessage;

/// Time base for frame timestamps, fixed by the first frame of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameClock {
    Unset,
    /// Frames carry capture timestamps; untimed frames are dropped.
    Source,
    /// Frames are stamped on receipt; carried timestamps are ignored.
    Receive,
}

/// Single consumer of the frame queue. Owns the pipeline, so frames are
/// handled one at a time in arrival order.
pub struct FrameEngine {
    pipeline: GesturePipeline,
    rx: mpsc::Receiver<EngineMessage>,
    started: Instant,
    clock: FrameClock,
    frames: u64,
}

impl FrameEngine {
    pub fn new(pipeline: GesturePipeline, rx: mpsc::Receiver<EngineMessage>) -> Self {
        Self {
            pipeline,
            rx,
            started: Instant::now(),
            clock: FrameClock::Unset,
            frames: 0,
        }
    }

    pub fn pipeline(&self) -> &GesturePipeline {
        &self.pipeline
    }

    /// Timestamp for a frame on the stream's clock, or `None` if the frame
    /// cannot be placed on it.
    fn frame_time(&mut self, timestamp_ms: Option<u64>) -> Option<u64> {
        if self.clock == FrameClock::Unset {
            self.clock = if timestamp_ms.is_some() {
                FrameClock::Source
            } else {
                FrameClock::Receive
            };
            tracing::debug!(clock = ?self.clock, "frame clock selected");
        }
        match self.clock {
            FrameClock::Source => timestamp_ms,
            _ => Some(self.started.elapsed().as_millis() as u64),
        }
    }

    /// Runs until `Stop` arrives or every sender is dropped.
    pub async fn run_loop(&mut self) {
        tracing::info!("frame engine started");
        while let Some(msg) = self.rx.recv().await {
            match msg {
                EngineMessage::Frame(frame) => {
                    let Some(now_ms) = self.frame_time(frame.timestamp_ms) else {
                        tracing::warn!("frame without timestamp on a timestamped stream; dropped");
                        self.pipeline.events().send(PipelineEvent::FrameDropped {
                            reason: "missing timestamp".into(),
                        });
                        continue;
                    };
                    self.frames += 1;
                    let outcome = self.pipeline.process_frame(frame.hands, now_ms).await;
                    if let Some(promotion) = &outcome.promotion {
                        tracing::debug!(
                            gesture = %promotion.label,
                            changed = promotion.changed,
                            dispatched = outcome.dispatch.is_some(),
                            "gesture promoted"
                        );
                    }
                    // Handlers run detached; the loop never waits on them.
                }
                EngineMessage::ConfigChanged(config) => {
                    tracing::info!("config changed, reconfiguring pipeline");
                    self.pipeline.apply_config(&config);
                }
                EngineMessage::Reset => {
                    tracing::info!("pipeline state reset");
                    self.pipeline.reset();
                    self.clock = FrameClock::Unset;
                }
                EngineMessage::Stop => break,
            }
        }
        tracing::info!(frames = self.frames, "frame engine stopped");
    }
}
