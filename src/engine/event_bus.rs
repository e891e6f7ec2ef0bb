use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Observable pipeline activity, consumed by UIs and loggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PipelineEvent {
    StableGestureChanged {
        gesture: String,
        timestamp_ms: u64,
    },
    ActionDispatched {
        gesture: String,
        action_id: String,
        value: Option<String>,
        cooldown_ms: u64,
    },
    FrameDropped {
        reason: String,
    },
}

/// Fan-out of pipeline events. Sending never blocks and never fails the
/// pipeline when nobody is listening.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<PipelineEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(100);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PipelineEvent> {
        self.tx.subscribe()
    }

    pub fn send(&self, event: PipelineEvent) {
        // Err only means there are no subscribers.
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_in_order() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        bus.send(PipelineEvent::FrameDropped { reason: "a".into() });
        bus.send(PipelineEvent::StableGestureChanged { gesture: "Fist".into(), timestamp_ms: 5 });
        assert_eq!(rx.recv().await.unwrap(), PipelineEvent::FrameDropped { reason: "a".into() });
        assert!(matches!(rx.recv().await.unwrap(), PipelineEvent::StableGestureChanged { .. }));
    }

    #[test]
    fn test_send_without_subscribers() {
        EventBus::new().send(PipelineEvent::FrameDropped { reason: "nobody".into() });
    }
}
