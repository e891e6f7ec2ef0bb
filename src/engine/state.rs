use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::recognition::types::HandDetection;

/// Messages consumed by the frame engine, processed strictly in order.
#[derive(Debug, Clone)]
pub enum EngineMessage {
    Frame(FrameInput),
    /// Persisted settings changed (mapping, mirroring, cooldowns).
    ConfigChanged(Box<AppConfig>),
    /// Forget all tracker state, as on extension reload.
    Reset,
    Stop,
}

/// One frame of pose-source output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameInput {
    /// Capture time; filled with the receive time when absent.
    #[serde(default)]
    pub timestamp_ms: Option<u64>,
    #[serde(default)]
    pub hands: Vec<HandDetection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_input_json() {
        let frame: FrameInput =
            serde_json::from_str(r#"{"timestamp_ms": 40, "hands": []}"#).unwrap();
        assert_eq!(frame.timestamp_ms, Some(40));
        let empty: FrameInput = serde_json::from_str("{}").unwrap();
        assert!(empty.timestamp_ms.is_none());
        assert!(empty.hands.is_empty());
    }
}
