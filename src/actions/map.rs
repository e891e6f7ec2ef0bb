use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::recognition::vocabulary;

/// Configured binding of a gesture to an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Handler id; empty means the gesture is deliberately unbound.
    #[serde(rename = "id", alias = "action_id", default)]
    pub action_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ActionDescriptor {
    pub fn new(action_id: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            action_id: action_id.into(),
            value: value.map(str::to_string),
        }
    }
}

/// Mapping shipped for first runs.
pub fn default_action_map() -> HashMap<String, ActionDescriptor> {
    [
        ("Point (left)", "previousTab"),
        ("Point (right)", "nextTab"),
        ("Two", "newTab"),
        ("Three", "closeTab"),
        ("Four", "reloadPage"),
        ("Open Hand", "openDashboard"),
    ]
    .into_iter()
    .map(|(gesture, id)| (gesture.to_string(), ActionDescriptor::new(id, None)))
    .collect()
}

/// Per-action repeat cooldowns (ms) shipped for first runs.
pub fn default_cooldowns() -> HashMap<String, u64> {
    [
        ("scrollBy", 500),
        ("controlZoom", 500),
        ("nextTab", 1000),
        ("previousTab", 1000),
        ("switchTab", 1000),
        ("moveTab", 750),
    ]
    .into_iter()
    .map(|(id, ms)| (id.to_string(), ms))
    .collect()
}

/// Read-only snapshot of the gesture → action configuration.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    entries: HashMap<String, ActionDescriptor>,
}

impl ActionMap {
    /// Build from configuration, dropping keys outside the gesture vocabulary.
    pub fn from_config(raw: &HashMap<String, ActionDescriptor>) -> Self {
        let mut entries = HashMap::with_capacity(raw.len());
        for (gesture, descriptor) in raw {
            if !vocabulary::is_known(gesture) {
                tracing::warn!(gesture = %gesture, action = %descriptor.action_id, "unknown gesture in action map; ignored");
                continue;
            }
            entries.insert(gesture.clone(), descriptor.clone());
        }
        Self { entries }
    }

    /// Descriptor bound to `stable_label`, or `None` for unmapped gestures.
    pub fn resolve(&self, stable_label: &str) -> Option<&ActionDescriptor> {
        self.entries
            .get(stable_label)
            .filter(|d| !d.action_id.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ActionDescriptor)> {
        self.entries.iter()
    }
}

/// Repeat cooldown per action id with a fallback for unlisted ids.
#[derive(Debug, Clone)]
pub struct CooldownTable {
    entries: HashMap<String, u64>,
    default_ms: u64,
}

impl CooldownTable {
    pub fn new(entries: HashMap<String, u64>, default_ms: u64) -> Self {
        Self { entries, default_ms }
    }

    pub fn cooldown_ms(&self, action_id: &str) -> u64 {
        self.entries.get(action_id).copied().unwrap_or(self.default_ms)
    }
}
