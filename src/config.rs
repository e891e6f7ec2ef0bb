use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::actions::map::{default_action_map, default_cooldowns, ActionDescriptor};
use crate::errors::{GestureDockError, GestureDockResult};
use crate::recognition::filter::DEFAULT_MIN_SPREAD_PX;
use crate::recognition::reference::DEFAULT_MATCH_THRESHOLD;
use crate::recognition::stability::StabilityConfig;

pub const CONFIG_FILE_NAME: &str = "gesturedock.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub recognition: RecognitionConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Repeat cooldown (ms) per action id.
    #[serde(default = "default_cooldowns")]
    pub cooldowns: HashMap<String, u64>,
    /// Gesture label → bound action.
    #[serde(default = "default_action_map")]
    pub action_map: HashMap<String, ActionDescriptor>,
    #[serde(default)]
    pub journal: JournalConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recognition: RecognitionConfig::default(),
            classifier: ClassifierConfig::default(),
            cooldowns: default_cooldowns(),
            action_map: default_action_map(),
            journal: JournalConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn stability(&self) -> StabilityConfig {
        StabilityConfig {
            new_gesture_ms: self.recognition.new_gesture_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// Camera image is mirrored; flips left/right pointing directions.
    #[serde(default)]
    pub mirror_enabled: bool,
    /// Detections with a smaller keypoint spread (pixels) are ignored.
    #[serde(default = "default_min_spread")]
    pub min_spread_px: f32,
    /// Hold time before a new gesture becomes stable.
    #[serde(default = "default_new_gesture_ms")]
    pub new_gesture_ms: u64,
    /// Cooldown for action ids missing from `[cooldowns]`.
    #[serde(default = "default_cooldown_ms")]
    pub default_cooldown_ms: u64,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            mirror_enabled: false,
            min_spread_px: default_min_spread(),
            new_gesture_ms: default_new_gesture_ms(),
            default_cooldown_ms: default_cooldown_ms(),
        }
    }
}

fn default_min_spread() -> f32 {
    DEFAULT_MIN_SPREAD_PX
}

fn default_new_gesture_ms() -> u64 {
    500
}

fn default_cooldown_ms() -> u64 {
    1250
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    #[default]
    NearestReference,
    Model,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub strategy: ClassifierKind,
    /// Maximum reference distance for a match.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Custom reference table (JSON); the built-in table is used when absent.
    #[serde(default)]
    pub reference_path: Option<PathBuf>,
    /// ONNX model for the `model` strategy.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Index → label mapping produced alongside the model.
    #[serde(default)]
    pub label_map_path: Option<PathBuf>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            strategy: ClassifierKind::default(),
            threshold: default_threshold(),
            reference_path: None,
            model_path: None,
            label_map_path: None,
        }
    }
}

fn default_threshold() -> f32 {
    DEFAULT_MATCH_THRESHOLD
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JournalConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Directory for session files; defaults to the user data directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Per-user location used when no config exists yet.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gesturedock").join(CONFIG_FILE_NAME))
}

fn resolve_config_path() -> GestureDockResult<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            let candidate = parent.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "config found next to executable");
                return Ok(candidate);
            }
        }
    }

    let cwd = std::env::current_dir()?;
    let candidate = cwd.join(CONFIG_FILE_NAME);
    if candidate.exists() {
        tracing::debug!(path = %candidate.display(), "config found in working directory");
        return Ok(candidate);
    }

    if let Some(candidate) = user_config_path() {
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "config found in user config directory");
            return Ok(candidate);
        }
    }

    Err(GestureDockError::Config(format!(
        "{CONFIG_FILE_NAME} not found next to executable, in working directory or user config directory"
    )))
}

pub fn load_config_from(path: &Path) -> GestureDockResult<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    tracing::info!(
        path = %path.display(),
        strategy = ?config.classifier.strategy,
        mappings = config.action_map.len(),
        "config loaded"
    );
    Ok(config)
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> GestureDockResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn save_config(config: &AppConfig) -> GestureDockResult<()> {
    let path = match resolve_config_path() {
        Ok(p) => p,
        Err(_) => user_config_path()
            .ok_or_else(|| GestureDockError::Config("no user config directory available".into()))?,
    };
    save_config_to(config, &path)
}

/// Load the config, writing the defaults to the user config directory on
/// first run.
pub fn load_or_init_config() -> GestureDockResult<AppConfig> {
    match resolve_config_path() {
        Ok(path) => load_config_from(&path),
        Err(GestureDockError::Config(reason)) => {
            tracing::info!(reason = %reason, "no config found; writing defaults");
            let config = AppConfig::default();
            save_config(&config)?;
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.recognition.new_gesture_ms, 500);
        assert_eq!(config.recognition.default_cooldown_ms, 1250);
        assert_eq!(config.recognition.min_spread_px, 50.0);
        assert_eq!(config.classifier.strategy, ClassifierKind::NearestReference);
        assert_eq!(config.action_map, default_action_map());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [recognition]
            mirror_enabled = true
            new_gesture_ms = 300

            [classifier]
            strategy = "model"
            model_path = "model/gesture.onnx"
            label_map_path = "model/label_mapping.json"

            [cooldowns]
            scrollBy = 250

            [action_map."Point (down)"]
            id = "scrollBy"
            value = "90"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.recognition.mirror_enabled);
        assert_eq!(config.stability().new_gesture_ms, 300);
        assert_eq!(config.classifier.strategy, ClassifierKind::Model);
        assert_eq!(config.cooldowns.get("scrollBy"), Some(&250));
        assert_eq!(
            config.action_map.get("Point (down)"),
            Some(&ActionDescriptor::new("scrollBy", Some("90")))
        );
        assert_eq!(config.action_map.len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let mut config = AppConfig::default();
        config.recognition.mirror_enabled = true;
        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.recognition.mirror_enabled);
        assert_eq!(loaded.action_map, config.action_map);
        assert_eq!(loaded.cooldowns, config.cooldowns);
    }
}
