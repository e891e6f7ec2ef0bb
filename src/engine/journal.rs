use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::GestureDockResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub ts: i64,
    pub gesture: String,
    pub action_id: String,
    pub value: Option<String>,
}

/// Per-session JSONL log of dispatched actions.
pub struct ActionJournal {
    pub session_id: String,
    file_path: PathBuf,
}

impl ActionJournal {
    pub fn new(dir: Option<&Path>) -> Self {
        let session_id = uuid::Uuid::new_v4().to_string();
        let dir = dir.map(Path::to_path_buf).unwrap_or_else(data_dir_or_cwd);
        if let Err(e) = std::fs::create_dir_all(&dir) {
            tracing::warn!(path = %dir.display(), error = %e, "cannot create journal directory");
        }
        let file_path = dir.join(format!("session_{session_id}.jsonl"));
        Self { session_id, file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn record(
        &self,
        gesture: &str,
        action_id: &str,
        value: Option<&str>,
    ) -> GestureDockResult<()> {
        let entry = JournalEntry {
            ts: chrono::Utc::now().timestamp_millis(),
            gesture: gesture.to_string(),
            action_id: action_id.to_string(),
            value: value.map(str::to_string),
        };
        let line = serde_json::to_string(&entry)?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;
        writeln!(file, "{}", line)?;
        tracing::debug!(path = %self.file_path.display(), "journal entry flushed");
        Ok(())
    }
}

/// `<data dir>/gesturedock/sessions`, falling back to the working directory.
fn data_dir_or_cwd() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("gesturedock").join("sessions");
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
