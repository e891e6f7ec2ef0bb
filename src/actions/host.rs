use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::GestureDockResult;

/// Snapshot of a browser tab as reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: i64,
    /// Zero-based position within its window.
    pub index: i32,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub muted: bool,
}

/// Partial tab update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabUpdate {
    pub active: Option<bool>,
    pub muted: Option<bool>,
    pub pinned: Option<bool>,
}

impl TabUpdate {
    pub fn activate() -> Self {
        Self {
            active: Some(true),
            ..Self::default()
        }
    }

    pub fn muted(muted: bool) -> Self {
        Self {
            muted: Some(muted),
            ..Self::default()
        }
    }

    pub fn pinned(pinned: bool) -> Self {
        Self {
            pinned: Some(pinned),
            ..Self::default()
        }
    }
}

/// Where a tab should be moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum TabPosition {
    Index(u32),
    End,
}

/// Code injected into a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageScript {
    /// Scroll vertically by a percentage of the page height (negative is up).
    ScrollBy { percent: i32 },
    HistoryBack,
    HistoryForward,
    /// User-supplied JavaScript.
    Custom { code: String },
}

/// User-visible, non-blocking warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Stable key for the kind of warning, e.g. `InvalidScroll`.
    pub id: String,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn invalid_value(id: &str, message: impl Into<String>) -> Self {
        Self::new(id, "Invalid Custom Value", message)
    }

    pub fn restricted(action_name: &str) -> Self {
        Self::new(
            "RestrictedURL",
            "Restricted URL",
            format!("{action_name} cannot be used in this page."),
        )
    }
}

/// Browser operations available to action handlers.
///
/// Implemented by the platform glue (extension runtime, automation driver,
/// or a test double); the pipeline only ever talks to this trait.
#[async_trait]
pub trait BrowserHost: Send + Sync {
    /// Tabs of the current window, in window order.
    async fn query_tabs(&self) -> GestureDockResult<Vec<TabInfo>>;
    async fn active_tab(&self) -> GestureDockResult<Option<TabInfo>>;
    async fn create_tab(&self, url: Option<&str>) -> GestureDockResult<()>;
    async fn remove_tab(&self, tab_id: i64) -> GestureDockResult<()>;
    async fn reload_tab(&self, tab_id: i64) -> GestureDockResult<()>;
    async fn duplicate_tab(&self, tab_id: i64) -> GestureDockResult<()>;
    async fn update_tab(&self, tab_id: i64, update: TabUpdate) -> GestureDockResult<()>;
    async fn move_tab(&self, tab_id: i64, position: TabPosition) -> GestureDockResult<()>;
    /// Zoom factor, 1.0 = 100%.
    async fn get_zoom(&self, tab_id: i64) -> GestureDockResult<f64>;
    async fn set_zoom(&self, tab_id: i64, factor: f64) -> GestureDockResult<()>;
    async fn run_script(&self, tab_id: i64, script: PageScript) -> GestureDockResult<()>;
    async fn open_options_page(&self) -> GestureDockResult<()>;
    async fn notify(&self, notification: Notification) -> GestureDockResult<()>;
}

/// Host that performs nothing and logs every call; used by the command-line
/// driver when no browser is attached.
pub struct LoggingHost;

#[async_trait]
impl BrowserHost for LoggingHost {
    async fn query_tabs(&self) -> GestureDockResult<Vec<TabInfo>> {
        Ok(Vec::new())
    }

    async fn active_tab(&self) -> GestureDockResult<Option<TabInfo>> {
        Ok(None)
    }

    async fn create_tab(&self, url: Option<&str>) -> GestureDockResult<()> {
        tracing::info!(url = url.unwrap_or("<new tab>"), "host: create tab");
        Ok(())
    }

    async fn remove_tab(&self, tab_id: i64) -> GestureDockResult<()> {
        tracing::info!(tab_id, "host: remove tab");
        Ok(())
    }

    async fn reload_tab(&self, tab_id: i64) -> GestureDockResult<()> {
        tracing::info!(tab_id, "host: reload tab");
        Ok(())
    }

    async fn duplicate_tab(&self, tab_id: i64) -> GestureDockResult<()> {
        tracing::info!(tab_id, "host: duplicate tab");
        Ok(())
    }

    async fn update_tab(&self, tab_id: i64, update: TabUpdate) -> GestureDockResult<()> {
        tracing::info!(tab_id, ?update, "host: update tab");
        Ok(())
    }

    async fn move_tab(&self, tab_id: i64, position: TabPosition) -> GestureDockResult<()> {
        tracing::info!(tab_id, ?position, "host: move tab");
        Ok(())
    }

    async fn get_zoom(&self, _tab_id: i64) -> GestureDockResult<f64> {
        Ok(1.0)
    }

    async fn set_zoom(&self, tab_id: i64, factor: f64) -> GestureDockResult<()> {
        tracing::info!(tab_id, factor, "host: set zoom");
        Ok(())
    }

    async fn run_script(&self, tab_id: i64, script: PageScript) -> GestureDockResult<()> {
        tracing::info!(tab_id, ?script, "host: run script");
        Ok(())
    }

    async fn open_options_page(&self) -> GestureDockResult<()> {
        tracing::info!("host: open options page");
        Ok(())
    }

    async fn notify(&self, notification: Notification) -> GestureDockResult<()> {
        tracing::warn!(id = %notification.id, title = %notification.title, "{}", notification.message);
        Ok(())
    }
}
