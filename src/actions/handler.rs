use std::sync::Arc;

use async_trait::async_trait;

use crate::actions::host::{BrowserHost, Notification, TabInfo};
use crate::errors::GestureDockResult;

/// Ambient state handed to every handler invocation.
#[derive(Clone)]
pub struct ActionContext {
    pub host: Arc<dyn BrowserHost>,
    /// Active tab at the moment the action was resolved.
    pub active_tab: Option<TabInfo>,
}

impl ActionContext {
    pub fn new(host: Arc<dyn BrowserHost>, active_tab: Option<TabInfo>) -> Self {
        Self { host, active_tab }
    }

    /// Send a warning; delivery failures are logged and swallowed.
    pub async fn notify(&self, notification: Notification) {
        let id = notification.id.clone();
        if let Err(e) = self.host.notify(notification).await {
            tracing::warn!(id = %id, error = %e, "notification delivery failed");
        }
    }
}

/// One browser action kind. All handlers are stateless per call.
///
/// Invalid `value`s and restricted pages are reported with a notification and
/// return `Ok(())`; an `Err` means the host itself failed.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Stable action id used in the action map (e.g. `scrollBy`).
    fn id(&self) -> &str;

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()>;
}
