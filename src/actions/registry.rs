use std::collections::HashMap;
use std::sync::Arc;

use crate::actions::handler::{ActionContext, ActionHandler};
use crate::actions::handlers;
use crate::actions::host::Notification;
use crate::errors::{GestureDockError, GestureDockResult};

/// Registry of all action handlers, keyed by action id.
///
/// Built once at startup; adding an action kind means registering another
/// handler, dispatch itself never changes.
pub struct ActionRegistry {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry pre-populated with every built-in browser action.
    pub fn with_builtin_handlers() -> Self {
        let mut registry = Self::new();
        for handler in handlers::builtin_handlers() {
            registry.register(handler);
        }
        tracing::debug!(count = registry.handlers.len(), "builtin action handlers registered");
        registry
    }

    /// Adds a handler, replacing any previous handler with the same id.
    pub fn register(&mut self, handler: Arc<dyn ActionHandler>) {
        if let Some(old) = self.handlers.insert(handler.id().to_string(), handler) {
            tracing::warn!(id = %old.id(), "action handler replaced");
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn ActionHandler>> {
        self.handlers.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn list_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.handlers.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Run the handler registered under `id`.
    ///
    /// Permission denials from the host become a user notification. Any
    /// other failure is returned for the caller to log.
    pub async fn dispatch(
        &self,
        id: &str,
        value: Option<&str>,
        ctx: &ActionContext,
    ) -> GestureDockResult<()> {
        let handler = self.get(id).ok_or_else(|| {
            GestureDockError::Config(format!("No handler registered for action '{id}'"))
        })?;

        tracing::info!(action = %id, value = value.unwrap_or(""), "dispatching action");
        match handler.execute(value, ctx).await {
            Err(GestureDockError::PermissionDenied(reason)) => {
                tracing::warn!(action = %id, reason = %reason, "action denied by host");
                ctx.notify(Notification::new(
                    "PermissionDenied",
                    "Action Not Allowed",
                    format!("The {id} action is not allowed here: {reason}"),
                ))
                .await;
                Ok(())
            }
            other => other,
        }
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
