//! Test doubles shared by unit tests across the crate.
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::actions::handler::ActionContext;
use crate::actions::host::{BrowserHost, Notification, PageScript, TabInfo, TabPosition, TabUpdate};
use crate::errors::GestureDockResult;

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CreateTab(Option<String>),
    RemoveTab(i64),
    ReloadTab(i64),
    DuplicateTab(i64),
    UpdateTab(i64, TabUpdate),
    MoveTab(i64, TabPosition),
    SetZoom(i64, f64),
    RunScript(i64, PageScript),
    OpenOptionsPage,
    Notify(Notification),
}

/// Records every side-effecting call; tabs and zoom are preset.
pub struct RecordingHost {
    tabs: Mutex<Vec<TabInfo>>,
    zoom: Mutex<f64>,
    calls: Mutex<Vec<HostCall>>,
}

impl RecordingHost {
    pub fn new() -> Arc<Self> {
        Self::with_tabs(Vec::new())
    }

    pub fn with_tabs(tabs: Vec<TabInfo>) -> Arc<Self> {
        Arc::new(Self {
            tabs: Mutex::new(tabs),
            zoom: Mutex::new(1.0),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_zoom_factor(&self, factor: f64) {
        *self.zoom.lock().unwrap() = factor;
    }

    pub fn context(self: &Arc<Self>, active_tab: Option<TabInfo>) -> ActionContext {
        ActionContext::new(self.clone(), active_tab)
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn notification_ids(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Notify(n) => Some(n.id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn tab(id: i64, index: i32, url: &str, title: &str, active: bool) -> TabInfo {
    TabInfo {
        id,
        index,
        url: Some(url.to_string()),
        title: Some(title.to_string()),
        active,
        ..TabInfo::default()
    }
}

#[async_trait]
impl BrowserHost for RecordingHost {
    async fn query_tabs(&self) -> GestureDockResult<Vec<TabInfo>> {
        Ok(self.tabs.lock().unwrap().clone())
    }

    async fn active_tab(&self) -> GestureDockResult<Option<TabInfo>> {
        Ok(self.tabs.lock().unwrap().iter().find(|t| t.active).cloned())
    }

    async fn create_tab(&self, url: Option<&str>) -> GestureDockResult<()> {
        self.record(HostCall::CreateTab(url.map(str::to_string)));
        Ok(())
    }

    async fn remove_tab(&self, tab_id: i64) -> GestureDockResult<()> {
        self.record(HostCall::RemoveTab(tab_id));
        Ok(())
    }

    async fn reload_tab(&self, tab_id: i64) -> GestureDockResult<()> {
        self.record(HostCall::ReloadTab(tab_id));
        Ok(())
    }

    async fn duplicate_tab(&self, tab_id: i64) -> GestureDockResult<()> {
        self.record(HostCall::DuplicateTab(tab_id));
        Ok(())
    }

    async fn update_tab(&self, tab_id: i64, update: TabUpdate) -> GestureDockResult<()> {
        self.record(HostCall::UpdateTab(tab_id, update));
        Ok(())
    }

    async fn move_tab(&self, tab_id: i64, position: TabPosition) -> GestureDockResult<()> {
        self.record(HostCall::MoveTab(tab_id, position));
        Ok(())
    }

    async fn get_zoom(&self, _tab_id: i64) -> GestureDockResult<f64> {
        Ok(*self.zoom.lock().unwrap())
    }

    async fn set_zoom(&self, tab_id: i64, factor: f64) -> GestureDockResult<()> {
        self.record(HostCall::SetZoom(tab_id, factor));
        Ok(())
    }

    async fn run_script(&self, tab_id: i64, script: PageScript) -> GestureDockResult<()> {
        self.record(HostCall::RunScript(tab_id, script));
        Ok(())
    }

    async fn open_options_page(&self) -> GestureDockResult<()> {
        self.record(HostCall::OpenOptionsPage);
        Ok(())
    }

    async fn notify(&self, notification: Notification) -> GestureDockResult<()> {
        self.record(HostCall::Notify(notification));
        Ok(())
    }
}
