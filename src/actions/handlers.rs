//! Built-in browser actions.
//!
//! Every handler validates its value before touching the browser. Bad values
//! and restricted pages produce a notification and leave the browser alone.
use std::sync::Arc;

use async_trait::async_trait;

use crate::actions::handler::{ActionContext, ActionHandler};
use crate::actions::host::{Notification, PageScript, TabInfo, TabPosition, TabUpdate};
use crate::actions::restrict::is_restricted;
use crate::actions::values::{
    self, HistoryDirection, MoveTarget, MuteMode, SwitchTarget, TabCommand, ZoomChange, MAX_ZOOM,
    MIN_ZOOM,
};
use crate::errors::GestureDockResult;

pub fn builtin_handlers() -> Vec<Arc<dyn ActionHandler>> {
    vec![
        Arc::new(NewTab),
        Arc::new(CloseTab),
        Arc::new(ReloadPage),
        Arc::new(GoBack),
        Arc::new(GoForward),
        Arc::new(NextTab),
        Arc::new(PreviousTab),
        Arc::new(OpenDashboard),
        Arc::new(OpenPage),
        Arc::new(ScrollBy),
        Arc::new(SetZoom),
        Arc::new(ControlZoom),
        Arc::new(MuteControl),
        Arc::new(MoveTab),
        Arc::new(ManageTab),
        Arc::new(SwitchTab),
        Arc::new(NavigateHistory),
        Arc::new(FindTab),
        Arc::new(ExecScript),
    ]
}

// ── Shared guards ───────────────────────────────────────────────────────────

fn active_tab<'a>(ctx: &'a ActionContext, action: &str) -> Option<&'a TabInfo> {
    if ctx.active_tab.is_none() {
        tracing::debug!(action, "no active tab; skipping");
    }
    ctx.active_tab.as_ref()
}

/// Active tab if it is not a privileged page; notifies otherwise.
async fn scriptable_tab<'a>(
    ctx: &'a ActionContext,
    action: &str,
    display_name: &str,
) -> Option<&'a TabInfo> {
    let tab = active_tab(ctx, action)?;
    if is_restricted(tab) {
        tracing::info!(action, url = tab.url.as_deref().unwrap_or(""), "restricted page; skipping");
        ctx.notify(Notification::restricted(display_name)).await;
        return None;
    }
    Some(tab)
}

async fn invalid(ctx: &ActionContext, action: &str, id: &str, message: &str) {
    tracing::warn!(action, "invalid custom value");
    ctx.notify(Notification::invalid_value(id, message)).await;
}

/// Activates the tab `offset` positions away from the active one, wrapping.
async fn cycle_tab(ctx: &ActionContext, offset: isize) -> GestureDockResult<()> {
    let tabs = ctx.host.query_tabs().await?;
    if tabs.len() <= 1 {
        return Ok(());
    }
    let len = tabs.len() as isize;
    let current = tabs.iter().position(|t| t.active).unwrap_or(0) as isize;
    let target = &tabs[(current + offset).rem_euclid(len) as usize];
    ctx.host.update_tab(target.id, TabUpdate::activate()).await
}

async fn run_history(
    ctx: &ActionContext,
    action: &str,
    display_name: &str,
    dir: HistoryDirection,
) -> GestureDockResult<()> {
    let Some(tab) = scriptable_tab(ctx, action, display_name).await else {
        return Ok(());
    };
    let script = match dir {
        HistoryDirection::Back => PageScript::HistoryBack,
        HistoryDirection::Forward => PageScript::HistoryForward,
    };
    ctx.host.run_script(tab.id, script).await
}

fn find_tab<'a>(tabs: &'a [TabInfo], query: &str) -> Option<&'a TabInfo> {
    let needle = query.to_lowercase();
    tabs.iter().find(|t| {
        t.title.as_deref().is_some_and(|s| s.to_lowercase().contains(&needle))
            || t.url.as_deref().is_some_and(|s| s.to_lowercase().contains(&needle))
    })
}

async fn activate_matching(ctx: &ActionContext, query: &str) -> GestureDockResult<()> {
    let tabs = ctx.host.query_tabs().await?;
    match find_tab(&tabs, query) {
        Some(found) => ctx.host.update_tab(found.id, TabUpdate::activate()).await,
        None => {
            ctx.notify(Notification::new(
                "NoTabFound",
                "Tab Not Found",
                "There is no currently opened tab that matches your query.",
            ))
            .await;
            Ok(())
        }
    }
}

// ── Simple actions ──────────────────────────────────────────────────────────

pub struct NewTab;

#[async_trait]
impl ActionHandler for NewTab {
    fn id(&self) -> &str {
        "newTab"
    }

    async fn execute(&self, _value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        ctx.host.create_tab(None).await
    }
}

pub struct CloseTab;

#[async_trait]
impl ActionHandler for CloseTab {
    fn id(&self) -> &str {
        "closeTab"
    }

    async fn execute(&self, _value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        match active_tab(ctx, self.id()) {
            Some(tab) => ctx.host.remove_tab(tab.id).await,
            None => Ok(()),
        }
    }
}

pub struct ReloadPage;

#[async_trait]
impl ActionHandler for ReloadPage {
    fn id(&self) -> &str {
        "reloadPage"
    }

    async fn execute(&self, _value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        match active_tab(ctx, self.id()) {
            Some(tab) => ctx.host.reload_tab(tab.id).await,
            None => Ok(()),
        }
    }
}

pub struct GoBack;

#[async_trait]
impl ActionHandler for GoBack {
    fn id(&self) -> &str {
        "goBack"
    }

    async fn execute(&self, _value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        run_history(ctx, self.id(), "Go Back", HistoryDirection::Back).await
    }
}

pub struct GoForward;

#[async_trait]
impl ActionHandler for GoForward {
    fn id(&self) -> &str {
        "goForward"
    }

    async fn execute(&self, _value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        run_history(ctx, self.id(), "Go Forward", HistoryDirection::Forward).await
    }
}

pub struct NextTab;

#[async_trait]
impl ActionHandler for NextTab {
    fn id(&self) -> &str {
        "nextTab"
    }

    async fn execute(&self, _value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        cycle_tab(ctx, 1).await
    }
}

pub struct PreviousTab;

#[async_trait]
impl ActionHandler for PreviousTab {
    fn id(&self) -> &str {
        "previousTab"
    }

    async fn execute(&self, _value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        cycle_tab(ctx, -1).await
    }
}

pub struct OpenDashboard;

#[async_trait]
impl ActionHandler for OpenDashboard {
    fn id(&self) -> &str {
        "openDashboard"
    }

    async fn execute(&self, _value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        ctx.host.open_options_page().await
    }
}

// ── Actions with a custom value ─────────────────────────────────────────────

pub struct OpenPage;

#[async_trait]
impl ActionHandler for OpenPage {
    fn id(&self) -> &str {
        "openPage"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        let Some(url) = values::parse_url(value) else {
            invalid(
                ctx,
                self.id(),
                "InvalidURL",
                "You must enter a valid URL (ex: https://google.com) for the openPage action.",
            )
            .await;
            return Ok(());
        };
        ctx.host.create_tab(Some(url.as_str())).await
    }
}

pub struct ScrollBy;

#[async_trait]
impl ActionHandler for ScrollBy {
    fn id(&self) -> &str {
        "scrollBy"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        let Some(percent) = values::parse_int(value) else {
            invalid(
                ctx,
                self.id(),
                "InvalidScroll",
                "You must enter a number for the scrollBy action.",
            )
            .await;
            return Ok(());
        };
        let Some(tab) = scriptable_tab(ctx, self.id(), "The scroll action").await else {
            return Ok(());
        };
        ctx.host.run_script(tab.id, PageScript::ScrollBy { percent }).await
    }
}

pub struct SetZoom;

#[async_trait]
impl ActionHandler for SetZoom {
    fn id(&self) -> &str {
        "setZoom"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        let percent = match values::parse_int(value) {
            Some(p) if values::zoom_in_range(p) => p,
            _ => {
                invalid(
                    ctx,
                    self.id(),
                    "InvalidZoom",
                    "You must enter a number between 25 and 500 for the setZoom action.",
                )
                .await;
                return Ok(());
            }
        };
        let Some(tab) = scriptable_tab(ctx, self.id(), "Set zoom").await else {
            return Ok(());
        };
        ctx.host.set_zoom(tab.id, percent as f64 / 100.0).await
    }
}

pub struct ControlZoom;

#[async_trait]
impl ActionHandler for ControlZoom {
    fn id(&self) -> &str {
        "controlZoom"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        let change = match values::parse_zoom(value) {
            Some(ZoomChange::Absolute(p)) if !values::zoom_in_range(p) => None,
            other => other,
        };
        let Some(change) = change else {
            invalid(
                ctx,
                self.id(),
                "InvalidControlZoom",
                "You must enter +N, -N or N (25-500) for the controlZoom action.",
            )
            .await;
            return Ok(());
        };
        let Some(tab) = scriptable_tab(ctx, self.id(), "Control zoom").await else {
            return Ok(());
        };
        let factor = match change {
            ZoomChange::Relative(delta) => {
                let current = ctx.host.get_zoom(tab.id).await?;
                (current + delta as f64 / 100.0).clamp(MIN_ZOOM, MAX_ZOOM)
            }
            ZoomChange::Absolute(p) => p as f64 / 100.0,
        };
        ctx.host.set_zoom(tab.id, factor).await
    }
}

pub struct MuteControl;

#[async_trait]
impl ActionHandler for MuteControl {
    fn id(&self) -> &str {
        "muteControl"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        let Some(mode) = values::parse_mute(value) else {
            invalid(
                ctx,
                self.id(),
                "InvalidMute",
                "The muteControl action accepts toggle, mute or unmute.",
            )
            .await;
            return Ok(());
        };
        let Some(tab) = active_tab(ctx, self.id()) else {
            return Ok(());
        };
        let muted = match mode {
            MuteMode::Toggle => !tab.muted,
            MuteMode::Mute => true,
            MuteMode::Unmute => false,
        };
        ctx.host.update_tab(tab.id, TabUpdate::muted(muted)).await
    }
}

pub struct MoveTab;

#[async_trait]
impl ActionHandler for MoveTab {
    fn id(&self) -> &str {
        "moveTab"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        let Some(target) = values::parse_move(value) else {
            invalid(
                ctx,
                self.id(),
                "InvalidMoveTab",
                "The moveTab action accepts start, end, left, right or a tab position.",
            )
            .await;
            return Ok(());
        };
        let Some(tab) = active_tab(ctx, self.id()) else {
            return Ok(());
        };
        let position = match target {
            MoveTarget::Start => TabPosition::Index(0),
            MoveTarget::End => TabPosition::End,
            MoveTarget::Left if tab.index <= 0 => return Ok(()),
            MoveTarget::Left => TabPosition::Index((tab.index - 1) as u32),
            MoveTarget::Right => TabPosition::Index((tab.index + 1) as u32),
            MoveTarget::Position(n) => TabPosition::Index(n - 1),
        };
        ctx.host.move_tab(tab.id, position).await
    }
}

pub struct ManageTab;

#[async_trait]
impl ActionHandler for ManageTab {
    fn id(&self) -> &str {
        "manageTab"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        let Some(command) = values::parse_tab_command(value) else {
            invalid(
                ctx,
                self.id(),
                "InvalidManageTab",
                "The manageTab action accepts new, close, duplicate or pin.",
            )
            .await;
            return Ok(());
        };
        if command == TabCommand::New {
            return ctx.host.create_tab(None).await;
        }
        let Some(tab) = active_tab(ctx, self.id()) else {
            return Ok(());
        };
        match command {
            TabCommand::Close => ctx.host.remove_tab(tab.id).await,
            TabCommand::Duplicate => ctx.host.duplicate_tab(tab.id).await,
            TabCommand::Pin => ctx.host.update_tab(tab.id, TabUpdate::pinned(!tab.pinned)).await,
            TabCommand::New => Ok(()),
        }
    }
}

pub struct SwitchTab;

#[async_trait]
impl ActionHandler for SwitchTab {
    fn id(&self) -> &str {
        "switchTab"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        match values::parse_switch(value) {
            Some(SwitchTarget::Next) => cycle_tab(ctx, 1).await,
            Some(SwitchTarget::Previous) => cycle_tab(ctx, -1).await,
            Some(SwitchTarget::Query(query)) => activate_matching(ctx, &query).await,
            None => {
                invalid(
                    ctx,
                    self.id(),
                    "InvalidSwitchTab",
                    "The switchTab action accepts next, previous or a tab name.",
                )
                .await;
                Ok(())
            }
        }
    }
}

pub struct NavigateHistory;

#[async_trait]
impl ActionHandler for NavigateHistory {
    fn id(&self) -> &str {
        "navigateHistory"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        let Some(dir) = values::parse_history(value) else {
            invalid(
                ctx,
                self.id(),
                "InvalidNavigateHistory",
                "The navigateHistory action accepts back or forward.",
            )
            .await;
            return Ok(());
        };
        run_history(ctx, self.id(), "Navigate History", dir).await
    }
}

pub struct FindTab;

#[async_trait]
impl ActionHandler for FindTab {
    fn id(&self) -> &str {
        "findTab"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(query) => activate_matching(ctx, query).await,
            None => {
                invalid(
                    ctx,
                    self.id(),
                    "InvalidFindTab",
                    "You must enter a tab name for the findTab action.",
                )
                .await;
                Ok(())
            }
        }
    }
}

pub struct ExecScript;

#[async_trait]
impl ActionHandler for ExecScript {
    fn id(&self) -> &str {
        "execScript"
    }

    async fn execute(&self, value: Option<&str>, ctx: &ActionContext) -> GestureDockResult<()> {
        let Some(code) = value.filter(|v| !v.trim().is_empty()) else {
            invalid(
                ctx,
                self.id(),
                "InvalidScript",
                "You must enter a script for the execScript action.",
            )
            .await;
            return Ok(());
        };
        let Some(tab) = scriptable_tab(ctx, self.id(), "Execute script").await else {
            return Ok(());
        };
        ctx.host
            .run_script(tab.id, PageScript::Custom { code: code.to_string() })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{tab, HostCall, RecordingHost};

    fn web_tab() -> TabInfo {
        tab(7, 2, "https://example.com/docs", "Docs", true)
    }

    fn window() -> Vec<TabInfo> {
        vec![
            tab(1, 0, "https://mail.example.com", "Inbox", false),
            tab(2, 1, "https://www.youtube.com/watch", "Music - YouTube", true),
            tab(3, 2, "https://news.example.com", "News", false),
        ]
    }

    fn activated(id: i64) -> HostCall {
        HostCall::UpdateTab(id, TabUpdate::activate())
    }

    #[tokio::test]
    async fn test_scroll_invalid_value_notifies() {
        let host = RecordingHost::new();
        ScrollBy.execute(Some("abc"), &host.context(Some(web_tab()))).await.unwrap();
        assert_eq!(host.notification_ids(), vec!["InvalidScroll"]);
        assert_eq!(host.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_scroll_runs_script() {
        let host = RecordingHost::new();
        ScrollBy.execute(Some("-90"), &host.context(Some(web_tab()))).await.unwrap();
        assert_eq!(
            host.calls(),
            vec![HostCall::RunScript(7, PageScript::ScrollBy { percent: -90 })]
        );
    }

    #[tokio::test]
    async fn test_scroll_restricted_page() {
        let host = RecordingHost::new();
        let settings = tab(9, 0, "chrome://settings", "Settings", true);
        ScrollBy.execute(Some("50"), &host.context(Some(settings))).await.unwrap();
        assert_eq!(host.notification_ids(), vec!["RestrictedURL"]);
        assert!(!host.calls().iter().any(|c| matches!(c, HostCall::RunScript(..))));
    }

    #[tokio::test]
    async fn test_control_zoom_invalid_value_notifies() {
        let host = RecordingHost::new();
        ControlZoom.execute(Some("xyz"), &host.context(Some(web_tab()))).await.unwrap();
        assert_eq!(host.notification_ids(), vec!["InvalidControlZoom"]);
        assert!(!host.calls().iter().any(|c| matches!(c, HostCall::SetZoom(..))));
    }

    #[tokio::test]
    async fn test_control_zoom_relative() {
        let host = RecordingHost::new();
        host.set_zoom_factor(1.0);
        ControlZoom.execute(Some("+15"), &host.context(Some(web_tab()))).await.unwrap();
        match host.calls().as_slice() {
            [HostCall::SetZoom(7, f)] => assert!((f - 1.15).abs() < 1e-9),
            calls => panic!("unexpected calls {calls:?}"),
        }
    }

    #[tokio::test]
    async fn test_control_zoom_absolute() {
        let host = RecordingHost::new();
        host.set_zoom_factor(0.8);
        ControlZoom.execute(Some("150"), &host.context(Some(web_tab()))).await.unwrap();
        assert_eq!(host.calls(), vec![HostCall::SetZoom(7, 1.5)]);
    }

    #[tokio::test]
    async fn test_control_zoom_relative_is_clamped() {
        let host = RecordingHost::new();
        host.set_zoom_factor(0.3);
        ControlZoom.execute(Some("-50"), &host.context(Some(web_tab()))).await.unwrap();
        assert_eq!(host.calls(), vec![HostCall::SetZoom(7, MIN_ZOOM)]);
    }

    #[tokio::test]
    async fn test_set_zoom_out_of_range() {
        let host = RecordingHost::new();
        SetZoom.execute(Some("900"), &host.context(Some(web_tab()))).await.unwrap();
        assert_eq!(host.notification_ids(), vec!["InvalidZoom"]);
    }

    #[tokio::test]
    async fn test_open_page_validates_url() {
        let host = RecordingHost::new();
        let ctx = host.context(None);
        OpenPage.execute(Some("not a url"), &ctx).await.unwrap();
        OpenPage.execute(Some("https://youtube.com"), &ctx).await.unwrap();
        let calls = host.calls();
        assert!(matches!(&calls[0], HostCall::Notify(n) if n.id == "InvalidURL"));
        assert_eq!(calls[1], HostCall::CreateTab(Some("https://youtube.com/".into())));
    }

    #[tokio::test]
    async fn test_mute_modes() {
        let host = RecordingHost::new();
        let mut muted_tab = web_tab();
        muted_tab.muted = true;
        let ctx = host.context(Some(muted_tab));
        MuteControl.execute(Some("toggle"), &ctx).await.unwrap();
        MuteControl.execute(Some("mute"), &ctx).await.unwrap();
        MuteControl.execute(Some("loud"), &ctx).await.unwrap();
        let muted = |m| HostCall::UpdateTab(7, TabUpdate::muted(m));
        let calls = host.calls();
        assert_eq!(calls[0], muted(false));
        assert_eq!(calls[1], muted(true));
        assert!(matches!(&calls[2], HostCall::Notify(n) if n.id == "InvalidMute"));
    }

    #[tokio::test]
    async fn test_move_tab_targets() {
        let host = RecordingHost::new();
        let ctx = host.context(Some(web_tab()));
        for v in ["start", "end", "left", "right", "1"] {
            MoveTab.execute(Some(v), &ctx).await.unwrap();
        }
        assert_eq!(
            host.calls(),
            vec![
                HostCall::MoveTab(7, TabPosition::Index(0)),
                HostCall::MoveTab(7, TabPosition::End),
                HostCall::MoveTab(7, TabPosition::Index(1)),
                HostCall::MoveTab(7, TabPosition::Index(3)),
                HostCall::MoveTab(7, TabPosition::Index(0)),
            ]
        );
    }

    #[tokio::test]
    async fn test_move_left_at_start_is_noop() {
        let host = RecordingHost::new();
        let first = tab(4, 0, "https://example.com", "Ex", true);
        MoveTab.execute(Some("left"), &host.context(Some(first))).await.unwrap();
        assert!(host.calls().is_empty());
    }

    #[tokio::test]
    async fn test_next_and_previous_wrap() {
        let host = RecordingHost::with_tabs(window());
        let ctx = host.context(None);
        NextTab.execute(None, &ctx).await.unwrap();
        PreviousTab.execute(None, &ctx).await.unwrap();
        SwitchTab.execute(Some("previous"), &ctx).await.unwrap();
        assert_eq!(host.calls(), vec![activated(3), activated(1), activated(1)]);
    }

    #[tokio::test]
    async fn test_single_tab_window_does_not_cycle() {
        let host = RecordingHost::with_tabs(vec![web_tab()]);
        NextTab.execute(None, &host.context(None)).await.unwrap();
        assert!(host.calls().is_empty());
    }

    #[tokio::test]
    async fn test_find_tab() {
        let host = RecordingHost::with_tabs(window());
        let ctx = host.context(None);
        FindTab.execute(Some("youtube"), &ctx).await.unwrap();
        SwitchTab.execute(Some("NEWS"), &ctx).await.unwrap();
        FindTab.execute(Some("calendar"), &ctx).await.unwrap();
        let calls = host.calls();
        assert_eq!(calls[0], activated(2));
        assert_eq!(calls[1], activated(3));
        assert!(matches!(&calls[2], HostCall::Notify(n) if n.id == "NoTabFound"));
    }

    #[tokio::test]
    async fn test_manage_tab() {
        let host = RecordingHost::new();
        let ctx = host.context(Some(web_tab()));
        for v in ["new", "duplicate", "pin", "close"] {
            ManageTab.execute(Some(v), &ctx).await.unwrap();
        }
        assert_eq!(
            host.calls(),
            vec![
                HostCall::CreateTab(None),
                HostCall::DuplicateTab(7),
                HostCall::UpdateTab(7, TabUpdate::pinned(true)),
                HostCall::RemoveTab(7),
            ]
        );
    }

    #[tokio::test]
    async fn test_navigate_history() {
        let host = RecordingHost::new();
        let ctx = host.context(Some(web_tab()));
        NavigateHistory.execute(Some("back"), &ctx).await.unwrap();
        GoForward.execute(None, &ctx).await.unwrap();
        NavigateHistory.execute(None, &ctx).await.unwrap();
        let calls = host.calls();
        assert_eq!(calls[0], HostCall::RunScript(7, PageScript::HistoryBack));
        assert_eq!(calls[1], HostCall::RunScript(7, PageScript::HistoryForward));
        assert!(matches!(&calls[2], HostCall::Notify(n) if n.id == "InvalidNavigateHistory"));
    }

    #[tokio::test]
    async fn test_exec_script_blocked_on_webstore() {
        let host = RecordingHost::new();
        let store = tab(5, 0, "https://chromewebstore.google.com/detail/x", "Store", true);
        ExecScript.execute(Some("alert('hi')"), &host.context(Some(store))).await.unwrap();
        assert_eq!(host.notification_ids(), vec!["RestrictedURL"]);
    }

    #[tokio::test]
    async fn test_tab_actions_without_tab_are_noops() {
        let host = RecordingHost::new();
        let ctx = host.context(None);
        CloseTab.execute(None, &ctx).await.unwrap();
        ReloadPage.execute(None, &ctx).await.unwrap();
        GoBack.execute(None, &ctx).await.unwrap();
        assert!(host.calls().is_empty());
    }

    #[tokio::test]
    async fn test_simple_actions() {
        let host = RecordingHost::new();
        let ctx = host.context(Some(web_tab()));
        NewTab.execute(None, &ctx).await.unwrap();
        ReloadPage.execute(None, &ctx).await.unwrap();
        OpenDashboard.execute(None, &ctx).await.unwrap();
        assert_eq!(
            host.calls(),
            vec![HostCall::CreateTab(None), HostCall::ReloadTab(7), HostCall::OpenOptionsPage]
        );
    }
}
