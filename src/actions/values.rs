//! Grammars for the custom `value` of configurable actions.
use std::sync::OnceLock;

use regex::Regex;
use url::Url;

/// Browser zoom limits, as factors.
pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 5.0;

fn leading_int() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid regex"))
}

/// Leading integer of `value`, ignoring trailing text (`"90%"` → 90).
pub fn parse_int(value: Option<&str>) -> Option<i32> {
    let caps = leading_int().captures(value?)?;
    caps.get(1)?.as_str().parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomChange {
    /// Percentage points added to the current zoom.
    Relative(i32),
    /// Target zoom in percent.
    Absolute(i32),
}

/// `+N`/`-N` → relative, `N` → absolute percent.
pub fn parse_zoom(value: Option<&str>) -> Option<ZoomChange> {
    let trimmed = value?.trim();
    let pct = parse_int(Some(trimmed))?;
    if trimmed.starts_with('+') || trimmed.starts_with('-') {
        Some(ZoomChange::Relative(pct))
    } else {
        Some(ZoomChange::Absolute(pct))
    }
}

pub fn zoom_in_range(percent: i32) -> bool {
    let factor = percent as f64 / 100.0;
    (MIN_ZOOM..=MAX_ZOOM).contains(&factor)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteMode {
    Toggle,
    Mute,
    Unmute,
}

pub fn parse_mute(value: Option<&str>) -> Option<MuteMode> {
    match value?.trim() {
        "toggle" => Some(MuteMode::Toggle),
        "mute" => Some(MuteMode::Mute),
        "unmute" => Some(MuteMode::Unmute),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    Start,
    End,
    Left,
    Right,
    /// 1-based position in the window.
    Position(u32),
}

pub fn parse_move(value: Option<&str>) -> Option<MoveTarget> {
    match value?.trim() {
        "start" => Some(MoveTarget::Start),
        "end" => Some(MoveTarget::End),
        "left" => Some(MoveTarget::Left),
        "right" => Some(MoveTarget::Right),
        other => match parse_int(Some(other)) {
            Some(n) if n >= 1 => Some(MoveTarget::Position(n as u32)),
            _ => None,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabCommand {
    New,
    Close,
    Duplicate,
    Pin,
}

pub fn parse_tab_command(value: Option<&str>) -> Option<TabCommand> {
    match value?.trim() {
        "new" => Some(TabCommand::New),
        "close" => Some(TabCommand::Close),
        "duplicate" => Some(TabCommand::Duplicate),
        "pin" => Some(TabCommand::Pin),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchTarget {
    Next,
    Previous,
    /// Case-insensitive title or URL fragment.
    Query(String),
}

pub fn parse_switch(value: Option<&str>) -> Option<SwitchTarget> {
    match value?.trim() {
        "" => None,
        "next" => Some(SwitchTarget::Next),
        "previous" => Some(SwitchTarget::Previous),
        query => Some(SwitchTarget::Query(query.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Back,
    Forward,
}

pub fn parse_history(value: Option<&str>) -> Option<HistoryDirection> {
    match value?.trim() {
        "back" => Some(HistoryDirection::Back),
        "forward" => Some(HistoryDirection::Forward),
        _ => None,
    }
}

/// Absolute URL with a host or a browser-internal scheme.
pub fn parse_url(value: Option<&str>) -> Option<Url> {
    let url = Url::parse(value?.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => url.host().is_some().then_some(url),
        "chrome" | "edge" | "about" | "file" => Some(url),
        _ => None,
    }
}
