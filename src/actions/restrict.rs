//! Pages where extensions may not inject scripts or change zoom.
use crate::actions::host::TabInfo;

const RESTRICTED_PREFIXES: [&str; 4] = [
    "chrome",
    "edge://",
    "about:",
    "https://chromewebstore.google.com/",
];

/// Returns true if `url` belongs to a privileged browser page.
pub fn is_restricted_url(url: &str) -> bool {
    RESTRICTED_PREFIXES.iter().any(|p| url.starts_with(p))
}

/// Returns true if the tab shows a privileged page. Tabs without a known URL
/// are not treated as restricted.
pub fn is_restricted(tab: &TabInfo) -> bool {
    tab.url.as_deref().is_some_and(is_restricted_url)
}
