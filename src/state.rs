#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Presentational state mirrored onto the page's class lists.
///
/// The default is the freshly loaded page: menu closed, header not sticky,
/// light theme, no highlighted section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile menu is open (menu icon "open", navbar "active").
    pub menu_open: bool,
    /// Header carries the sticky class.
    pub header_sticky: bool,
    /// Dark theme is applied to the body.
    pub dark_mode: bool,
    /// Section whose nav link is highlighted by the scroll-spy.
    pub active_section: Option<String>,
}
