use crate::config::UiConfig;
use crate::event::{ClassKind, Effect, Target, UiEvent};
use crate::scroll_spy::{self, SectionBounds};
use crate::state::UiState;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Controller logic that does not touch the DOM.
///
/// Separated from [`crate::controller::Controller`] so every transition can
/// be tested without a browser. Each call to [`ControllerCore::handle`]
/// updates the state and returns the class changes that mirror it.
#[derive(Debug, Clone)]
pub struct ControllerCore {
    state: UiState,
    sticky_threshold_px: f64,
    spy_offset_px: f64,
    dark_mode_enabled: bool,
    scroll_spy_enabled: bool,
    nav_link_hrefs: Vec<String>,
}

impl ControllerCore {
    /// Core for a freshly loaded page.
    #[must_use]
    pub fn new(config: &UiConfig) -> Self {
        Self::with_state(config, UiState::default(), Vec::new())
    }

    /// Core starting from `state`, with the scroll-spy matching against
    /// `nav_link_hrefs` (document order).
    #[must_use]
    pub fn with_state(config: &UiConfig, state: UiState, nav_link_hrefs: Vec<String>) -> Self {
        Self {
            state,
            sticky_threshold_px: config.sticky_threshold_px,
            spy_offset_px: config.spy_offset_px,
            dark_mode_enabled: config.dark_mode,
            scroll_spy_enabled: config.scroll_spy,
            nav_link_hrefs,
        }
    }

    /// Apply `event` and return the effects for the host.
    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::MenuActivated => self.toggle_menu(),
            UiEvent::Scrolled { offset_y, sections } => self.scrolled(offset_y, &sections),
            UiEvent::ThemeToggled => self.toggle_theme(),
        }
    }

    // --- Transitions ---

    fn toggle_menu(&mut self) -> Vec<Effect> {
        self.state.menu_open = !self.state.menu_open;
        menu_effects(self.state.menu_open)
    }

    fn scrolled(&mut self, offset_y: f64, sections: &[SectionBounds]) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.scroll_spy_enabled {
            effects.extend(self.spy(offset_y, sections));
        }

        self.state.header_sticky = offset_y > self.sticky_threshold_px;
        effects.push(Effect::set(Target::Header, ClassKind::Sticky, self.state.header_sticky));

        self.state.menu_open = false;
        effects.extend(menu_effects(false));
        effects
    }

    /// Move the highlight when a different section comes into view. With no
    /// section in view the previous highlight stays.
    fn spy(&mut self, offset_y: f64, sections: &[SectionBounds]) -> Vec<Effect> {
        let Some(current) = scroll_spy::active_section(sections, offset_y, self.spy_offset_px) else {
            return Vec::new();
        };
        if self.state.active_section.as_deref() == Some(current) {
            return Vec::new();
        }

        let link = scroll_spy::link_for_section(&self.nav_link_hrefs, current);
        self.state.active_section = Some(current.to_owned());
        (0..self.nav_link_hrefs.len())
            .map(|i| Effect::set(Target::NavLink(i), ClassKind::Active, Some(i) == link))
            .collect()
    }

    fn toggle_theme(&mut self) -> Vec<Effect> {
        if !self.dark_mode_enabled {
            return Vec::new();
        }
        self.state.dark_mode = !self.state.dark_mode;
        vec![
            Effect::set(Target::ThemeToggle, ClassKind::ThemeIcon, self.state.dark_mode),
            Effect::set(Target::DocumentBody, ClassKind::DarkMode, self.state.dark_mode),
        ]
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &UiState {
        &self.state
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.state.menu_open
    }

    #[must_use]
    pub fn header_sticky(&self) -> bool {
        self.state.header_sticky
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.state.dark_mode
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.state.active_section.as_deref()
    }

    /// Whether scroll events need section geometry.
    #[must_use]
    pub fn wants_sections(&self) -> bool {
        self.scroll_spy_enabled
    }
}

fn menu_effects(open: bool) -> Vec<Effect> {
    vec![
        Effect::set(Target::MenuIcon, ClassKind::Open, open),
        Effect::set(Target::Navbar, ClassKind::Active, open),
    ]
}
