//! Binds resolved page elements to [`ControllerCore`] and applies its effects.
//!
//! `Controller` is generic over [`PageElement`] so the same code runs against
//! `web_sys::Element` in the browser and in-memory elements in tests. All
//! element handles are resolved once, up front; a missing required element
//! fails the mount instead of surfacing on the first event.

use crate::config::UiConfig;
use crate::dom::{ElementLookup, PageElement};
use crate::engine::ControllerCore;
use crate::error::{ElementRole, UiError};
use crate::event::{ClassKind, Effect, Target, UiEvent};
use crate::scroll_spy::SectionBounds;
use crate::state::UiState;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Element handles the controller writes to.
#[derive(Debug, Clone)]
pub struct Bindings<E> {
    pub menu_icon: E,
    pub navbar: E,
    pub header: E,
    /// Required when dark mode is enabled.
    pub theme_toggle: Option<E>,
    /// Required when dark mode is enabled.
    pub body: Option<E>,
    /// Measured on every scroll while the scroll-spy is enabled.
    pub sections: Vec<E>,
    /// Highlighted by the scroll-spy, in document order.
    pub nav_links: Vec<E>,
}

impl<E> Bindings<E> {
    /// Bindings for the always-on features only.
    #[must_use]
    pub fn new(menu_icon: E, navbar: E, header: E) -> Self {
        Self {
            menu_icon,
            navbar,
            header,
            theme_toggle: None,
            body: None,
            sections: Vec::new(),
            nav_links: Vec::new(),
        }
    }
}

/// The UI interaction controller.
#[derive(Debug)]
pub struct Controller<E> {
    config: UiConfig,
    bindings: Bindings<E>,
    core: ControllerCore,
}

impl<E: PageElement> Controller<E> {
    /// Resolve every element `config` needs through `lookup`.
    ///
    /// # Errors
    /// Returns [`UiError::MissingElement`] for the first required element
    /// that does not match, or any error from the config or the lookup.
    pub fn mount<L>(config: UiConfig, lookup: &L) -> Result<Self, UiError>
    where
        L: ElementLookup<Element = E>,
    {
        config.validate()?;
        let mut bindings = Bindings::new(
            require(lookup, ElementRole::MenuIcon, &config.menu_icon)?,
            require(lookup, ElementRole::Navbar, &config.navbar)?,
            require(lookup, ElementRole::Header, &config.header)?,
        );
        if config.dark_mode {
            bindings.theme_toggle = Some(require(lookup, ElementRole::ThemeToggle, &config.theme_toggle)?);
            bindings.body = Some(lookup.body().ok_or_else(|| UiError::missing(ElementRole::DocumentBody, "body"))?);
        }
        if config.scroll_spy {
            bindings.sections = lookup.query_all(&config.sections)?;
            bindings.nav_links = lookup.query_all(&config.nav_links)?;
        }
        Self::new(config, bindings)
    }

    /// Build a controller from already-resolved elements.
    ///
    /// The initial state is read from the elements' current classes.
    ///
    /// # Errors
    /// Returns [`UiError::MissingElement`] when dark mode is enabled but the
    /// theme toggle or body is absent, or a config validation error.
    pub fn new(config: UiConfig, bindings: Bindings<E>) -> Result<Self, UiError> {
        config.validate()?;
        let mut dark_mode = false;
        if config.dark_mode {
            if bindings.theme_toggle.is_none() {
                return Err(UiError::missing(ElementRole::ThemeToggle, &config.theme_toggle));
            }
            let body = bindings.body.as_ref().ok_or_else(|| UiError::missing(ElementRole::DocumentBody, "body"))?;
            dark_mode = body.has_class(&config.dark_mode_class);
        }

        let state = UiState {
            menu_open: bindings.menu_icon.has_class(&config.open_class),
            header_sticky: bindings.header.has_class(&config.sticky_class),
            dark_mode,
            active_section: None,
        };
        let hrefs = bindings.nav_links.iter().map(|a| a.attribute("href").unwrap_or_default()).collect();
        let core = ControllerCore::with_state(&config, state, hrefs);
        Ok(Self { config, bindings, core })
    }

    /// Run `event` through the core and apply the resulting effects.
    ///
    /// # Errors
    /// Returns the first error raised while applying an effect. Effects
    /// before it have already been applied.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Vec<Effect>, UiError> {
        let effects = self.core.handle(event);
        for effect in &effects {
            self.apply(*effect)?;
        }
        Ok(effects)
    }

    /// Handle a click on the menu icon.
    ///
    /// # Errors
    /// See [`Controller::dispatch`].
    pub fn menu_activated(&mut self) -> Result<Vec<Effect>, UiError> {
        self.dispatch(UiEvent::MenuActivated)
    }

    /// Handle a scroll to `offset_y`, measuring sections when the scroll-spy
    /// needs them.
    ///
    /// # Errors
    /// See [`Controller::dispatch`].
    pub fn scrolled(&mut self, offset_y: f64) -> Result<Vec<Effect>, UiError> {
        let sections = if self.core.wants_sections() { self.measure_sections() } else { Vec::new() };
        self.dispatch(UiEvent::Scrolled { offset_y, sections })
    }

    /// Handle a click on the theme toggle.
    ///
    /// # Errors
    /// See [`Controller::dispatch`].
    pub fn theme_toggled(&mut self) -> Result<Vec<Effect>, UiError> {
        self.dispatch(UiEvent::ThemeToggled)
    }

    #[must_use]
    pub fn core(&self) -> &ControllerCore {
        &self.core
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[must_use]
    pub fn bindings(&self) -> &Bindings<E> {
        &self.bindings
    }

    fn measure_sections(&self) -> Vec<SectionBounds> {
        self.bindings
            .sections
            .iter()
            .map(|s| SectionBounds::new(s.attribute("id").unwrap_or_default(), s.offset_top(), s.offset_height()))
            .collect()
    }

    fn apply(&self, effect: Effect) -> Result<(), UiError> {
        match effect {
            Effect::SetClass { target, class, present } => {
                let element = self.element(target)?;
                element.set_class(self.class_name(class), present)
            }
        }
    }

    fn element(&self, target: Target) -> Result<&E, UiError> {
        let b = &self.bindings;
        match target {
            Target::MenuIcon => Ok(&b.menu_icon),
            Target::Navbar => Ok(&b.navbar),
            Target::Header => Ok(&b.header),
            Target::ThemeToggle => {
                b.theme_toggle.as_ref().ok_or_else(|| UiError::missing(ElementRole::ThemeToggle, &self.config.theme_toggle))
            }
            Target::DocumentBody => b.body.as_ref().ok_or_else(|| UiError::missing(ElementRole::DocumentBody, "body")),
            Target::NavLink(i) => {
                b.nav_links.get(i).ok_or_else(|| UiError::missing(ElementRole::NavLink, &self.config.nav_links))
            }
        }
    }

    fn class_name(&self, class: ClassKind) -> &str {
        match class {
            ClassKind::Open => &self.config.open_class,
            ClassKind::Active => &self.config.active_class,
            ClassKind::Sticky => &self.config.sticky_class,
            ClassKind::ThemeIcon => &self.config.theme_icon_class,
            ClassKind::DarkMode => &self.config.dark_mode_class,
        }
    }
}

fn require<L: ElementLookup>(lookup: &L, role: ElementRole, selector: &str) -> Result<L::Element, UiError> {
    lookup.query(selector)?.ok_or_else(|| UiError::missing(role, selector))
}
