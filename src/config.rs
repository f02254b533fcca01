//! Controller configuration.
//!
//! Defaults describe the storefront markup as shipped. A page may override
//! any subset of fields with an inline block:
//!
//! ```html
//! <script type="application/json" id="sitenav-config">
//!   { "dark_mode": true, "sticky_threshold_px": 80 }
//! </script>
//! ```
//!
//! Fields left out keep their defaults. Dark mode and scroll-spy are off
//! unless switched on here.

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::UiError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Selectors, class names, thresholds and feature switches for one mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub menu_icon: String,
    pub navbar: String,
    pub header: String,
    pub theme_toggle: String,
    pub sections: String,
    pub nav_links: String,

    pub open_class: String,
    pub active_class: String,
    pub sticky_class: String,
    pub theme_icon_class: String,
    pub dark_mode_class: String,

    /// Header is sticky when the scroll offset is strictly greater than this.
    pub sticky_threshold_px: f64,
    /// Look-ahead subtracted from each section's top edge by the scroll-spy.
    pub spy_offset_px: f64,

    /// Wire the theme toggle.
    pub dark_mode: bool,
    /// Highlight the nav link of the section in view.
    pub scroll_spy: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            menu_icon: consts::MENU_ICON_SELECTOR.to_owned(),
            navbar: consts::NAVBAR_SELECTOR.to_owned(),
            header: consts::HEADER_SELECTOR.to_owned(),
            theme_toggle: consts::THEME_TOGGLE_SELECTOR.to_owned(),
            sections: consts::SECTION_SELECTOR.to_owned(),
            nav_links: consts::NAV_LINK_SELECTOR.to_owned(),
            open_class: consts::OPEN_CLASS.to_owned(),
            active_class: consts::ACTIVE_CLASS.to_owned(),
            sticky_class: consts::STICKY_CLASS.to_owned(),
            theme_icon_class: consts::THEME_ICON_CLASS.to_owned(),
            dark_mode_class: consts::DARK_MODE_CLASS.to_owned(),
            sticky_threshold_px: consts::STICKY_THRESHOLD_PX,
            spy_offset_px: consts::SPY_OFFSET_PX,
            dark_mode: false,
            scroll_spy: false,
        }
    }
}

impl UiConfig {
    /// Build a validated config from the inline JSON block's text.
    ///
    /// `None` or blank text yields the defaults.
    ///
    /// # Errors
    /// Returns [`UiError::Config`] for malformed JSON or unknown fields, and
    /// [`UiError::ConfigValue`] for empty selectors/class names or thresholds
    /// that are negative or not finite.
    pub fn from_json(raw: Option<&str>) -> Result<Self, UiError> {
        let config = match raw.map(str::trim) {
            None | Some("") => Self::default(),
            Some(text) => serde_json::from_str::<Self>(text)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field the controller relies on.
    ///
    /// # Errors
    /// Returns [`UiError::ConfigValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), UiError> {
        let text_fields = [
            ("menu_icon", &self.menu_icon),
            ("navbar", &self.navbar),
            ("header", &self.header),
            ("theme_toggle", &self.theme_toggle),
            ("sections", &self.sections),
            ("nav_links", &self.nav_links),
            ("open_class", &self.open_class),
            ("active_class", &self.active_class),
            ("sticky_class", &self.sticky_class),
            ("theme_icon_class", &self.theme_icon_class),
            ("dark_mode_class", &self.dark_mode_class),
        ];
        for (name, value) in text_fields {
            require_non_empty(name, value)?;
        }
        for (name, class) in [
            ("open_class", &self.open_class),
            ("active_class", &self.active_class),
            ("sticky_class", &self.sticky_class),
            ("theme_icon_class", &self.theme_icon_class),
            ("dark_mode_class", &self.dark_mode_class),
        ] {
            require_class_token(name, class)?;
        }
        require_length("sticky_threshold_px", self.sticky_threshold_px)?;
        require_length("spy_offset_px", self.spy_offset_px)?;
        Ok(())
    }
}

fn require_non_empty(name: &str, value: &str) -> Result<(), UiError> {
    if value.trim().is_empty() {
        return Err(UiError::ConfigValue(format!("{name} must not be empty")));
    }
    Ok(())
}

fn require_class_token(name: &str, value: &str) -> Result<(), UiError> {
    if value.chars().any(char::is_whitespace) {
        return Err(UiError::ConfigValue(format!("{name} must be a single class name, got `{value}`")));
    }
    Ok(())
}

fn require_length(name: &str, value: f64) -> Result<(), UiError> {
    if !value.is_finite() || value < 0.0 {
        return Err(UiError::ConfigValue(format!("{name} must be a finite non-negative length, got {value}")));
    }
    Ok(())
}
