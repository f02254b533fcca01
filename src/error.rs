//! Error taxonomy for mounting and driving the controller.
//!
//! Every variant is a setup-time or browser-call fault. Class mutations on a
//! present element cannot fail on their own; when the browser still throws
//! (for example on an invalid class token) the exception message is carried
//! in [`UiError::Dom`].

use std::fmt;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// The part an element plays in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    /// Hamburger icon that opens and closes the mobile menu.
    MenuIcon,
    /// Navigation panel revealed by the menu icon.
    Navbar,
    /// Page header that turns sticky on scroll.
    Header,
    /// Sun/moon icon that switches dark mode.
    ThemeToggle,
    /// Document body carrying the dark-mode class.
    DocumentBody,
    /// Navigation link highlighted by the scroll-spy.
    NavLink,
}

impl ElementRole {
    /// Short lowercase label used in log lines and error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MenuIcon => "menu icon",
            Self::Navbar => "navbar",
            Self::Header => "header",
            Self::ThemeToggle => "theme toggle",
            Self::DocumentBody => "document body",
            Self::NavLink => "nav link",
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned by [`crate::controller::Controller::mount`],
/// [`crate::controller::Controller::dispatch`] and the browser host.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A required element did not match its selector at mount time.
    #[error("{role} element not found for selector `{selector}`")]
    MissingElement { role: ElementRole, selector: String },
    /// A browser API call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),
    /// The inline configuration block is not a valid `UiConfig`.
    #[error("invalid sitenav config: {0}")]
    Config(#[from] serde_json::Error),
    /// A configuration value parsed but is out of range or empty.
    #[error("invalid sitenav config: {0}")]
    ConfigValue(String),
    /// No `window` or `document` in this context.
    #[error("no browser window or document available")]
    NoBrowser,
}

impl UiError {
    /// Build a [`UiError::MissingElement`] for `role` and `selector`.
    #[must_use]
    pub fn missing(role: ElementRole, selector: &str) -> Self {
        Self::MissingElement { role, selector: selector.to_owned() }
    }
}
