//! Inputs to and outputs from the transition core.
//!
//! `UiEvent` is what the browser host reports; `Effect` is what the core asks
//! the host to do about it. Effects are level-sets, never flips, so applying
//! one twice leaves the page in the same state.

use crate::scroll_spy::SectionBounds;

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

/// Something the user did.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The menu icon was clicked or tapped.
    MenuActivated,
    /// The viewport scrolled.
    Scrolled {
        /// `window.scrollY` read when the event was handled.
        offset_y: f64,
        /// Measured page sections; empty unless the scroll-spy is enabled.
        sections: Vec<SectionBounds>,
    },
    /// The theme toggle was clicked or tapped.
    ThemeToggled,
}

impl UiEvent {
    /// A scroll event without section geometry.
    #[must_use]
    pub fn scrolled(offset_y: f64) -> Self {
        Self::Scrolled { offset_y, sections: Vec::new() }
    }
}

/// An element the controller writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    MenuIcon,
    Navbar,
    Header,
    ThemeToggle,
    DocumentBody,
    /// Navigation link by its position in document order.
    NavLink(usize),
}

/// Which configured class an effect refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// Menu icon "open" glyph.
    Open,
    /// Open navbar / current nav link.
    Active,
    /// Sticky header.
    Sticky,
    /// Theme toggle sun glyph.
    ThemeIcon,
    /// Dark colour scheme on the body.
    DarkMode,
}

/// A class change for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Make `class` present on `target` iff `present`.
    SetClass { target: Target, class: ClassKind, present: bool },
}

impl Effect {
    #[must_use]
    pub fn set(target: Target, class: ClassKind, present: bool) -> Self {
        Self::SetClass { target, class, present }
    }

    /// The element this effect writes to.
    #[must_use]
    pub fn target(&self) -> Target {
        match self {
            Self::SetClass { target, .. } => *target,
        }
    }
}
