//! Default selectors, class names and thresholds for the storefront markup.

// ── Selectors ───────────────────────────────────────────────────

/// Hamburger icon that opens the mobile menu.
pub const MENU_ICON_SELECTOR: &str = "#menu-Icon";

/// Navigation panel shown while the mobile menu is open.
pub const NAVBAR_SELECTOR: &str = ".menu";

/// Page header that turns sticky once the page is scrolled.
pub const HEADER_SELECTOR: &str = ".header";

/// Sun/moon icon that switches the colour theme.
pub const THEME_TOGGLE_SELECTOR: &str = ".toggle-icon";

/// Page sections tracked by the scroll-spy.
pub const SECTION_SELECTOR: &str = "section";

/// Navigation links highlighted by the scroll-spy.
pub const NAV_LINK_SELECTOR: &str = "header nav a";

/// Id of the optional inline JSON block carrying a `UiConfig` override.
pub const CONFIG_ELEMENT_ID: &str = "sitenav-config";

// ── Classes ─────────────────────────────────────────────────────

/// Boxicons "close" glyph swapped onto the menu icon while open.
pub const OPEN_CLASS: &str = "bx-x";

/// Marks the open navbar and the current scroll-spy link.
pub const ACTIVE_CLASS: &str = "active";

/// Applied to the header past the scroll threshold.
pub const STICKY_CLASS: &str = "sticky";

/// Boxicons sun glyph shown on the theme toggle while dark mode is on.
pub const THEME_ICON_CLASS: &str = "bx-sun";

/// Applied to the document body while dark mode is on.
pub const DARK_MODE_CLASS: &str = "dark-mode";

// ── Thresholds ──────────────────────────────────────────────────

/// Scroll offset in CSS pixels above which the header is sticky (exclusive).
pub const STICKY_THRESHOLD_PX: f64 = 100.0;

/// How far ahead of a section's top edge the scroll-spy switches to it.
pub const SPY_OFFSET_PX: f64 = 150.0;
