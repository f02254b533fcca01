//! Scroll-spy geometry: which section is in view, and which nav link points at it.
//!
//! A section becomes current `offset` pixels before its top edge reaches the
//! top of the viewport and stays current for its full height. Links are
//! matched to sections by substring on `href`, so `/#about`, `#about` and
//! `index.html#about` all select the `about` section.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

/// Measured layout of one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    /// Value of the section's `id` attribute; empty when it has none.
    pub id: String,
    /// Distance from the document top to the section's top edge, in CSS pixels.
    pub top: f64,
    /// Rendered height in CSS pixels.
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Whether `offset_y` falls in `[top - look_ahead, top - look_ahead + height)`.
    #[must_use]
    pub fn contains(&self, offset_y: f64, look_ahead: f64) -> bool {
        let start = self.top - look_ahead;
        offset_y >= start && offset_y < start + self.height
    }
}

/// Id of the section in view at `offset_y`.
///
/// When ranges overlap the last matching section in document order wins.
/// Sections without an id are skipped.
#[must_use]
pub fn active_section(sections: &[SectionBounds], offset_y: f64, look_ahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| !s.id.is_empty() && s.contains(offset_y, look_ahead))
        .map(|s| s.id.as_str())
}

/// Index of the first link whose `href` contains `section_id`.
#[must_use]
pub fn link_for_section<S: AsRef<str>>(hrefs: &[S], section_id: &str) -> Option<usize> {
    if section_id.is_empty() {
        return None;
    }
    hrefs.iter().position(|href| href.as_ref().contains(section_id))
}
