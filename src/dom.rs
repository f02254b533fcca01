//! The two DOM services the controller depends on.
//!
//! [`PageElement`] is one element's class list plus the few reads the
//! scroll-spy needs. [`ElementLookup`] resolves selectors against a document.
//! The browser host implements both over `web-sys`; tests implement them
//! in memory.

use crate::error::UiError;

/// Class-list access and layout reads for a single element.
pub trait PageElement {
    /// Whether `class` is currently in the element's class list.
    fn has_class(&self, class: &str) -> bool;

    /// Make `class` present iff `present`.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] if the browser rejects the class token.
    fn set_class(&self, class: &str, present: bool) -> Result<(), UiError>;

    /// Flip `class` and return whether it is now present.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] if the browser rejects the class token.
    fn toggle_class(&self, class: &str) -> Result<bool, UiError> {
        let next = !self.has_class(class);
        self.set_class(class, next)?;
        Ok(next)
    }

    /// Value of attribute `name`, if set.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Distance from the document top to the element's top edge, in CSS pixels.
    fn offset_top(&self) -> f64;

    /// Rendered height in CSS pixels.
    fn offset_height(&self) -> f64;
}

/// Selector resolution against one document.
pub trait ElementLookup {
    type Element: PageElement;

    /// First element matching `selector`.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] for a selector the browser cannot parse.
    fn query(&self, selector: &str) -> Result<Option<Self::Element>, UiError>;

    /// Every element matching `selector`, in document order.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] for a selector the browser cannot parse.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, UiError>;

    /// The document's `<body>`.
    fn body(&self) -> Option<Self::Element>;
}
