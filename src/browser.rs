//! Browser host: `web-sys` implementations of the DOM services, listener
//! registration, and the WebAssembly entry points.
//!
//! Everything here is a thin adapter. Behaviour lives in
//! [`crate::controller`] and [`crate::engine`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::config::UiConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::controller::Controller;
use crate::dom::{ElementLookup, PageElement};
use crate::error::UiError;
use crate::event::Effect;

/// Controller bound to live page elements.
pub type PageController = Controller<Element>;

impl PageElement for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) -> Result<(), UiError> {
        self.class_list().toggle_with_force(class, present).map(|_| ()).map_err(|e| dom_error(&e))
    }

    fn toggle_class(&self, class: &str) -> Result<bool, UiError> {
        self.class_list().toggle(class).map_err(|e| dom_error(&e))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn offset_top(&self) -> f64 {
        self.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self) -> f64 {
        self.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_height()))
    }
}

/// [`ElementLookup`] over a live `Document`.
#[derive(Debug, Clone)]
pub struct PageDocument(pub Document);

impl ElementLookup for PageDocument {
    type Element = Element;

    fn query(&self, selector: &str) -> Result<Option<Element>, UiError> {
        self.0.query_selector(selector).map_err(|e| dom_error(&e))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, UiError> {
        let nodes = self.0.query_selector_all(selector).map_err(|e| dom_error(&e))?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect())
    }

    fn body(&self) -> Option<Element> {
        self.0.body().map(Element::from)
    }
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `kind` events on `target`.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] if the browser refuses the registration.
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, UiError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))?;
        Ok(Self { target: target.clone(), kind, callback })
    }

    /// Event type this listener is registered for.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {}", self.kind, js_error_message(&err));
        }
    }
}

/// A mounted controller and the listeners that drive it. Dropping it unbinds
/// every listener; the page keeps whatever classes were last applied.
pub struct Mounted {
    controller: Rc<RefCell<PageController>>,
    listeners: Vec<Listener>,
}

impl Mounted {
    /// Shared handle to the controller, for inspection.
    #[must_use]
    pub fn controller(&self) -> Rc<RefCell<PageController>> {
        Rc::clone(&self.controller)
    }

    /// Event types currently listened for, in registration order.
    #[must_use]
    pub fn listening(&self) -> Vec<&'static str> {
        self.listeners.iter().map(Listener::kind).collect()
    }
}

/// Read the inline config block, if the page has one.
///
/// # Errors
/// Returns [`UiError::Config`] or [`UiError::ConfigValue`] for a bad block.
pub fn read_config(document: &Document) -> Result<UiConfig, UiError> {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    UiConfig::from_json(raw.as_deref())
}

/// Resolve the page elements for `config` and start listening.
///
/// # Errors
/// Returns [`UiError::NoBrowser`] outside a browser, a
/// [`UiError::MissingElement`] for an absent required element, or
/// [`UiError::Dom`] if a listener cannot be registered.
pub fn mount(config: UiConfig) -> Result<Mounted, UiError> {
    let window = web_sys::window().ok_or(UiError::NoBrowser)?;
    let document = window.document().ok_or(UiError::NoBrowser)?;
    let dark_mode = config.dark_mode;
    let scroll_spy = config.scroll_spy;

    let controller = Controller::mount(config, &PageDocument(document))?;
    log::debug!(
        "bound menu icon, navbar and header; {} sections, {} nav links",
        controller.bindings().sections.len(),
        controller.bindings().nav_links.len()
    );
    let menu_icon = controller.bindings().menu_icon.clone();
    let theme_toggle = controller.bindings().theme_toggle.clone();
    let controller = Rc::new(RefCell::new(controller));

    let mut listeners = Vec::new();

    let c = Rc::clone(&controller);
    listeners.push(Listener::new(&menu_icon, "click", move |_| {
        report("menu click", c.borrow_mut().menu_activated());
    })?);

    let c = Rc::clone(&controller);
    let win = window.clone();
    listeners.push(Listener::new(&window, "scroll", move |_| match win.scroll_y() {
        Ok(offset_y) => report("scroll", c.borrow_mut().scrolled(offset_y)),
        Err(err) => log::error!("scroll: cannot read scrollY: {}", js_error_message(&err)),
    })?);

    if let Some(toggle) = theme_toggle {
        let c = Rc::clone(&controller);
        listeners.push(Listener::new(&toggle, "click", move |_| {
            report("theme toggle", c.borrow_mut().theme_toggled());
        })?);
    }

    log::info!("sitenav mounted (dark mode: {dark_mode}, scroll-spy: {scroll_spy})");
    Ok(Mounted { controller, listeners })
}

/// Read the page config and mount.
///
/// # Errors
/// See [`read_config`] and [`mount`].
pub fn boot() -> Result<Mounted, UiError> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(UiError::NoBrowser)?;
    mount(read_config(&document)?)
}

fn report(context: &str, result: Result<Vec<Effect>, UiError>) {
    match result {
        Ok(effects) => log::trace!("{context}: applied {} effects", effects.len()),
        Err(err) => log::error!("{context}: {err}"),
    }
}

fn dom_error(value: &JsValue) -> UiError {
    UiError::Dom(js_error_message(value))
}

/// Convert a JavaScript exception into a readable message.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|err| err.message().into()))
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(target_arch = "wasm32")]
thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

/// WebAssembly entry point: install logging and bind the page.
///
/// # Errors
/// Any mount failure is logged and rethrown to JavaScript; the menu and
/// sticky header stay inert.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("logger already installed: {err}");
    }

    let mounted = boot().map_err(|err| {
        log::error!("sitenav disabled: {err}");
        JsValue::from_str(&err.to_string())
    })?;
    MOUNTED.with(|slot| slot.replace(Some(mounted)));
    Ok(())
}

/// Remove every listener installed by [`start`].
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn unmount() {
    if MOUNTED.with(|slot| slot.take()).is_some() {
        log::info!("sitenav unmounted");
    }
}
