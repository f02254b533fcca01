//! Client-side interaction layer for the storefront's static pages.
//!
//! This crate is compiled to WebAssembly and loaded by every page. It opens
//! and closes the mobile navigation menu, pins the header once the page is
//! scrolled, and carries two features that are off unless the page's config
//! block enables them: a dark-mode toggle and a scroll-spy that highlights
//! the nav link of the section in view.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pure `(state, event) -> effects` transitions, [`engine::ControllerCore`] |
//! | [`controller`] | [`controller::Controller`]: elements bound to the core |
//! | [`browser`] | `web-sys` adapters, listeners, wasm entry point |
//! | [`dom`] | The element-lookup and class-list traits the controller depends on |
//! | [`event`] | Input events and output effects |
//! | [`state`] | Presentational UI state |
//! | [`scroll_spy`] | Section geometry and link matching |
//! | [`config`] | Selectors, class names, thresholds, feature switches |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Defaults for the storefront markup |

pub mod browser;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod engine;
pub mod error;
pub mod event;
pub mod scroll_spy;
pub mod state;
