//! Dark/light theme toggle for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. On mount it
//! reads the stored preference from `localStorage`, renders it onto the page
//! (a theme attribute on `<html>`, a class on the container, and the toggle
//! button's icon and label), and wires the button's `click` to flip and
//! persist the preference. The logic is written against small traits so the
//! same code runs natively against in-memory fakes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`toggle`] | [`toggle::ThemeToggle`]: mount, render, click handling |
//! | [`theme`] | [`theme::Theme`] preference and its derived [`theme::ThemeView`] |
//! | [`store`] | [`store::PreferenceStore`] seam and the in-memory store |
//! | [`dom`] | [`dom::ThemeElement`] / [`dom::ElementLookup`] seams and in-memory elements |
//! | [`config`] | [`config::ToggleConfig`]: element IDs, storage key, class and label names |
//! | [`consts`] | Default names and glyphs for the page contract |
//! | `browser` | web-sys bindings and `#[wasm_bindgen]` entry points (`hydrate` only) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod store;
pub mod theme;
pub mod toggle;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::{ConfigError, ToggleConfig};
pub use theme::Theme;
pub use toggle::{MountError, ThemeToggle};
