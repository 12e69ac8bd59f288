//! Browser bindings: web-sys implementations of the DOM and storage seams,
//! plus the `#[wasm_bindgen]` entry points a page calls once on load.
//!
//! Browser call failures are logged at `warn` and otherwise ignored; the
//! toggle treats storage and DOM writes as always succeeding.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Storage, Window};

use crate::config::ToggleConfig;
use crate::dom::{ElementLookup, ThemeElement};
use crate::store::PreferenceStore;
use crate::toggle::ThemeToggle;

impl ThemeElement for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = Element::set_attribute(self, name, value) {
            log::warn!("failed to set {name}: {err:?}");
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }

    fn set_class(&self, name: &str, on: bool) {
        if let Err(err) = self.class_list().toggle_with_force(name, on) {
            log::warn!("failed to toggle class {name}: {err:?}");
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

impl ElementLookup for Document {
    type Element = Element;

    fn document_root(&self) -> Option<Element> {
        self.document_element()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

/// `window.localStorage`. When storage is unavailable (privacy mode, sandboxed
/// iframe) reads return `None` and writes are dropped.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("failed to read {key}: {err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("failed to write {key}: {err:?}");
        }
    }
}

/// Mount the toggle using the default element IDs and storage key.
#[wasm_bindgen]
pub fn mount() {
    start(ToggleConfig::default());
}

/// Mount the toggle with a JSON config object; omitted fields use defaults.
///
/// # Errors
///
/// Returns the config parse error message. Missing page elements are not
/// an error: the toggle simply stays inactive.
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(config: &str) -> Result<(), JsValue> {
    let config = ToggleConfig::from_json(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    start(config);
    Ok(())
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::trace!("console logger already installed");
    }
}

fn start(config: ToggleConfig) {
    init_logging();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let store = LocalStorage::from_window(&window);

    let toggle = match ThemeToggle::mount(&document, store, config) {
        Ok(toggle) => Rc::new(toggle),
        Err(err) => {
            log::debug!("theme toggle inactive: {err}");
            return;
        }
    };

    let target = toggle.button().clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        toggle.on_click();
    });
    if let Err(err) = target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::warn!("failed to attach click listener: {err:?}");
        return;
    }
    // The listener lives as long as the page.
    on_click.forget();
}
