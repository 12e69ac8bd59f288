//! Durable preference storage.
//!
//! The browser build persists to `localStorage` (see `browser`);
//! [`MemoryStore`] stands in for it on native hosts and in tests.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::theme::Theme;

/// String key/value store that survives page reloads.
///
/// Writes are best-effort: implementations log failures instead of
/// returning them.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one entry already present.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Number of [`PreferenceStore::set`] calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// Read the stored theme, falling back to light for missing or unknown values.
pub fn load_theme(store: &impl PreferenceStore, key: &str) -> Theme {
    Theme::from_stored(store.get(key).as_deref())
}

/// Persist `theme` as `"dark"` or `"light"`.
pub fn save_theme(store: &impl PreferenceStore, key: &str, theme: Theme) {
    store.set(key, theme.as_str());
}
