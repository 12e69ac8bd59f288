//! DOM seams used by the toggle.
//!
//! [`ThemeElement`] covers the handful of element operations the renderer
//! needs and [`ElementLookup`] finds elements by ID. The browser build
//! implements both for web-sys types; [`MemoryElement`] and
//! [`MemoryDocument`] are in-memory versions that also count mutations.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

/// Element operations needed to render a theme.
///
/// Methods take `&self`: browser element handles are shared references to
/// live DOM nodes.
pub trait ThemeElement {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn has_class(&self, name: &str) -> bool;
    /// Add `name` when `on`, remove it otherwise.
    fn set_class(&self, name: &str, on: bool);
    fn set_text(&self, text: &str);
}

/// Finds the elements a toggle binds to.
pub trait ElementLookup {
    type Element: ThemeElement;

    /// The `<html>` element.
    fn document_root(&self) -> Option<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

#[derive(Debug, Default)]
struct ElementState {
    attributes: HashMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    mutations: usize,
}

/// Shared-handle in-memory element. Clones refer to the same node.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for page markup. Not counted as a mutation.
    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.state.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Builder for page markup. Not counted as a mutation.
    #[must_use]
    pub fn with_class(self, name: &str) -> Self {
        self.state.borrow_mut().classes.insert(name.to_owned());
        self
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    /// Number of setter calls since creation.
    #[must_use]
    pub fn mutations(&self) -> usize {
        self.state.borrow().mutations
    }
}

impl ThemeElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        state.attributes.insert(name.to_owned(), value.to_owned());
        state.mutations += 1;
    }

    fn has_class(&self, name: &str) -> bool {
        self.state.borrow().classes.contains(name)
    }

    fn set_class(&self, name: &str, on: bool) {
        let mut state = self.state.borrow_mut();
        if on {
            state.classes.insert(name.to_owned());
        } else {
            state.classes.remove(name);
        }
        state.mutations += 1;
    }

    fn set_text(&self, text: &str) {
        let mut state = self.state.borrow_mut();
        text.clone_into(&mut state.text);
        state.mutations += 1;
    }
}

/// In-memory page: a root element plus elements registered by ID.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    root: MemoryElement,
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, element: MemoryElement) {
        self.elements.insert(id.to_owned(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<MemoryElement> {
        self.elements.remove(id)
    }

    #[must_use]
    pub fn root(&self) -> &MemoryElement {
        &self.root
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }
}

impl ElementLookup for MemoryDocument {
    type Element = MemoryElement;

    fn document_root(&self) -> Option<MemoryElement> {
        Some(self.root.clone())
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.get(id).cloned()
    }
}
