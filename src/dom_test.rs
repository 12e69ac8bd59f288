use super::*;

// =============================================================
// MemoryElement
// =============================================================

#[test]
fn builders_do_not_count_as_mutations() {
    let el = MemoryElement::new().with_attribute("data-x", "1").with_class("a");
    assert_eq!(el.attribute("data-x").as_deref(), Some("1"));
    assert!(el.has_class("a"));
    assert_eq!(el.mutations(), 0);
}

#[test]
fn set_class_adds_and_removes() {
    let el = MemoryElement::new();
    el.set_class("dark", true);
    assert!(el.has_class("dark"));
    el.set_class("dark", false);
    assert!(!el.has_class("dark"));
    assert_eq!(el.mutations(), 2);
}

#[test]
fn set_class_leaves_other_classes() {
    let el = MemoryElement::new().with_class("layout");
    el.set_class("dark", true);
    el.set_class("dark", false);
    assert!(el.has_class("layout"));
}

#[test]
fn set_text_replaces_text() {
    let el = MemoryElement::new();
    el.set_text("one");
    el.set_text("two");
    assert_eq!(el.text(), "two");
}

#[test]
fn clones_share_state() {
    let el = MemoryElement::new();
    let other = el.clone();
    other.set_attribute("data-theme", "dark");
    assert_eq!(el.attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(el.mutations(), 1);
}

#[test]
fn missing_attribute_is_none() {
    assert_eq!(MemoryElement::new().attribute("data-label-on"), None);
}

// =============================================================
// MemoryDocument
// =============================================================

#[test]
fn lookup_finds_inserted_elements() {
    let mut doc = MemoryDocument::new();
    doc.insert("a", MemoryElement::new().with_class("x"));
    assert!(doc.element_by_id("a").is_some_and(|el| el.has_class("x")));
    assert!(doc.element_by_id("b").is_none());
}

#[test]
fn lookup_returns_shared_handle() {
    let mut doc = MemoryDocument::new();
    doc.insert("a", MemoryElement::new());
    if let Some(el) = doc.element_by_id("a") {
        el.set_text("hi");
    }
    assert_eq!(doc.get("a").map(MemoryElement::text).as_deref(), Some("hi"));
}

#[test]
fn remove_drops_element() {
    let mut doc = MemoryDocument::new();
    doc.insert("a", MemoryElement::new());
    assert!(doc.remove("a").is_some());
    assert!(doc.element_by_id("a").is_none());
}

#[test]
fn document_root_is_always_present() {
    let doc = MemoryDocument::new();
    let root = doc.document_root();
    assert!(root.is_some());
    if let Some(root) = root {
        root.set_attribute("data-bs-theme", "dark");
    }
    assert_eq!(doc.root().attribute("data-bs-theme").as_deref(), Some("dark"));
}
