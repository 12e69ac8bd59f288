//! The theme toggle component.
//!
//! [`ThemeToggle::mount`] binds to the page, applies the stored preference,
//! and returns the toggle; the host wires the button's click to
//! [`ThemeToggle::on_click`]. When any required element is missing, mount
//! fails before touching the page or the store and the host stays inert.
//!
//! At click time the container's class is the source of truth, not the
//! stored value.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::config::ToggleConfig;
use crate::dom::{ElementLookup, ThemeElement};
use crate::store::{PreferenceStore, load_theme, save_theme};
use crate::theme::{Labels, Theme};

/// Error returned by [`ThemeToggle::mount`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("required element #{id} not found")]
    MissingElement { id: String },
    #[error("document root element not found")]
    MissingRoot,
}

/// A mounted toggle: the bound elements, the preference store, and the names
/// it was configured with.
#[derive(Debug)]
pub struct ThemeToggle<E, S> {
    root: E,
    container: E,
    button: E,
    icon: E,
    text: E,
    store: S,
    config: ToggleConfig,
}

impl<E: ThemeElement, S: PreferenceStore> ThemeToggle<E, S> {
    /// Bind to the page and render the stored preference.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] if the document root or any element named in
    /// [`ToggleConfig::required_ids`] is absent. Nothing is mutated in that
    /// case.
    pub fn mount<L>(page: &L, store: S, config: ToggleConfig) -> Result<Self, MountError>
    where
        L: ElementLookup<Element = E>,
    {
        let find = |id: &str| {
            page.element_by_id(id)
                .ok_or_else(|| MountError::MissingElement { id: id.to_owned() })
        };
        let container = find(&config.container_id)?;
        let button = find(&config.button_id)?;
        let icon = find(&config.icon_id)?;
        let text = find(&config.text_id)?;
        let root = page.document_root().ok_or(MountError::MissingRoot)?;

        let toggle = Self { root, container, button, icon, text, store, config };
        toggle.render(toggle.stored());
        Ok(toggle)
    }

    /// Apply `theme` to the root attribute, container class, icon, and label.
    pub fn render(&self, theme: Theme) {
        let labels = Labels::resolve(
            self.button.attribute(&self.config.label_on_attribute),
            self.button.attribute(&self.config.label_off_attribute),
            &self.config.default_label_on,
            &self.config.default_label_off,
        );
        let view = theme.view(&labels);

        self.root.set_attribute(&self.config.theme_attribute, view.attribute);
        self.container.set_class(&self.config.dark_class, view.dark_class);
        self.icon.set_text(view.icon);
        self.text.set_text(&view.label);
        log::debug!("dark mode: {}", view.dark_class);
    }

    /// Flip the theme shown on the page, persist it, and re-render.
    ///
    /// Returns the new theme.
    pub fn on_click(&self) -> Theme {
        let next = self.current().toggled();
        save_theme(&self.store, &self.config.storage_key, next);
        self.render(next);
        next
    }

    /// Theme currently shown, read from the container class.
    pub fn current(&self) -> Theme {
        Theme::from_dark(self.container.has_class(&self.config.dark_class))
    }

    /// Theme currently persisted.
    pub fn stored(&self) -> Theme {
        load_theme(&self.store, &self.config.storage_key)
    }

    pub fn button(&self) -> &E {
        &self.button
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }
}
