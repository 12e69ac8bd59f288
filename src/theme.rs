//! Theme preference and the UI state derived from it.
//!
//! Everything visible on the page is a pure function of [`Theme`]:
//! [`Theme::view`] computes it once so the renderer only copies values
//! into the DOM.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ICON_MOON, ICON_SUN};

/// The user's color mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    /// Used whenever nothing valid is stored.
    #[default]
    Light,
}

impl Theme {
    /// Parse a stored value. Only the exact string `"dark"` selects dark mode.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The value written to storage and to the root theme attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Glyph of the mode a click would switch to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => ICON_SUN,
            Self::Light => ICON_MOON,
        }
    }

    /// Derive the full UI state for this theme.
    #[must_use]
    pub fn view(self, labels: &Labels) -> ThemeView {
        let label = match self {
            Self::Dark => labels.on.clone(),
            Self::Light => labels.off.clone(),
        };
        ThemeView { attribute: self.as_str(), dark_class: self.is_dark(), icon: self.icon(), label }
    }
}

/// Button label pair, already resolved against defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Shown while dark mode is on.
    pub on: String,
    /// Shown while dark mode is off.
    pub off: String,
}

impl Labels {
    /// Pick custom labels where given, defaults otherwise.
    ///
    /// Empty strings count as missing.
    #[must_use]
    pub fn resolve(custom_on: Option<String>, custom_off: Option<String>, default_on: &str, default_off: &str) -> Self {
        let pick = |custom: Option<String>, default: &str| custom.filter(|s| !s.is_empty()).unwrap_or_else(|| default.to_owned());
        Self { on: pick(custom_on, default_on), off: pick(custom_off, default_off) }
    }
}

/// Observable UI state for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeView {
    /// Value of the root theme attribute.
    pub attribute: &'static str,
    /// Whether the container carries the dark class.
    pub dark_class: bool,
    pub icon: &'static str,
    pub label: String,
}
