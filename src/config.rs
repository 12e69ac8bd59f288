//! Toggle configuration: element IDs, storage key, and styling hook names.
//!
//! Defaults reproduce the fixed page contract in [`crate::consts`]. Hosts
//! with different markup pass a partial JSON object; omitted fields keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

/// Error returned by [`ToggleConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not a valid config object.
    #[error("invalid theme toggle config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Names the toggle uses to find elements and persist state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    pub storage_key: String,
    pub container_id: String,
    pub button_id: String,
    pub icon_id: String,
    pub text_id: String,
    /// Attribute set on the document root.
    pub theme_attribute: String,
    /// Class toggled on the container.
    pub dark_class: String,
    pub label_on_attribute: String,
    pub label_off_attribute: String,
    pub default_label_on: String,
    pub default_label_off: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_owned(),
            container_id: consts::CONTAINER_ID.to_owned(),
            button_id: consts::BUTTON_ID.to_owned(),
            icon_id: consts::ICON_ID.to_owned(),
            text_id: consts::TEXT_ID.to_owned(),
            theme_attribute: consts::THEME_ATTRIBUTE.to_owned(),
            dark_class: consts::DARK_CLASS.to_owned(),
            label_on_attribute: consts::LABEL_ON_ATTRIBUTE.to_owned(),
            label_off_attribute: consts::LABEL_OFF_ATTRIBUTE.to_owned(),
            default_label_on: consts::DEFAULT_LABEL_ON.to_owned(),
            default_label_off: consts::DEFAULT_LABEL_OFF.to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Parse a (possibly partial) JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, wrong field types,
    /// or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// IDs of the elements that must exist for the toggle to mount.
    #[must_use]
    pub fn required_ids(&self) -> [&str; 4] {
        [self.container_id.as_str(), self.button_id.as_str(), self.icon_id.as_str(), self.text_id.as_str()]
    }
}
