//! Default names and glyphs for the page contract.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "vh-theme";

// ── Element IDs ─────────────────────────────────────────────────

/// Container whose class reflects the current theme.
pub const CONTAINER_ID: &str = "appBody";

/// The toggle button.
pub const BUTTON_ID: &str = "themeToggle";

/// Span holding the icon glyph.
pub const ICON_ID: &str = "themeIcon";

/// Span holding the label text.
pub const TEXT_ID: &str = "themeText";

// ── Styling hooks ───────────────────────────────────────────────

/// Attribute set on `<html>` (Bootstrap color modes).
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// Class toggled on the container for custom overrides.
pub const DARK_CLASS: &str = "theme-dark";

// ── Button UI ───────────────────────────────────────────────────

/// Button attribute with the label shown while dark mode is on.
pub const LABEL_ON_ATTRIBUTE: &str = "data-label-on";

/// Button attribute with the label shown while dark mode is off.
pub const LABEL_OFF_ATTRIBUTE: &str = "data-label-off";

pub const DEFAULT_LABEL_ON: &str = "Disable dark mode";
pub const DEFAULT_LABEL_OFF: &str = "Enable dark mode";

/// Icon shown in dark mode (clicking switches to light).
pub const ICON_SUN: &str = "\u{2600}\u{fe0f}";

/// Icon shown in light mode (clicking switches to dark).
pub const ICON_MOON: &str = "\u{1f319}";
