//! Light/dark theme persisted across visits.
//!
//! The theme is reflected as a `data-theme="dark"` attribute on `<html>` and
//! as the glyph on the toggle button. The stored flag and the attribute agree
//! after every load and toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KeyValueStore;

/// Attribute on the root element that carries the theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Toggle glyph while light is active (dark mode available).
pub const MOON_ICON: &str = "🌙";
/// Toggle glyph while dark is active (light mode available).
pub const SUN_ICON: &str = "☀️";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored or attribute value. Only `"dark"` selects dark;
    /// absent or any other value is light.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph the toggle button shows while this theme is active.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON,
            Self::Dark => SUN_ICON,
        }
    }

    /// Value written to [`THEME_ATTRIBUTE`]; `None` removes the attribute.
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }
}

/// Page surface the theme controller writes to.
pub trait ThemeHost {
    fn theme_attribute(&self) -> Option<String>;
    fn set_theme_attribute(&self, value: Option<&str>);
    /// Returns `false` when the page has no toggle button.
    fn set_toggle_icon(&self, icon: &str) -> bool;
}

/// Theme currently shown by the page.
pub fn current_theme(host: &impl ThemeHost) -> Theme {
    Theme::parse(host.theme_attribute().as_deref())
}

/// Reflect the stored preference onto the page. Run once at load.
///
/// Light leaves the attribute and icon untouched.
pub fn apply_persisted_theme(store: &impl KeyValueStore, host: &impl ThemeHost, key: &str) -> Theme {
    let theme = Theme::parse(store.get(key).as_deref());
    if theme.is_dark() {
        host.set_theme_attribute(theme.attribute_value());
        host.set_toggle_icon(theme.toggle_icon());
    }
    theme
}

/// Flip the page theme and persist the result.
pub fn toggle_theme(store: &impl KeyValueStore, host: &impl ThemeHost, key: &str) -> Theme {
    let next = current_theme(host).toggled();
    host.set_theme_attribute(next.attribute_value());
    store.set(key, next.as_str());
    if !host.set_toggle_icon(next.toggle_icon()) {
        log::debug!("theme toggled to {} without a toggle button", next.as_str());
    }
    next
}
