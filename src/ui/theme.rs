//! Theme context module for managing the light/dark theme
//!
//! Provides:
//! - ThemeMode enum (Light, Dark)
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence (read once at startup, written on every toggle)

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// localStorage key holding the persisted theme
pub const THEME_STORAGE_KEY: &str = "replydesk-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything but "dark" is light
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// Parse an optional persisted value; absence is light
    pub fn from_persisted(value: Option<&str>) -> Self {
        value.map(Self::from_str).unwrap_or_default()
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Current theme snapshot, tracked for the calling render
    pub fn current(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Flip between light and dark and persist the choice
    pub fn toggle(&self) {
        let next = self.mode.get_untracked().toggled();
        self.set_mode(next);
    }

    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        persist_theme(mode);
    }
}

/// Persist theme to localStorage
fn persist_theme(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

/// Load theme from localStorage
#[cfg(not(feature = "ssr"))]
fn load_persisted_theme() -> ThemeMode {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    ThemeMode::from_persisted(stored.as_deref())
}

/// Apply the dark class to the document element
#[cfg(not(feature = "ssr"))]
fn apply_theme_class(mode: ThemeMode) {
    if let Some(html) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let class_list = html.class_list();
        if mode.is_dark() {
            let _ = class_list.add_1("dark");
        } else {
            let _ = class_list.remove_1("dark");
        }
    }
}

/// Provide theme context to the application
///
/// The server always renders light. In the browser the persisted value is
/// read once after hydration, then every change is mirrored onto `<html>`.
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(ThemeMode::default());
    let ctx = ThemeContext { mode };

    #[cfg(not(feature = "ssr"))]
    {
        // Runs once: reads nothing reactive
        Effect::new(move |_| {
            mode.set(load_persisted_theme());
        });

        Effect::new(move |_| {
            apply_theme_class(mode.get());
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_theme_is_light() {
        assert_eq!(ThemeMode::from_persisted(None), ThemeMode::Light);
    }

    #[test]
    fn test_persisted_values() {
        assert_eq!(ThemeMode::from_persisted(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_persisted(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted(Some("auto")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted(Some("")), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_roundtrip() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_as_str_parses_back() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_str(mode.as_str()), mode);
        }
    }
}
