//! Theme Control
//!
//! Light/dark mode mirrored onto the root `data-theme` attribute and
//! persisted under the `theme` key in localStorage.

use web_sys::{Element, HtmlElement};

use crate::config::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::dom::listen;
use crate::error::PageError;
use crate::storage::{KeyValueStore, LocalStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Only the exact strings "light" and "dark" are themes
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Current theme plus the store it is persisted to
pub struct ThemeState<S: KeyValueStore> {
    store: S,
    current: Theme,
}

impl<S: KeyValueStore> ThemeState<S> {
    /// Read the stored preference. Missing or unknown values fall back
    /// to dark without writing anything back.
    pub fn restore(store: S) -> Self {
        let current = store
            .get(THEME_STORAGE_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Re-sync with what the document currently shows
    pub fn adopt(&mut self, shown: Option<&str>) {
        self.current = shown.and_then(Theme::parse).unwrap_or_default();
    }

    /// Flip and persist; returns the new theme
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(THEME_STORAGE_KEY, self.current.as_str());
        self.current
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

pub fn apply_theme(root: &Element, theme: Theme) {
    let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
}

/// Restore the persisted theme onto `root` and wire the toggle button
pub fn bind(root: Element, toggle: &HtmlElement) -> Result<(), PageError> {
    let mut state = ThemeState::restore(LocalStore::open());
    apply_theme(&root, state.current());
    web_sys::console::log_1(&format!("[THEME] Restored {}", state.current().as_str()).into());

    listen(toggle, "click", move |_| {
        state.adopt(root.get_attribute(THEME_ATTRIBUTE).as_deref());
        let next = state.toggle();
        apply_theme(&root, next);
        web_sys::console::log_1(&format!("[THEME] Toggled {}", next.as_str()).into());
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_restore_defaults_to_dark() {
        for stored in [None, Some(""), Some("Light"), Some("blue"), Some(" dark")] {
            let store = match stored {
                Some(value) => MemoryStore::with(THEME_STORAGE_KEY, value),
                None => MemoryStore::default(),
            };
            let state = ThemeState::restore(store);
            assert_eq!(state.current(), Theme::Dark, "stored {:?}", stored);
        }
    }

    #[test]
    fn test_restore_does_not_write_default() {
        let state = ThemeState::restore(MemoryStore::default());
        assert_eq!(state.store().get(THEME_STORAGE_KEY), None);

        let state = ThemeState::restore(MemoryStore::with(THEME_STORAGE_KEY, "purple"));
        assert_eq!(state.store().get(THEME_STORAGE_KEY).as_deref(), Some("purple"));
    }

    #[test]
    fn test_restore_valid_values() {
        let state = ThemeState::restore(MemoryStore::with(THEME_STORAGE_KEY, "light"));
        assert_eq!(state.current(), Theme::Light);

        let state = ThemeState::restore(MemoryStore::with(THEME_STORAGE_KEY, "dark"));
        assert_eq!(state.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_round_trips_and_persists() {
        let mut state = ThemeState::restore(MemoryStore::with(THEME_STORAGE_KEY, "light"));

        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.store().get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_adopt_unknown_attribute_counts_as_dark() {
        let mut state = ThemeState::restore(MemoryStore::with(THEME_STORAGE_KEY, "light"));
        state.adopt(None);
        assert_eq!(state.toggle(), Theme::Light);

        state.adopt(Some("sepia"));
        assert_eq!(state.toggle(), Theme::Light);
    }
}
