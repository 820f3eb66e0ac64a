//! Accessibility preferences and the key-value storage they persist to.
//!
//! # Design
//! - Values are plain strings so pages written without this crate read them too.
//! - Decoding happens once, here, with a fallback to defaults for anything unrecognised.

use std::cell::RefCell;
use std::collections::HashMap;

use super::font::FontSize;
use super::theme::ColorTheme;

/// Storage key for the colour theme.
pub const THEME_KEY: &str = "colorTheme";
/// Storage key for the root font size.
pub const FONT_SIZE_KEY: &str = "fontSize";

/// String key-value store with `localStorage` semantics.
pub trait PreferenceStore {
    /// Read a value, `None` when absent or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;
    /// Write a value, overwriting any previous one.
    fn set_item(&self, key: &str, value: &str);
}

/// In-memory store used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Decoded accessibility preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessibilityPrefs {
    /// Active colour theme.
    pub theme: ColorTheme,
    /// Root font size.
    pub font_size: FontSize,
}

impl AccessibilityPrefs {
    /// Load both preferences, defaulting each independently.
    #[must_use]
    pub fn load(store: &dyn PreferenceStore) -> Self {
        Self {
            theme: ColorTheme::from_stored(store.get_item(THEME_KEY).as_deref()),
            font_size: FontSize::from_stored(store.get_item(FONT_SIZE_KEY).as_deref()),
        }
    }

    /// Persist the theme.
    pub fn save_theme(store: &dyn PreferenceStore, theme: ColorTheme) {
        store.set_item(THEME_KEY, theme.as_str());
    }

    /// Persist the font size.
    pub fn save_font_size(store: &dyn PreferenceStore, size: FontSize) {
        store.set_item(FONT_SIZE_KEY, &size.to_stored());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::font::FontStep;
    use crate::core::theme::apply_theme;
    use std::collections::BTreeSet;

    #[test]
    fn empty_store_yields_defaults() {
        let store = MemoryStore::default();
        let prefs = AccessibilityPrefs::load(&store);
        assert_eq!(prefs.theme, ColorTheme::Default);
        assert_eq!(prefs.font_size.px(), 16);
    }

    #[test]
    fn malformed_entries_fall_back_uniformly() {
        let store = MemoryStore::default();
        store.set_item(THEME_KEY, "neon");
        store.set_item(FONT_SIZE_KEY, "big");
        assert_eq!(
            AccessibilityPrefs::load(&store),
            AccessibilityPrefs::default()
        );
    }

    #[test]
    fn reload_reproduces_applied_state() {
        let store = MemoryStore::default();
        let size = FontSize::default().step(FontStep::Increase);
        AccessibilityPrefs::save_theme(&store, ColorTheme::Protanopia);
        AccessibilityPrefs::save_font_size(&store, size);

        let first = AccessibilityPrefs::load(&store);
        let second = AccessibilityPrefs::load(&store);
        assert_eq!(first, second);
        assert_eq!(first.font_size, size);

        let mut before = BTreeSet::<String>::new();
        apply_theme(&mut before, first.theme);
        let mut after = BTreeSet::<String>::new();
        apply_theme(&mut after, second.theme);
        assert_eq!(before, after);
        assert!(after.contains("protanopia"));
    }

    #[test]
    fn values_are_stored_as_plain_strings() {
        let store = MemoryStore::default();
        AccessibilityPrefs::save_theme(&store, ColorTheme::Tritanopia);
        AccessibilityPrefs::save_font_size(&store, FontSize::clamped(19.0));
        assert_eq!(store.get_item(THEME_KEY).as_deref(), Some("tritanopia"));
        assert_eq!(store.get_item(FONT_SIZE_KEY).as_deref(), Some("19"));
    }
}
