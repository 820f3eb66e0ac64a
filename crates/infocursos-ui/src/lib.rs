#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Course portal page behaviour compiled to WebAssembly.
//!
//! The DOM-free rules (theme and font preferences, validation, filtering,
//! breadcrumb trails, toast timing) live in [`core`] and are tested natively.
//! The browser glue in `widgets` and `app` only builds for `wasm32`.

pub mod config;
pub mod core;
pub mod error;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod widgets;

#[cfg(target_arch = "wasm32")]
pub use app::{Page, PageContext, mount, run_app, start};

#[cfg(test)]
mod tests {
    use crate::config::UiConfig;
    use crate::core::prefs::{AccessibilityPrefs, MemoryStore, PreferenceStore};
    use crate::core::theme::ColorTheme;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn default_config_resolves_to_portuguese_copy() {
        let config = UiConfig::default();
        let bundle = TranslationBundle::new(config.locale.unwrap_or(LocaleCode::Pt));
        assert_eq!(bundle.text("breadcrumb.home", ""), "Início");
    }

    #[test]
    fn fresh_store_yields_default_preferences() {
        let store = MemoryStore::default();
        let prefs = AccessibilityPrefs::load(&store);
        assert_eq!(prefs.theme, ColorTheme::Default);
        assert_eq!(prefs.font_size.px(), 16);
        assert!(store.get_item("colorTheme").is_none());
    }
}
