//! Persistence and environment helpers for the page bootstrap.

use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::core::prefs::PreferenceStore;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use web_sys::Document;

/// `localStorage` as a [`PreferenceStore`].
///
/// Goes through the raw `Storage` handle so values stay plain strings rather
/// than JSON-encoded ones.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            log_storage_error("set", key, &format!("{err:?}"));
        }
    }
}

pub(crate) fn load_config(document: &Document) -> UiConfig {
    let Some(island) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return UiConfig::default();
    };
    let raw = island.text_content().unwrap_or_default();
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("ignoring page configuration", err.to_string());
            UiConfig::default()
        }
    }
}

pub(crate) fn load_locale(document: &Document, config: &UiConfig) -> LocaleCode {
    if let Some(locale) = config.locale {
        return locale;
    }
    document
        .document_element()
        .and_then(|html| html.get_attribute("lang"))
        .and_then(|lang| LocaleCode::from_lang_tag(&lang))
        .unwrap_or(DEFAULT_LOCALE)
}

pub(crate) fn page_path(document: &Document) -> String {
    document
        .location()
        .and_then(|location| location.pathname().ok())
        .unwrap_or_default()
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
