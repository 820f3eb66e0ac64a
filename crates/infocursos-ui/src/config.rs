//! Page configuration read from an optional JSON island.
//!
//! Pages may embed `<script type="application/json" id="infocursos-config">`
//! to move selectors or timings; every field has a default matching the
//! stock site markup.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::core::breadcrumb::Crumb;
use crate::core::toast::{DEFAULT_TOAST_MS, TOAST_EXIT_MS};
use crate::error::UiResult;
use crate::i18n::LocaleCode;

/// Element id of the configuration island.
pub const CONFIG_ELEMENT_ID: &str = "infocursos-config";

/// Search/filter wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Id of the search `<input>`.
    pub input_id: String,
    /// Class carried by filter tags (without the leading dot).
    pub tag_class: String,
    /// Selector for filterable items.
    pub item_selector: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            input_id: "search-input".to_string(),
            tag_class: "filter-tag".to_string(),
            item_selector: ".card[data-category]".to_string(),
        }
    }
}

/// Timer lengths in milliseconds.
#[allow(clippy::struct_field_names)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timings {
    /// Default toast lifetime; `<= 0` keeps toasts until closed.
    pub toast_ms: i32,
    /// Exit animation length before a toast node is removed.
    pub toast_exit_ms: u32,
    /// Delay between a successful submit and the form reset.
    pub form_reset_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toast_ms: DEFAULT_TOAST_MS,
            toast_exit_ms: TOAST_EXIT_MS,
            form_reset_ms: 1000,
        }
    }
}

/// Top-level UI configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Forced locale; otherwise taken from `<html lang>`.
    pub locale: Option<LocaleCode>,
    /// Element that receives the breadcrumb.
    pub breadcrumb_target: String,
    /// Container emptied and filled by the skeleton loader.
    pub skeleton_container: String,
    /// Placeholder count when none is given.
    pub skeleton_count: u32,
    /// Form wired to the validator.
    pub form_selector: String,
    /// Search/filter wiring.
    pub search: SearchConfig,
    /// Timer lengths.
    pub timings: Timings,
    /// Preload margin for lazy images, in pixels.
    pub lazy_root_margin_px: u32,
    /// Extra or replacement breadcrumb trails keyed by page name.
    pub breadcrumbs: BTreeMap<String, Vec<Crumb>>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: None,
            breadcrumb_target: ".container".to_string(),
            skeleton_container: ".card-grid".to_string(),
            skeleton_count: 3,
            form_selector: "form".to_string(),
            search: SearchConfig::default(),
            timings: Timings::default(),
            lazy_root_margin_px: 50,
            breadcrumbs: BTreeMap::new(),
        }
    }
}

impl UiConfig {
    /// Parse a configuration document; blank input yields defaults.
    ///
    /// # Errors
    /// Returns [`crate::error::UiError::Config`] for malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> UiResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// `rootMargin` string for the intersection observer.
    #[must_use]
    pub fn lazy_root_margin(&self) -> String {
        format!("{}px", self.lazy_root_margin_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;

    #[test]
    fn blank_document_uses_defaults() {
        let config = UiConfig::from_json("  ").expect("defaults");
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.timings.toast_ms, 3000);
        assert_eq!(config.timings.form_reset_ms, 1000);
        assert_eq!(config.lazy_root_margin(), "50px");
    }

    #[test]
    fn partial_documents_keep_remaining_defaults() {
        let config = UiConfig::from_json(
            r#"{
                "locale": "en",
                "timings": { "toast_ms": 0 },
                "breadcrumbs": {
                    "sobre": [
                        { "text": "Início", "url": "index.html" },
                        { "text": "Sobre" }
                    ]
                }
            }"#,
        )
        .expect("valid config");
        assert_eq!(config.locale, Some(LocaleCode::En));
        assert_eq!(config.timings.toast_ms, 0);
        assert_eq!(config.timings.toast_exit_ms, 300);
        assert_eq!(config.breadcrumb_target, ".container");
        assert_eq!(config.breadcrumbs["sobre"][1], Crumb::current("Sobre"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = UiConfig::from_json(r#"{ "colour": "red" }"#).expect_err("unknown field");
        assert!(matches!(err, UiError::Config { .. }));
    }
}
