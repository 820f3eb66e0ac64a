//! Lightweight JSON-backed translations with per-locale bundles.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Portuguese (site default).
    Pt,
    /// English.
    En,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 2] {
        [Self::Pt, Self::En]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// Map an arbitrary language tag (e.g. `pt-BR`) to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split('-').next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default locale for the site.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Pt;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys degrade to English, then to the caller's default.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let raw = raw_locale(locale);
        let tree: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Pt => include_str!("../../i18n/pt.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Pt);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn lang_tags_map_to_base_locale() {
        assert_eq!(LocaleCode::from_lang_tag("pt-BR"), Some(LocaleCode::Pt));
        assert_eq!(LocaleCode::from_lang_tag("EN"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr"), None);
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale, locale);
            assert!(!bundle.text("form.required", "").is_empty());
            assert!(!bundle.text("pages.contatos", "").is_empty());
        }
    }

    #[test]
    fn portuguese_messages_match_the_site_copy() {
        let bundle = TranslationBundle::new(LocaleCode::Pt);
        assert_eq!(bundle.text("form.required", ""), "Este campo é obrigatório");
        assert_eq!(
            bundle.text("form.password_short", ""),
            "A senha deve ter no mínimo 6 caracteres"
        );
    }
}
