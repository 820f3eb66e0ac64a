//! Breadcrumb trails: layout and the per-page trail map.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::i18n::TranslationBundle;

/// Glyph rendered between consecutive crumbs.
pub const SEPARATOR: &str = "›";

/// One breadcrumb entry. A crumb without a URL is the current page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Crumb {
    /// Visible label.
    pub text: String,
    /// Link target; `None` marks the current page.
    #[serde(default)]
    pub url: Option<String>,
}

impl Crumb {
    /// Crumb linking to `url`.
    #[must_use]
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
        }
    }

    /// Crumb for the current page.
    #[must_use]
    pub fn current(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
        }
    }
}

/// Rendered node kinds, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrumbPart<'a> {
    /// Anchor to another page.
    Link {
        /// Label.
        text: &'a str,
        /// Target.
        url: &'a str,
    },
    /// Current-page marker.
    Current {
        /// Label.
        text: &'a str,
    },
    /// Separator between two crumbs.
    Separator,
}

/// Lay out `items` with a separator between each consecutive pair.
#[must_use]
pub fn layout(items: &[Crumb]) -> Vec<CrumbPart<'_>> {
    let mut parts = Vec::with_capacity(items.len().saturating_mul(2));
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            parts.push(CrumbPart::Separator);
        }
        parts.push(
            item.url
                .as_deref()
                .map_or(CrumbPart::Current { text: &item.text }, |url| {
                    CrumbPart::Link {
                        text: &item.text,
                        url,
                    }
                }),
        );
    }
    parts
}

/// Page name for a URL path: last segment without extension, `index` when empty.
#[must_use]
pub fn page_name(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or_default();
    let stem = segment
        .rfind('.')
        .filter(|&dot| dot > 0)
        .map_or(segment, |dot| &segment[..dot]);
    if stem.is_empty() {
        "index".to_string()
    } else {
        stem.to_string()
    }
}

const SECTION_PAGES: [&str; 6] = [
    "cursos",
    "login",
    "cadastro",
    "noticias",
    "novidades",
    "contatos",
];

/// Built-in trails for the site's known pages, labelled from `bundle`.
#[must_use]
pub fn default_trails(bundle: &TranslationBundle) -> BTreeMap<String, Vec<Crumb>> {
    let home = bundle.text("breadcrumb.home", "Início");
    let mut trails = BTreeMap::new();
    trails.insert("index".to_string(), vec![Crumb::current(home.clone())]);
    for page in SECTION_PAGES {
        let label = bundle.text(&format!("pages.{page}"), page);
        trails.insert(
            page.to_string(),
            vec![Crumb::link(home.clone(), "index.html"), Crumb::current(label)],
        );
    }
    trails
}

/// Trail for `path`, with configured trails taking precedence over built-ins.
#[must_use]
pub fn trail_for_path(
    path: &str,
    bundle: &TranslationBundle,
    overrides: &BTreeMap<String, Vec<Crumb>>,
) -> Option<Vec<Crumb>> {
    let page = page_name(path);
    overrides
        .get(&page)
        .cloned()
        .or_else(|| default_trails(bundle).remove(&page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    #[test]
    fn layout_interleaves_separators() {
        for n in 0..6usize {
            let items: Vec<Crumb> = (0..n).map(|i| Crumb::current(format!("c{i}"))).collect();
            let parts = layout(&items);
            let separators = parts
                .iter()
                .filter(|part| matches!(part, CrumbPart::Separator))
                .count();
            assert_eq!(separators, n.saturating_sub(1));
            assert_eq!(parts.len(), n + n.saturating_sub(1));
        }
    }

    #[test]
    fn links_and_current_page_render_differently() {
        let items = vec![Crumb::link("Início", "index.html"), Crumb::current("Cursos")];
        assert_eq!(
            layout(&items),
            vec![
                CrumbPart::Link {
                    text: "Início",
                    url: "index.html"
                },
                CrumbPart::Separator,
                CrumbPart::Current { text: "Cursos" },
            ]
        );
    }

    #[test]
    fn page_names_strip_directories_and_extensions() {
        assert_eq!(page_name("/site/cursos.html"), "cursos");
        assert_eq!(page_name("/login.htm"), "login");
        assert_eq!(page_name("/"), "index");
        assert_eq!(page_name(""), "index");
        assert_eq!(page_name("/noticias"), "noticias");
    }

    #[test]
    fn seven_known_pages_have_trails() {
        let bundle = TranslationBundle::new(LocaleCode::Pt);
        let trails = default_trails(&bundle);
        assert_eq!(trails.len(), 7);
        assert_eq!(trails["index"], vec![Crumb::current("Início")]);
        assert_eq!(
            trails["cursos"],
            vec![Crumb::link("Início", "index.html"), Crumb::current("Cursos")]
        );
    }

    #[test]
    fn unknown_pages_get_no_trail_unless_configured() {
        let bundle = TranslationBundle::new(LocaleCode::Pt);
        let mut overrides = BTreeMap::new();
        assert_eq!(trail_for_path("/sobre.html", &bundle, &overrides), None);

        overrides.insert("sobre".to_string(), vec![Crumb::current("Sobre")]);
        assert_eq!(
            trail_for_path("/sobre.html", &bundle, &overrides),
            Some(vec![Crumb::current("Sobre")])
        );
    }
}
