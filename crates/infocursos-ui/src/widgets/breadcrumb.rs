//! Breadcrumb navigation rendering.

use web_sys::{Document, Element};

use crate::core::breadcrumb::{Crumb, CrumbPart, SEPARATOR, layout};
use crate::error::{UiError, UiResult};
use crate::i18n::TranslationBundle;
use crate::widgets::dom;

/// Build `nav.breadcrumb` for `items`.
///
/// # Errors
/// Returns [`UiError::Dom`] when a node cannot be created or appended.
pub fn create(
    document: &Document,
    items: &[Crumb],
    bundle: &TranslationBundle,
) -> UiResult<Element> {
    let nav = dom::create(document, "nav", "breadcrumb")?;
    nav.set_attribute("aria-label", &bundle.text("breadcrumb.label", "Breadcrumb"))
        .map_err(|err| UiError::dom("set_attribute", &err))?;

    for part in layout(items) {
        let node = match part {
            CrumbPart::Separator => {
                let span = dom::create(document, "span", "breadcrumb-separator")?;
                span.set_text_content(Some(SEPARATOR));
                span
            }
            CrumbPart::Link { text, url } => {
                let link = dom::create(document, "a", "")?;
                link.set_attribute("href", url)
                    .map_err(|err| UiError::dom("set_attribute", &err))?;
                link.set_text_content(Some(text));
                link
            }
            CrumbPart::Current { text } => {
                let span = dom::create(document, "span", "")?;
                span.set_text_content(Some(text));
                span.set_attribute("aria-current", "page")
                    .map_err(|err| UiError::dom("set_attribute", &err))?;
                span
            }
        };
        dom::append(&nav, &node)?;
    }
    Ok(nav)
}

/// Replace any breadcrumb under `target_selector` with a fresh one for
/// `items`, inserted as the target's first child. No-op without a target.
///
/// # Errors
/// Returns [`UiError::Dom`] when the breadcrumb cannot be built or inserted.
pub fn insert_breadcrumb(
    document: &Document,
    items: &[Crumb],
    target_selector: &str,
    bundle: &TranslationBundle,
) -> UiResult<()> {
    let Some(container) = dom::query(document, target_selector) else {
        return Ok(());
    };
    if let Some(existing) = dom::query(&container, ".breadcrumb") {
        existing.remove();
    }
    let nav = create(document, items, bundle)?;
    container
        .prepend_with_node_1(&nav)
        .map_err(|err| UiError::dom("prepend", &err))
}
