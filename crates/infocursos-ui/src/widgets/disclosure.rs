//! Expandable cards driven by one delegated click listener.

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::core::dispatch::{Capability, DispatchTable, disclosure_label};
use crate::error::UiResult;
use crate::i18n::TranslationBundle;

const CARD_SELECTOR: &str = ".card";
const EXPANDED_CLASS: &str = "expanded";

/// Flip `expanded` on the toggle's card and relabel the toggle.
fn toggle_card(toggle: &Element, bundle: &TranslationBundle) {
    let Ok(Some(card)) = toggle.closest(CARD_SELECTOR) else {
        return;
    };
    let Ok(expanded) = card.class_list().toggle(EXPANDED_CLASS) else {
        return;
    };
    toggle.set_text_content(Some(&disclosure_label(expanded, bundle)));
}

/// Register the card capabilities and attach the document listener.
pub(crate) fn install(document: &Document, bundle: Rc<TranslationBundle>) -> UiResult<()> {
    let mut table = DispatchTable::<Element>::default();
    table.register(Capability::ToggleCard, move |toggle| {
        toggle_card(toggle, &bundle);
    })?;

    EventListener::new(document, "click", move |event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        table.dispatch(&target, |element, capability| {
            element.matches(capability.selector()).unwrap_or(false)
        });
    })
    .forget();
    Ok(())
}
