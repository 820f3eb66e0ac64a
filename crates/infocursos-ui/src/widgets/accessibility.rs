//! Theme selector and font-size buttons.

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomTokenList, Element, HtmlSelectElement};

use crate::core::font::{FontSize, FontStep};
use crate::core::prefs::{AccessibilityPrefs, PreferenceStore};
use crate::core::theme::{ClassSet, ColorTheme, apply_theme};
use crate::error::{UiError, UiResult};
use crate::widgets::dom;

const THEME_SELECTOR_ID: &str = "theme-selector";
const INCREASE_FONT_ID: &str = "increase-font";
const DECREASE_FONT_ID: &str = "decrease-font";
const RESET_FONT_ID: &str = "reset-font";

struct TokenList(DomTokenList);

impl ClassSet for TokenList {
    fn add_class(&mut self, class: &str) {
        if let Err(err) = self.0.add_1(class) {
            log_class_error(&UiError::dom("classList.add", &err));
        }
    }

    fn remove_class(&mut self, class: &str) {
        if let Err(err) = self.0.remove_1(class) {
            log_class_error(&UiError::dom("classList.remove", &err));
        }
    }
}

fn log_class_error(err: &UiError) {
    gloo::console::error!("theme class update failed", err.to_string());
}

/// Applies and persists the accessibility preferences.
pub(crate) struct AccessibilityController {
    document: Document,
    store: Rc<dyn PreferenceStore>,
}

impl AccessibilityController {
    pub(crate) fn new(document: Document, store: Rc<dyn PreferenceStore>) -> Self {
        Self { document, store }
    }

    /// Apply stored preferences and wire whichever controls exist.
    pub(crate) fn install(self) -> UiResult<()> {
        let controller = Rc::new(self);
        let prefs = AccessibilityPrefs::load(controller.store.as_ref());
        controller.set_theme(prefs.theme);
        controller.reflect_theme(prefs.theme);
        controller.apply_font_size(prefs.font_size)?;

        if let Some(selector) = controller.theme_selector() {
            let this = controller.clone();
            let target = selector.clone();
            EventListener::new(&selector, "change", move |_event| {
                let theme = ColorTheme::from_stored(Some(target.value().as_str()));
                this.set_theme(theme);
                this.reflect_theme(theme);
                AccessibilityPrefs::save_theme(this.store.as_ref(), theme);
            })
            .forget();
        }

        for (id, step) in [
            (INCREASE_FONT_ID, Some(FontStep::Increase)),
            (DECREASE_FONT_ID, Some(FontStep::Decrease)),
            (RESET_FONT_ID, None),
        ] {
            let Some(button) = controller.document.get_element_by_id(id) else {
                continue;
            };
            let this = controller.clone();
            EventListener::new(&button, "click", move |_event| {
                let size = step.map_or_else(FontSize::default, |step| {
                    this.current_font_size().step(step)
                });
                if let Err(err) = this.apply_font_size(size) {
                    gloo::console::error!("font size update failed", err.to_string());
                    return;
                }
                AccessibilityPrefs::save_font_size(this.store.as_ref(), size);
            })
            .forget();
        }
        Ok(())
    }

    fn theme_selector(&self) -> Option<HtmlSelectElement> {
        self.document
            .get_element_by_id(THEME_SELECTOR_ID)
            .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
    }

    fn set_theme(&self, theme: ColorTheme) {
        if let Some(body) = self.document.body() {
            apply_theme(&mut TokenList(body.class_list()), theme);
        }
    }

    fn reflect_theme(&self, theme: ColorTheme) {
        if let Some(selector) = self.theme_selector() {
            selector.set_value(theme.as_str());
        }
    }

    fn root(&self) -> UiResult<Element> {
        self.document
            .document_element()
            .ok_or(UiError::DocumentUnavailable)
    }

    fn current_font_size(&self) -> FontSize {
        let computed = self.root().ok().and_then(|root| {
            dom::window()
                .ok()?
                .get_computed_style(&root)
                .ok()
                .flatten()?
                .get_property_value("font-size")
                .ok()
        });
        computed.map_or_else(FontSize::default, |value| FontSize::from_computed(&value))
    }

    fn apply_font_size(&self, size: FontSize) -> UiResult<()> {
        dom::set_style(&self.root()?, "font-size", &size.css_value())
    }
}
