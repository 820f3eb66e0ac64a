//! Live search box plus category tags over a list of items.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::config::SearchConfig;
use crate::core::filter::{FADE_IN_ANIMATION, FilterState};
use crate::error::UiError;
use crate::widgets::dom;

const ACTIVE_CLASS: &str = "active";
const CATEGORY_ATTR: &str = "data-category";

/// Filters `items` by the search term and the active tag categories.
pub(crate) struct SearchFilter {
    input: Option<HtmlInputElement>,
    tags: Vec<Element>,
    items: Vec<Element>,
    state: RefCell<FilterState>,
}

impl SearchFilter {
    pub(crate) fn from_config(document: &Document, config: &SearchConfig) -> Self {
        Self {
            input: document
                .get_element_by_id(&config.input_id)
                .and_then(|element| element.dyn_into::<HtmlInputElement>().ok()),
            tags: dom::query_all(document, &format!(".{}", config.tag_class)),
            items: dom::query_all(document, &config.item_selector),
            state: RefCell::new(FilterState::default()),
        }
    }

    /// Attach listeners. Returns `false` when there is nothing to drive the filter.
    pub(crate) fn install(self) -> bool {
        if self.input.is_none() && self.tags.is_empty() {
            return false;
        }
        let filter = Rc::new(self);

        if let Some(input) = &filter.input {
            let this = filter.clone();
            EventListener::new(input, "input", move |_event| this.filter()).forget();
        }

        for tag in &filter.tags {
            let this = filter.clone();
            let target = tag.clone();
            EventListener::new(tag, "click", move |_event| {
                let classes = target.class_list();
                let toggled = target.get_attribute(CATEGORY_ATTR).map_or_else(
                    || classes.toggle(ACTIVE_CLASS),
                    |category| {
                        let active = this.state.borrow_mut().toggle_category(&category);
                        classes.toggle_with_force(ACTIVE_CLASS, active)
                    },
                );
                if let Err(err) = toggled {
                    log_filter_error(&UiError::dom("classList.toggle", &err));
                }
                this.filter();
            })
            .forget();
        }
        true
    }

    fn filter(&self) {
        {
            let mut state = self.state.borrow_mut();
            let term = self
                .input
                .as_ref()
                .map(HtmlInputElement::value)
                .unwrap_or_default();
            state.set_term(&term);
        }
        let state = self.state.borrow();
        for item in &self.items {
            let text = item.text_content().unwrap_or_default();
            let category = item.get_attribute(CATEGORY_ATTR);
            let result = if state.is_visible(&text, category.as_deref()) {
                dom::set_style(item, "display", "")
                    .and_then(|()| dom::set_style(item, "animation", FADE_IN_ANIMATION))
            } else {
                dom::set_style(item, "display", "none")
            };
            if let Err(err) = result {
                log_filter_error(&err);
            }
        }
    }
}

fn log_filter_error(err: &UiError) {
    gloo::console::error!("search filter update failed", err.to_string());
}

/// Wire the search filter described by `config`, if the page has one.
pub(crate) fn install(document: &Document, config: &SearchConfig) -> bool {
    SearchFilter::from_config(document, config).install()
}
