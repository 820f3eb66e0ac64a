//! Thin `web-sys` helpers shared by the widgets.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::{UiError, UiResult};

pub(crate) fn window() -> UiResult<Window> {
    web_sys::window().ok_or(UiError::WindowUnavailable)
}

pub(crate) fn document() -> UiResult<Document> {
    window()?.document().ok_or(UiError::DocumentUnavailable)
}

/// Create `<tag class="...">`.
pub(crate) fn create(document: &Document, tag: &str, class: &str) -> UiResult<Element> {
    let element = document
        .create_element(tag)
        .map_err(|err| UiError::dom("create_element", &err))?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Nodes that support `querySelector`.
pub(crate) trait QueryRoot {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl QueryRoot for Document {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for Element {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// First match under `root`; invalid selectors count as "no match".
pub(crate) fn query(root: &impl QueryRoot, selector: &str) -> Option<Element> {
    root.select(selector).ok().flatten()
}

/// Every element matching `selector` under `root`.
pub(crate) fn query_all(root: &impl QueryRoot, selector: &str) -> Vec<Element> {
    let Ok(list) = root.select_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn append(parent: &Element, child: &Element) -> UiResult<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|err| UiError::dom("append_child", &err))
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) -> UiResult<()> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    html.style()
        .set_property(property, value)
        .map_err(|err| UiError::dom("style.set_property", &err))
}

pub(crate) fn add_class(element: &Element, class: &str) -> UiResult<()> {
    element
        .class_list()
        .add_1(class)
        .map_err(|err| UiError::dom("classList.add", &err))
}

pub(crate) fn remove_classes(element: &Element, classes: &[&str]) -> UiResult<()> {
    let list = element.class_list();
    for class in classes {
        list.remove_1(class)
            .map_err(|err| UiError::dom("classList.remove", &err))?;
    }
    Ok(())
}
