//! Deferred image loading through `IntersectionObserver`.

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::error::{UiError, UiResult};
use crate::widgets::dom;

const DEFERRED_ATTR: &str = "data-src";
const DEFERRED_SELECTOR: &str = "img[data-src]";
const LOADED_CLASS: &str = "loaded";

/// Move `data-src` into `src` and mark the image loaded.
fn load_image(image: &Element) {
    let Some(src) = image.get_attribute(DEFERRED_ATTR).filter(|src| !src.is_empty()) else {
        return;
    };
    if let Err(err) = image
        .set_attribute("src", &src)
        .map_err(|err| UiError::dom("set_attribute", &err))
        .and_then(|()| {
            image
                .remove_attribute(DEFERRED_ATTR)
                .map_err(|err| UiError::dom("remove_attribute", &err))
        })
        .and_then(|()| dom::add_class(image, LOADED_CLASS))
    {
        gloo::console::error!("lazy image load failed", err.to_string());
    }
}

fn observer_supported() -> bool {
    dom::window()
        .ok()
        .and_then(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

/// Observe every deferred image, or load them all at once when the browser
/// lacks `IntersectionObserver`. Returns how many images were found.
pub(crate) fn install(document: &Document, root_margin: &str) -> UiResult<usize> {
    let images = dom::query_all(document, DEFERRED_SELECTOR);
    if images.is_empty() {
        return Ok(0);
    }
    if !observer_supported() {
        images.iter().for_each(load_image);
        return Ok(images.len());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    load_image(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| UiError::dom("IntersectionObserver::new", &err))?;
    for image in &images {
        observer.observe(image);
    }
    // Page-lifetime observer.
    callback.forget();
    Ok(images.len())
}
