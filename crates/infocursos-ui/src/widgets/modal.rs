//! Modal dialog on a single shared overlay.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node};

use crate::error::{UiError, UiResult};
use crate::i18n::TranslationBundle;
use crate::widgets::dom;

const OVERLAY_SELECTOR: &str = ".modal-overlay";
const ACTIVE_CLASS: &str = "active";

/// Body of a dialog.
pub enum ModalContent {
    /// Markup inserted through `innerHTML`.
    Markup(String),
    /// Node appended as-is.
    Node(Node),
}

/// Action run by a footer button.
pub type ButtonAction = Rc<dyn Fn(&ModalService)>;

/// Footer button description. Without an action the button closes the dialog.
pub struct ModalButton {
    /// Label.
    pub text: String,
    /// Class attribute.
    pub class_name: Option<String>,
    /// Click handler.
    pub on_click: Option<ButtonAction>,
}

struct ModalInner {
    document: Document,
    bundle: Rc<TranslationBundle>,
    overlay: Element,
    listeners: RefCell<Vec<EventListener>>,
}

/// Shared modal controller. Cloning shares the same overlay.
#[derive(Clone)]
pub struct ModalService {
    inner: Rc<ModalInner>,
}

impl ModalService {
    /// Reuse or create the overlay and attach the dismiss listeners.
    pub(crate) fn new(document: Document, bundle: Rc<TranslationBundle>) -> UiResult<Self> {
        let overlay = match dom::query(&document, OVERLAY_SELECTOR) {
            Some(existing) => existing,
            None => {
                let created = dom::create(&document, "div", "modal-overlay")?;
                let body = document.body().ok_or(UiError::DocumentUnavailable)?;
                dom::append(&body, &created)?;
                created
            }
        };
        let service = Self {
            inner: Rc::new(ModalInner {
                document,
                bundle,
                overlay,
                listeners: RefCell::new(Vec::new()),
            }),
        };
        service.attach_dismiss_listeners();
        Ok(service)
    }

    fn attach_dismiss_listeners(&self) {
        let overlay = self.inner.overlay.clone();
        let weak = Rc::downgrade(&self.inner);
        EventListener::new(&overlay, "click", move |event| {
            let on_background = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .is_some_and(|target| target == overlay);
            if on_background {
                with_service(&weak, Self::close);
            }
        })
        .forget();

        let weak = Rc::downgrade(&self.inner);
        EventListener::new(&self.inner.document, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            with_service(&weak, |service| {
                if key == "Escape" && service.is_open() {
                    service.close();
                }
            });
        })
        .forget();
    }

    /// Replace the dialog contents and show the overlay.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] when the dialog nodes cannot be built.
    pub fn open(
        &self,
        title: &str,
        content: ModalContent,
        buttons: Vec<ModalButton>,
    ) -> UiResult<()> {
        let document = &self.inner.document;
        let mut listeners = Vec::new();

        let modal = dom::create(document, "div", "modal")?;
        modal
            .set_attribute("tabindex", "-1")
            .map_err(|err| UiError::dom("set_attribute", &err))?;

        let header = dom::create(document, "div", "modal-header")?;
        let heading = dom::create(document, "h2", "")?;
        heading.set_text_content(Some(title));
        let close = dom::create(document, "button", "modal-close")?;
        close.set_text_content(Some("×"));
        close
            .set_attribute("aria-label", &self.inner.bundle.text("modal.close", "Close"))
            .map_err(|err| UiError::dom("set_attribute", &err))?;
        let weak = Rc::downgrade(&self.inner);
        listeners.push(EventListener::new(&close, "click", move |_event| {
            with_service(&weak, Self::close);
        }));
        dom::append(&header, &heading)?;
        dom::append(&header, &close)?;

        let body = dom::create(document, "div", "modal-body")?;
        match content {
            ModalContent::Markup(markup) => body.set_inner_html(&markup),
            ModalContent::Node(node) => {
                body.append_child(&node)
                    .map_err(|err| UiError::dom("append_child", &err))?;
            }
        }

        dom::append(&modal, &header)?;
        dom::append(&modal, &body)?;

        if !buttons.is_empty() {
            let footer = dom::create(document, "div", "modal-footer")?;
            for entry in buttons {
                let class = entry.class_name.as_deref().unwrap_or("");
                let button = dom::create(document, "button", class)?;
                button.set_text_content(Some(&entry.text));
                let weak = Rc::downgrade(&self.inner);
                let action = entry.on_click;
                listeners.push(EventListener::new(&button, "click", move |_event| {
                    with_service(&weak, |service| match &action {
                        Some(action) => action(service),
                        None => service.close(),
                    });
                }));
                dom::append(&footer, &button)?;
            }
            dom::append(&modal, &footer)?;
        }

        let overlay = &self.inner.overlay;
        overlay.set_inner_html("");
        dom::append(overlay, &modal)?;
        dom::add_class(overlay, ACTIVE_CLASS)?;
        *self.inner.listeners.borrow_mut() = listeners;

        if let Some(focusable) = modal.dyn_ref::<HtmlElement>()
            && let Err(err) = focusable.focus()
        {
            gloo::console::error!("modal focus failed", UiError::dom("focus", &err).to_string());
        }
        Ok(())
    }

    /// Hide the overlay. Contents stay until the next [`ModalService::open`].
    pub fn close(&self) {
        if let Err(err) = dom::remove_classes(&self.inner.overlay, &[ACTIVE_CLASS]) {
            gloo::console::error!("modal close failed", err.to_string());
        }
    }

    /// Whether the overlay is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.overlay.class_list().contains(ACTIVE_CLASS)
    }
}

fn with_service(inner: &Weak<ModalInner>, f: impl FnOnce(&ModalService)) {
    if let Some(inner) = inner.upgrade() {
        f(&ModalService { inner });
    }
}
