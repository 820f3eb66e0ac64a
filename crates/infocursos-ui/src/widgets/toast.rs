//! Toast notifications.
//!
//! One container per page, created on first use. Every toast carries a close
//! button and optionally an auto-dismiss timer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::config::Timings;
use crate::core::toast::{
    TOAST_EXIT_ANIMATION, ToastId, ToastKind, ToastRegistry, ToastTimeline,
};
use crate::error::{UiError, UiResult};
use crate::i18n::TranslationBundle;
use crate::widgets::dom;

const CONTAINER_SELECTOR: &str = ".toast-container";

struct LiveToast {
    element: Element,
    exit_ms: u32,
    _close: EventListener,
}

struct ToastInner {
    document: Document,
    bundle: Rc<TranslationBundle>,
    timings: Timings,
    container: RefCell<Option<Element>>,
    live: RefCell<ToastRegistry<LiveToast>>,
}

/// Shared toast dispatcher. Cloning shares the same container and toasts.
#[derive(Clone)]
pub struct ToastService {
    inner: Rc<ToastInner>,
}

impl ToastService {
    pub(crate) fn new(document: Document, bundle: Rc<TranslationBundle>, timings: Timings) -> Self {
        Self {
            inner: Rc::new(ToastInner {
                document,
                bundle,
                timings,
                container: RefCell::new(None),
                live: RefCell::new(ToastRegistry::default()),
            }),
        }
    }

    /// Show a toast with the configured default duration.
    ///
    /// # Errors
    /// See [`ToastService::show`].
    pub fn notify(&self, message: &str, kind: ToastKind) -> UiResult<ToastId> {
        self.show(message, kind, self.inner.timings.toast_ms)
    }

    /// Show `message`; `duration_ms <= 0` keeps it until closed.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] when the toast nodes cannot be built.
    pub fn show(&self, message: &str, kind: ToastKind, duration_ms: i32) -> UiResult<ToastId> {
        let inner = &self.inner;
        let container = self.container()?;
        let toast = dom::create(&inner.document, "div", &format!("toast {}", kind.class()))?;

        let icon = dom::create(&inner.document, "span", "")?;
        icon.set_text_content(Some(kind.glyph()));
        dom::set_style(&icon, "font-size", "1.5rem")?;
        dom::set_style(&icon, "color", kind.color())?;

        let text = dom::create(&inner.document, "span", "")?;
        text.set_text_content(Some(message));

        let close = dom::create(&inner.document, "button", "toast-close")?;
        close.set_text_content(Some("×"));
        close
            .set_attribute("aria-label", &inner.bundle.text("toast.dismiss", "Dismiss"))
            .map_err(|err| UiError::dom("set_attribute", &err))?;

        dom::append(&toast, &icon)?;
        dom::append(&toast, &text)?;
        dom::append(&toast, &close)?;
        dom::append(&container, &toast)?;

        let timeline = ToastTimeline::new(duration_ms, inner.timings.toast_exit_ms);
        let id = inner.live.borrow_mut().insert_with(|id| {
            let weak = Rc::downgrade(inner);
            LiveToast {
                element: toast,
                exit_ms: timeline.exit_ms,
                _close: EventListener::new(&close, "click", move |_event| dismiss(&weak, id)),
            }
        });

        if let Some(delay) = timeline.dismiss_at {
            let weak = Rc::downgrade(inner);
            Timeout::new(delay, move || dismiss(&weak, id)).forget();
        }
        Ok(id)
    }

    /// Start the exit animation for `id`. Unknown or already removed ids are ignored.
    pub fn remove(&self, id: ToastId) {
        dismiss(&Rc::downgrade(&self.inner), id);
    }

    fn container(&self) -> UiResult<Element> {
        let inner = &self.inner;
        if let Some(existing) = inner.container.borrow().as_ref() {
            return Ok(existing.clone());
        }
        let container = match dom::query(&inner.document, CONTAINER_SELECTOR) {
            Some(found) => found,
            None => {
                let created = dom::create(&inner.document, "div", "toast-container")?;
                let body = inner.document.body().ok_or(UiError::DocumentUnavailable)?;
                dom::append(&body, &created)?;
                created
            }
        };
        *inner.container.borrow_mut() = Some(container.clone());
        Ok(container)
    }
}

fn dismiss(inner: &Weak<ToastInner>, id: ToastId) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let Some(toast) = inner.live.borrow_mut().take(id) else {
        return;
    };
    if let Err(err) = dom::set_style(&toast.element, "animation", TOAST_EXIT_ANIMATION) {
        gloo::console::warn!("toast exit animation failed", err.to_string());
    }
    Timeout::new(toast.exit_ms, move || {
        toast.element.remove();
    })
    .forget();
}
