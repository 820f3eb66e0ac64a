//! Page bootstrap: builds the shared services and installs every widget.

use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::UiConfig;
use crate::core::breadcrumb::{Crumb, trail_for_path};
use crate::core::install::InstallSlot;
use crate::core::prefs::PreferenceStore;
use crate::core::toast::{ToastId, ToastKind};
use crate::error::UiResult;
use crate::i18n::TranslationBundle;
use crate::widgets::modal::{ModalButton, ModalContent, ModalService};
use crate::widgets::skeleton::SkeletonLoader;
use crate::widgets::toast::ToastService;
use crate::widgets::{
    accessibility, breadcrumb, disclosure, dom, form, lazy_image, search_filter,
};
use preferences::{BrowserStore, load_config, load_locale, page_path};

mod preferences;

thread_local! {
    static PAGE: InstallSlot<PageContext> = const { InstallSlot::new() };
}

/// Services shared by the widgets of one page load.
#[derive(Clone)]
pub struct PageContext {
    /// Host document.
    pub document: Document,
    /// Active translations.
    pub bundle: Rc<TranslationBundle>,
    /// Effective configuration.
    pub config: Rc<UiConfig>,
    /// Shared toast dispatcher.
    pub toasts: ToastService,
    /// Shared modal controller.
    pub modal: ModalService,
    /// Skeleton placeholders.
    pub skeleton: SkeletonLoader,
}

impl PageContext {
    fn build(document: Document) -> UiResult<Self> {
        let config = Rc::new(load_config(&document));
        let bundle = Rc::new(TranslationBundle::new(load_locale(&document, &config)));
        let toasts = ToastService::new(document.clone(), bundle.clone(), config.timings);
        let modal = ModalService::new(document.clone(), bundle.clone())?;
        let skeleton = SkeletonLoader::new(
            document.clone(),
            config.skeleton_container.clone(),
            config.skeleton_count,
        );
        Ok(Self {
            document,
            bundle,
            config,
            toasts,
            modal,
            skeleton,
        })
    }

    /// Insert `items` as the breadcrumb of the configured target.
    ///
    /// # Errors
    /// Returns [`crate::error::UiError::Dom`] when the breadcrumb cannot be inserted.
    pub fn insert_breadcrumb(&self, items: &[Crumb]) -> UiResult<()> {
        breadcrumb::insert_breadcrumb(
            &self.document,
            items,
            &self.config.breadcrumb_target,
            &self.bundle,
        )
    }

    fn install_widgets(&self) {
        let store: Rc<dyn PreferenceStore> = Rc::new(BrowserStore);
        report(
            "accessibility",
            accessibility::AccessibilityController::new(self.document.clone(), store).install(),
        );
        report(
            "disclosure",
            disclosure::install(&self.document, self.bundle.clone()),
        );
        match lazy_image::install(&self.document, &self.config.lazy_root_margin()) {
            Ok(count) => console::debug!("lazy images registered", count),
            Err(err) => report::<()>("lazy images", Err(err)),
        }
        if let Some(validator) = form::FormValidator::find(
            &self.document,
            &self.config.form_selector,
            self.bundle.clone(),
            self.toasts.clone(),
            self.config.timings.form_reset_ms,
        ) {
            report("form validation", validator.install());
        }
        if search_filter::install(&self.document, &self.config.search) {
            console::debug!("search filter installed");
        }
        let path = page_path(&self.document);
        if let Some(trail) = trail_for_path(&path, &self.bundle, &self.config.breadcrumbs) {
            report("breadcrumb", self.insert_breadcrumb(&trail));
        }
    }
}

fn report<T>(widget: &'static str, result: UiResult<T>) {
    if let Err(err) = result {
        console::error!("widget install failed", widget, err.to_string());
    }
}

/// Build the page services and install every widget, once per page.
///
/// Later calls return the context built by the first successful one.
///
/// # Errors
/// Fails only when there is no document or the modal overlay cannot be created.
pub fn run_app() -> UiResult<PageContext> {
    PAGE.with(|slot| {
        slot.get_or_install(|| -> UiResult<PageContext> {
            console_error_panic_hook::set_once();
            let context = PageContext::build(dom::document()?)?;
            context.install_widgets();
            console::debug!("page widgets installed");
            Ok(context)
        })
        .cloned()
    })
}

/// Entrypoint invoked by Trunk: waits for `DOMContentLoaded` when the document is still parsing.
pub fn start() {
    let Ok(document) = dom::document() else {
        console::error!("no document; widgets disabled");
        return;
    };
    let boot = || {
        if let Err(err) = run_app() {
            console::error!("page bootstrap failed", err.to_string());
        }
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_event| boot()).forget();
    } else {
        boot();
    }
}

/// Handle exposed to page scripts for ad-hoc toasts, dialogs and placeholders.
#[wasm_bindgen]
pub struct Page {
    context: PageContext,
}

/// Handle over the page services, installing the widgets first if
/// [`start`] has not done so yet.
///
/// # Errors
/// Propagates [`run_app`] failures as JS errors.
#[wasm_bindgen]
pub fn mount() -> Result<Page, JsValue> {
    Ok(Page {
        context: run_app()?,
    })
}

#[wasm_bindgen]
impl Page {
    /// Show a toast; `kind` defaults to success and the duration to the configured lifetime.
    #[allow(clippy::cast_precision_loss)]
    pub fn toast(
        &self,
        message: &str,
        kind: Option<String>,
        duration_ms: Option<i32>,
    ) -> Result<f64, JsValue> {
        let kind = kind.as_deref().map_or(ToastKind::Success, ToastKind::from_name);
        let duration = duration_ms.unwrap_or(self.context.config.timings.toast_ms);
        let id: ToastId = self.context.toasts.show(message, kind, duration)?;
        Ok(id as f64)
    }

    /// Start removing a toast returned by [`Page::toast`].
    #[wasm_bindgen(js_name = removeToast)]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn remove_toast(&self, id: f64) {
        self.context.toasts.remove(id as ToastId);
    }

    /// Open the modal with markup `content` and optional footer buttons
    /// (`[{ text, className?, onClick? }]`).
    #[wasm_bindgen(js_name = openModal)]
    pub fn open_modal(
        &self,
        title: &str,
        content: &str,
        buttons: Option<Array>,
    ) -> Result<(), JsValue> {
        let buttons: Vec<ModalButton> = buttons
            .map(|list| list.iter().filter_map(js_button).collect())
            .unwrap_or_default();
        self.context
            .modal
            .open(title, ModalContent::Markup(content.to_string()), buttons)?;
        Ok(())
    }

    /// Hide the modal.
    #[wasm_bindgen(js_name = closeModal)]
    pub fn close_modal(&self) {
        self.context.modal.close();
    }

    /// Fill the skeleton container with placeholders.
    #[wasm_bindgen(js_name = showSkeleton)]
    pub fn show_skeleton(&self, count: Option<u32>) -> Result<(), JsValue> {
        self.context.skeleton.create_skeleton(count)?;
        Ok(())
    }

    /// Remove every placeholder.
    #[wasm_bindgen(js_name = hideSkeleton)]
    pub fn hide_skeleton(&self) {
        self.context.skeleton.remove_skeleton();
    }

    /// Replace the breadcrumb with a JSON array of `{ text, url? }`.
    pub fn breadcrumb(&self, items_json: &str) -> Result<(), JsValue> {
        let items: Vec<Crumb> =
            serde_json::from_str(items_json).map_err(crate::error::UiError::from)?;
        self.context.insert_breadcrumb(&items)?;
        Ok(())
    }
}

fn js_button(value: JsValue) -> Option<ModalButton> {
    let text = Reflect::get(&value, &JsValue::from_str("text"))
        .ok()?
        .as_string()?;
    let class_name = Reflect::get(&value, &JsValue::from_str("className"))
        .ok()
        .and_then(|class| class.as_string());
    let on_click = Reflect::get(&value, &JsValue::from_str("onClick"))
        .ok()
        .and_then(|handler| handler.dyn_into::<Function>().ok())
        .map(|handler| {
            Rc::new(move |_: &ModalService| {
                if let Err(err) = handler.call0(&JsValue::NULL) {
                    console::error!("modal button handler threw", err);
                }
            }) as Rc<dyn Fn(&ModalService)>
        });
    Some(ModalButton {
        text,
        class_name,
        on_click,
    })
}
