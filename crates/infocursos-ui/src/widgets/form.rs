//! Inline form validation with a simulated submit.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Node};

use crate::core::form::{FormFeedback, GroupFeedback, STATE_CLASSES};
use crate::core::toast::ToastKind;
use crate::core::validation::{FieldKind, FieldSpec};
use crate::error::{UiError, UiResult};
use crate::i18n::TranslationBundle;
use crate::widgets::dom;
use crate::widgets::toast::ToastService;

const FIELD_SELECTOR: &str = "input, textarea";
const GROUP_CLASS: &str = "form-group";
const GROUP_SELECTOR: &str = ".form-group";
const FEEDBACK_SELECTOR: &str = ".form-feedback";

enum Field {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Field {
    fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .ok()
                .map(Self::TextArea),
        }
    }

    fn element(&self) -> &Element {
        match self {
            Self::Input(input) => input,
            Self::TextArea(area) => area,
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    fn spec(&self) -> FieldSpec {
        let kind = match self {
            Self::Input(input) => FieldKind::from_type_attr(&input.type_()),
            Self::TextArea(_) => FieldKind::Other,
        };
        FieldSpec {
            kind,
            required: self.element().has_attribute("required"),
        }
    }

    fn group(&self) -> Option<Element> {
        self.element().closest(GROUP_SELECTOR).ok().flatten()
    }
}

/// Validates one form's fields and simulates submission.
pub(crate) struct FormValidator {
    document: Document,
    form: HtmlFormElement,
    fields: Vec<Field>,
    feedback: RefCell<FormFeedback>,
    bundle: Rc<TranslationBundle>,
    toasts: ToastService,
    reset_delay_ms: u32,
}

impl FormValidator {
    /// Validator for the first form matching `selector`, if any.
    pub(crate) fn find(
        document: &Document,
        selector: &str,
        bundle: Rc<TranslationBundle>,
        toasts: ToastService,
        reset_delay_ms: u32,
    ) -> Option<Self> {
        let form = dom::query(document, selector)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        let root: &Element = form.as_ref();
        let fields: Vec<Field> = dom::query_all(root, FIELD_SELECTOR)
            .into_iter()
            .filter_map(Field::from_element)
            .collect();
        Some(Self {
            document: document.clone(),
            form,
            feedback: RefCell::new(FormFeedback::new(fields.len())),
            fields,
            bundle,
            toasts,
            reset_delay_ms,
        })
    }

    pub(crate) fn install(self) -> UiResult<()> {
        for field in &self.fields {
            self.ensure_group(field)?;
        }
        let validator = Rc::new(self);
        for (index, field) in validator.fields.iter().enumerate() {
            let this = validator.clone();
            EventListener::new(field.element(), "blur", move |_event| {
                this.validate_field(index);
            })
            .forget();

            let this = validator.clone();
            EventListener::new(field.element(), "input", move |_event| {
                let in_error = this.feedback.borrow().revalidates_on_input(index);
                if in_error {
                    this.validate_field(index);
                }
            })
            .forget();
        }

        let this = validator.clone();
        EventListener::new_with_options(
            &validator.form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                if this.validate_form() {
                    this.handle_submit();
                }
            },
        )
        .forget();
        Ok(())
    }

    fn ensure_group(&self, field: &Field) -> UiResult<()> {
        if field.group().is_some() {
            return Ok(());
        }
        let element = field.element();
        let Some(parent) = element.parent_node() else {
            return Ok(());
        };
        let wrapper = dom::create(&self.document, "div", GROUP_CLASS)?;
        let anchor: &Node = element;
        parent
            .insert_before(&wrapper, Some(anchor))
            .map_err(|err| UiError::dom("insert_before", &err))?;
        dom::append(&wrapper, element)
    }

    fn validate_field(&self, index: usize) {
        let Some(field) = self.fields.get(index) else {
            return;
        };
        self.feedback.borrow_mut().validate_field(
            index,
            field.spec(),
            &field.value(),
            &self.bundle,
        );
        self.render(index);
    }

    fn validate_form(&self) -> bool {
        let values: Vec<(FieldSpec, String)> = self
            .fields
            .iter()
            .map(|field| (field.spec(), field.value()))
            .collect();
        let accepted = self.feedback.borrow_mut().validate_all(
            values.iter().map(|(spec, raw)| (*spec, raw.as_str())),
            &self.bundle,
        );
        self.render_all();
        accepted
    }

    fn render_all(&self) {
        for index in 0..self.fields.len() {
            self.render(index);
        }
    }

    fn render(&self, index: usize) {
        let Some(group) = self.fields.get(index).and_then(Field::group) else {
            return;
        };
        let shown = self
            .feedback
            .borrow()
            .group(index)
            .cloned()
            .unwrap_or_default();
        if let Err(err) = self.project(&group, &shown) {
            gloo::console::error!("validation feedback failed", err.to_string());
        }
    }

    /// Make `group` show exactly `shown`.
    fn project(&self, group: &Element, shown: &GroupFeedback) -> UiResult<()> {
        if let Some(existing) = dom::query(group, FEEDBACK_SELECTOR) {
            existing.remove();
        }
        dom::remove_classes(group, &STATE_CLASSES)?;
        let Some(tone) = shown.tone else {
            return Ok(());
        };
        dom::add_class(group, tone.class())?;
        let node = dom::create(
            &self.document,
            "div",
            &format!("form-feedback {}", tone.class()),
        )?;
        node.set_text_content(Some(&shown.message));
        dom::append(group, &node)
    }

    fn handle_submit(self: &Rc<Self>) {
        let message = self
            .bundle
            .text("form.submitted", "Formulário enviado com sucesso!");
        if let Err(err) = self.toasts.notify(&message, ToastKind::Success) {
            gloo::console::error!("submit toast failed", err.to_string());
        }
        let this = self.clone();
        Timeout::new(self.reset_delay_ms, move || this.clear()).forget();
    }

    fn clear(&self) {
        self.form.reset();
        self.feedback.borrow_mut().reset();
        self.render_all();
    }
}
