//! Typed click-dispatch table for delegated listeners.

use crate::error::{UiError, UiResult};
use crate::i18n::TranslationBundle;

/// Something a clicked element can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Expand or collapse the enclosing card.
    ToggleCard,
}

impl Capability {
    /// Stable name for logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToggleCard => "toggle-card",
        }
    }

    /// Selector an element must match to carry the capability.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::ToggleCard => ".card-toggle",
        }
    }
}

type Handler<T> = Box<dyn Fn(&T)>;

/// Capability → handler table, one handler per capability.
pub struct DispatchTable<T> {
    entries: Vec<(Capability, Handler<T>)>,
}

impl<T> Default for DispatchTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> DispatchTable<T> {
    /// Register `handler` for `capability`. A second registration is rejected.
    ///
    /// # Errors
    /// Returns [`UiError::DuplicateCapability`] when the capability already has a handler.
    pub fn register(
        &mut self,
        capability: Capability,
        handler: impl Fn(&T) + 'static,
    ) -> UiResult<()> {
        if self.entries.iter().any(|(existing, _)| *existing == capability) {
            return Err(UiError::DuplicateCapability {
                capability: capability.name(),
            });
        }
        self.entries.push((capability, Box::new(handler)));
        Ok(())
    }

    /// Run every handler whose capability `carries` reports for `target`, in
    /// registration order.
    pub fn dispatch(&self, target: &T, carries: impl Fn(&T, Capability) -> bool) {
        for (capability, handler) in &self.entries {
            if carries(target, *capability) {
                handler(target);
            }
        }
    }
}

/// Label for a card toggle after it has been flipped.
#[must_use]
pub fn disclosure_label(expanded: bool, bundle: &TranslationBundle) -> String {
    if expanded {
        bundle.text("disclosure.show_less", "Ver menos ▲")
    } else {
        bundle.text("disclosure.show_more", "Ver mais ▼")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_handler(hits: &Rc<Cell<u32>>) -> impl Fn(&&str) + 'static {
        let hits = hits.clone();
        move |_| hits.set(hits.get() + 1)
    }

    fn carries(target: &&str, capability: Capability) -> bool {
        *target == capability.selector()
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut table = DispatchTable::<&str>::default();
        assert!(
            table
                .register(Capability::ToggleCard, counting_handler(&first))
                .is_ok()
        );
        let err = table
            .register(Capability::ToggleCard, counting_handler(&second))
            .expect_err("second registration must fail");
        assert!(matches!(
            err,
            UiError::DuplicateCapability {
                capability: "toggle-card"
            }
        ));

        table.dispatch(&".card-toggle", carries);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn dispatch_runs_only_matching_handlers() {
        let hits = Rc::new(Cell::new(0));
        let mut table = DispatchTable::<&str>::default();
        table
            .register(Capability::ToggleCard, counting_handler(&hits))
            .expect("register");

        table.dispatch(&".card-toggle", carries);
        table.dispatch(&".other", carries);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn labels_follow_expanded_state() {
        let pt = TranslationBundle::new(LocaleCode::Pt);
        assert_eq!(disclosure_label(true, &pt), "Ver menos ▲");
        assert_eq!(disclosure_label(false, &pt), "Ver mais ▼");
        let en = TranslationBundle::new(LocaleCode::En);
        assert_eq!(disclosure_label(true, &en), "Show less ▲");
    }
}
