//! Per-group feedback for a whole form: field validation, submit and reset.
//!
//! The DOM layer only projects a [`GroupFeedback`] onto its `.form-group`;
//! every decision about what a group shows lives here.

use super::validation::{FeedbackTone, FieldOutcome, FieldSpec, validate};
use crate::i18n::TranslationBundle;

/// Classes a group may carry after validation.
pub const STATE_CLASSES: [&str; 2] = [FeedbackTone::Success.class(), FeedbackTone::Error.class()];

/// What one `.form-group` shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupFeedback {
    /// Group and feedback class; `None` renders no feedback node.
    pub tone: Option<FeedbackTone>,
    /// Text of the feedback node.
    pub message: String,
}

impl GroupFeedback {
    /// Feedback for a validation outcome, with messages from `bundle`.
    #[must_use]
    pub fn from_outcome(outcome: FieldOutcome, bundle: &TranslationBundle) -> Self {
        let message = match (outcome.feedback, outcome.issue) {
            (None, _) => String::new(),
            (Some(_), Some(issue)) => bundle.text(issue.message_key(), ""),
            (Some(_), None) => bundle.text("form.valid", "✓"),
        };
        Self {
            tone: outcome.feedback,
            message,
        }
    }

    /// Whether the group shows an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.tone, Some(FeedbackTone::Error))
    }
}

/// Feedback for every field of one form, indexed by field position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFeedback {
    groups: Vec<GroupFeedback>,
}

impl FormFeedback {
    /// Blank feedback for a form with `fields` fields.
    #[must_use]
    pub fn new(fields: usize) -> Self {
        Self {
            groups: vec![GroupFeedback::default(); fields],
        }
    }

    /// Validate field `index` and record what its group shows. Returns whether the value passed.
    pub fn validate_field(
        &mut self,
        index: usize,
        spec: FieldSpec,
        raw: &str,
        bundle: &TranslationBundle,
    ) -> bool {
        let outcome = validate(spec, raw);
        if let Some(group) = self.groups.get_mut(index) {
            *group = GroupFeedback::from_outcome(outcome, bundle);
        }
        outcome.is_valid()
    }

    /// Validate every field in order. All fields are evaluated even after a
    /// failure so each group shows its own state.
    pub fn validate_all<'a>(
        &mut self,
        fields: impl IntoIterator<Item = (FieldSpec, &'a str)>,
        bundle: &TranslationBundle,
    ) -> bool {
        fields
            .into_iter()
            .enumerate()
            .fold(true, |all_valid, (index, (spec, raw))| {
                self.validate_field(index, spec, raw, bundle) && all_valid
            })
    }

    /// Whether typing into field `index` re-validates it: only while it shows an error.
    #[must_use]
    pub fn revalidates_on_input(&self, index: usize) -> bool {
        self.groups.get(index).is_some_and(GroupFeedback::is_error)
    }

    /// Clear every group, as after a completed submit.
    pub fn reset(&mut self) {
        self.groups.fill(GroupFeedback::default());
    }

    /// What field `index` shows.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&GroupFeedback> {
        self.groups.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::FieldKind;
    use crate::i18n::LocaleCode;

    const NAME: FieldSpec = FieldSpec {
        kind: FieldKind::Other,
        required: true,
    };
    const EMAIL: FieldSpec = FieldSpec {
        kind: FieldKind::Email,
        required: true,
    };
    const NOTES: FieldSpec = FieldSpec {
        kind: FieldKind::Other,
        required: false,
    };

    fn bundle() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::Pt)
    }

    #[test]
    fn empty_required_field_blocks_submit_with_visible_error() {
        let bundle = bundle();
        let mut form = FormFeedback::new(1);
        assert!(!form.validate_all([(NAME, "")], &bundle));
        let group = form.group(0).expect("group");
        assert_eq!(group.tone, Some(FeedbackTone::Error));
        assert_eq!(group.message, "Este campo é obrigatório");
    }

    #[test]
    fn submit_evaluates_every_field() {
        let bundle = bundle();
        let mut form = FormFeedback::new(3);
        let accepted = form.validate_all([(NAME, ""), (EMAIL, "ana@"), (NOTES, "")], &bundle);
        assert!(!accepted);
        assert!(form.group(0).is_some_and(GroupFeedback::is_error));
        assert_eq!(
            form.group(1).map(|group| group.message.as_str()),
            Some("Digite um e-mail válido")
        );
        assert_eq!(form.group(2), Some(&GroupFeedback::default()));
    }

    #[test]
    fn valid_values_show_success() {
        let bundle = bundle();
        let mut form = FormFeedback::new(2);
        assert!(form.validate_all([(NAME, "Ana"), (EMAIL, "ana@example.com")], &bundle));
        for index in 0..2 {
            let group = form.group(index).expect("group");
            assert_eq!(group.tone, Some(FeedbackTone::Success));
            assert_eq!(group.message, "✓ Campo válido");
        }
    }

    #[test]
    fn input_revalidates_only_groups_in_error() {
        let bundle = bundle();
        let mut form = FormFeedback::new(2);
        assert!(!form.revalidates_on_input(0));
        assert!(!form.validate_field(0, EMAIL, "nope", &bundle));
        assert!(form.validate_field(1, NAME, "Ana", &bundle));
        assert!(form.revalidates_on_input(0));
        assert!(!form.revalidates_on_input(1));
        assert!(!form.revalidates_on_input(9));

        assert!(form.validate_field(0, EMAIL, "ana@example.com", &bundle));
        assert!(!form.revalidates_on_input(0));
    }

    #[test]
    fn reset_after_submit_clears_every_group() {
        let bundle = bundle();
        let mut form = FormFeedback::new(3);
        assert!(form.validate_all(
            [(NAME, "Ana"), (EMAIL, "ana@example.com"), (NOTES, "oi")],
            &bundle
        ));
        form.reset();
        assert_eq!(form, FormFeedback::new(3));
        assert!((0..3).all(|index| form.group(index) == Some(&GroupFeedback::default())));
    }

    #[test]
    fn state_classes_match_feedback_tones() {
        assert_eq!(STATE_CLASSES, ["success", "error"]);
    }
}
