//! Inline field validation rules.
//!
//! # Design
//! - Rules run in a fixed priority order; the first failure wins.
//! - Values are trimmed before any rule looks at them.
//! - A failure always produces error feedback; an empty value that passes
//!   produces none.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Field type as far as validation cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// `type=email`.
    Email,
    /// `type=password`.
    Password,
    /// Anything else, including textareas.
    Other,
}

impl FieldKind {
    /// Map an input `type` attribute.
    #[must_use]
    pub fn from_type_attr(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "email" => Self::Email,
            "password" => Self::Password,
            _ => Self::Other,
        }
    }
}

/// Static description of one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field type.
    pub kind: FieldKind,
    /// Whether the `required` attribute is present.
    pub required: bool,
}

/// Why a field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldIssue {
    /// Required and empty.
    Required,
    /// Not an email address.
    InvalidEmail,
    /// Password shorter than [`MIN_PASSWORD_CHARS`].
    PasswordTooShort,
}

impl FieldIssue {
    /// Translation key for the message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Required => "form.required",
            Self::InvalidEmail => "form.invalid_email",
            Self::PasswordTooShort => "form.password_short",
        }
    }
}

/// Tone of rendered feedback; doubles as the group/feedback class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTone {
    /// Valid value.
    Success,
    /// Invalid value.
    Error,
}

impl FeedbackTone {
    /// CSS class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Result of validating one field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldOutcome {
    /// First failing rule, if any.
    pub issue: Option<FieldIssue>,
    /// Feedback to render; `None` only for an empty value that passes.
    pub feedback: Option<FeedbackTone>,
}

impl FieldOutcome {
    /// Whether the field passes.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.issue.is_none()
    }
}

/// Whether `value` looks like an email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Validate `raw` against `spec`.
#[must_use]
pub fn validate(spec: FieldSpec, raw: &str) -> FieldOutcome {
    let value = raw.trim();
    let issue = if spec.required && value.is_empty() {
        Some(FieldIssue::Required)
    } else if spec.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        Some(FieldIssue::InvalidEmail)
    } else if spec.kind == FieldKind::Password
        && !value.is_empty()
        && value.chars().count() < MIN_PASSWORD_CHARS
    {
        Some(FieldIssue::PasswordTooShort)
    } else {
        None
    };
    let feedback = if issue.is_some() {
        Some(FeedbackTone::Error)
    } else if value.is_empty() {
        None
    } else {
        Some(FeedbackTone::Success)
    };
    FieldOutcome { issue, feedback }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: FieldSpec = FieldSpec {
        kind: FieldKind::Other,
        required: false,
    };
    const REQUIRED_TEXT: FieldSpec = FieldSpec {
        kind: FieldKind::Other,
        required: true,
    };
    const EMAIL: FieldSpec = FieldSpec {
        kind: FieldKind::Email,
        required: true,
    };
    const PASSWORD: FieldSpec = FieldSpec {
        kind: FieldKind::Password,
        required: false,
    };

    #[test]
    fn empty_optional_field_has_no_feedback() {
        let outcome = validate(TEXT, "   ");
        assert!(outcome.is_valid());
        assert_eq!(outcome.feedback, None);
    }

    #[test]
    fn empty_required_field_renders_required_error() {
        let outcome = validate(REQUIRED_TEXT, "  ");
        assert_eq!(outcome.issue, Some(FieldIssue::Required));
        assert_eq!(outcome.feedback, Some(FeedbackTone::Error));
        assert_eq!(outcome.feedback.map(FeedbackTone::class), Some("error"));
        assert_eq!(FieldIssue::Required.message_key(), "form.required");
    }

    #[test]
    fn email_rules() {
        let ok = validate(EMAIL, " ana@example.com ");
        assert!(ok.is_valid());
        assert_eq!(ok.feedback, Some(FeedbackTone::Success));

        for bad in ["ana", "ana@example", "a na@example.com", "@example.com"] {
            let outcome = validate(EMAIL, bad);
            assert_eq!(outcome.issue, Some(FieldIssue::InvalidEmail), "{bad}");
            assert_eq!(outcome.feedback, Some(FeedbackTone::Error));
        }
    }

    #[test]
    fn short_passwords_fail() {
        assert_eq!(
            validate(PASSWORD, "12345").issue,
            Some(FieldIssue::PasswordTooShort)
        );
        assert!(validate(PASSWORD, "123456").is_valid());
        assert!(validate(PASSWORD, "").is_valid());
    }

    #[test]
    fn required_wins_over_type_rules() {
        let spec = FieldSpec {
            kind: FieldKind::Password,
            required: true,
        };
        assert_eq!(validate(spec, "").issue, Some(FieldIssue::Required));
    }

    #[test]
    fn type_attributes_map_to_kinds() {
        assert_eq!(FieldKind::from_type_attr("EMAIL"), FieldKind::Email);
        assert_eq!(FieldKind::from_type_attr("password"), FieldKind::Password);
        assert_eq!(FieldKind::from_type_attr("text"), FieldKind::Other);
    }
}
