//! Toast kinds, timing policy and the live-toast registry.

use std::collections::BTreeMap;

/// Default time a toast stays on screen.
pub const DEFAULT_TOAST_MS: i32 = 3000;
/// Length of the exit slide before the node is removed.
pub const TOAST_EXIT_MS: u32 = 300;
/// Inline animation applied while a toast leaves.
pub const TOAST_EXIT_ANIMATION: &str = "slideIn 0.3s ease-out reverse";

/// Toast variants, each with a fixed glyph and colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Operation succeeded.
    #[default]
    Success,
    /// Operation failed.
    Error,
    /// Needs attention.
    Warning,
    /// Neutral information.
    Info,
}

impl ToastKind {
    /// Parse a kind name; anything unrecognised is informational.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    /// Modifier class on the toast node.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Icon glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    /// Icon colour as a hex RGB value.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "#4caf50",
            Self::Error => "#f44336",
            Self::Warning => "#ff9800",
            Self::Info => "#2196f3",
        }
    }
}

/// Auto-dismiss delay for a requested duration; `None` keeps the toast until closed.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn auto_dismiss_after(duration_ms: i32) -> Option<u32> {
    if duration_ms > 0 {
        Some(duration_ms as u32)
    } else {
        None
    }
}

/// Timers for one toast, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimeline {
    /// Delay from showing to the start of the exit animation; `None` keeps
    /// the toast until it is closed.
    pub dismiss_at: Option<u32>,
    /// Exit animation length between dismissal and node removal.
    pub exit_ms: u32,
}

impl ToastTimeline {
    /// Timeline for a requested `duration_ms`.
    #[must_use]
    pub const fn new(duration_ms: i32, exit_ms: u32) -> Self {
        Self {
            dismiss_at: auto_dismiss_after(duration_ms),
            exit_ms,
        }
    }
}

/// Identifier of a live toast.
pub type ToastId = u64;

/// Live toasts by id. Ids are never reused, and a toast can be taken out once.
#[derive(Debug)]
pub struct ToastRegistry<T> {
    next_id: ToastId,
    live: BTreeMap<ToastId, T>,
}

impl<T> Default for ToastRegistry<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            live: BTreeMap::new(),
        }
    }
}

impl<T> ToastRegistry<T> {
    /// Track the toast built from a fresh id and return that id.
    pub fn insert_with(&mut self, build: impl FnOnce(ToastId) -> T) -> ToastId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.live.insert(id, build(id));
        id
    }

    /// Stop tracking `id`. Only the first call for an id returns the toast.
    pub fn take(&mut self, id: ToastId) -> Option<T> {
        self.live.remove(&id)
    }
}
