//! Search term plus category filter state.

use std::collections::BTreeSet;

/// Inline animation re-applied to visible items on every pass.
pub const FADE_IN_ANIMATION: &str = "fadeIn 0.3s ease";

/// Current search term and active category set.
///
/// An empty category set means "no category filter", not "hide everything".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    term: String,
    active: BTreeSet<String>,
}

impl FilterState {
    /// Replace the search term; matching is case-insensitive.
    pub fn set_term(&mut self, term: &str) {
        self.term = term.to_lowercase();
    }

    /// Flip `category` and report whether it is now active.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        if self.active.remove(category) {
            false
        } else {
            self.active.insert(category.to_string());
            true
        }
    }

    /// Whether the item text matches the search term.
    #[must_use]
    pub fn matches_term(&self, text: &str) -> bool {
        self.term.is_empty() || text.to_lowercase().contains(&self.term)
    }

    /// Whether the item category passes the category filter.
    #[must_use]
    pub fn matches_category(&self, category: Option<&str>) -> bool {
        self.active.is_empty() || category.is_some_and(|c| self.active.contains(c))
    }

    /// Item visibility: both predicates must hold.
    #[must_use]
    pub fn is_visible(&self, text: &str, category: Option<&str>) -> bool {
        self.matches_term(text) && self.matches_category(category)
    }
}
