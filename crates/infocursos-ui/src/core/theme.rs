//! Colour-vision themes and the class-list plumbing that applies them.

use std::collections::BTreeSet;

/// Colour theme preference. Every variant except [`ColorTheme::Default`]
/// maps to a body class consumed by the stylesheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorTheme {
    /// Stock palette, no extra class.
    #[default]
    Default,
    /// Red-blind friendly palette.
    Protanopia,
    /// Green-blind friendly palette.
    Deuteranopia,
    /// Blue-blind friendly palette.
    Tritanopia,
}

impl ColorTheme {
    /// All themes in selector order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Default,
            Self::Protanopia,
            Self::Deuteranopia,
            Self::Tritanopia,
        ]
    }

    /// String identifier used in storage and in the selector `<option>` values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
        }
    }

    /// Body class for the theme, `None` for the stock palette.
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            other => Some(other.as_str()),
        }
    }

    /// Parse a known identifier.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|theme| theme.as_str() == value.trim())
    }

    /// Resolve a stored or user-supplied value, falling back to the default
    /// for anything absent or unrecognised.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }
}

/// Minimal class-list surface so theme application works the same on a DOM
/// token list and on an in-memory set.
pub trait ClassSet {
    /// Add a class; adding an existing class is a no-op.
    fn add_class(&mut self, class: &str);
    /// Remove a class; removing a missing class is a no-op.
    fn remove_class(&mut self, class: &str);
}

impl ClassSet for BTreeSet<String> {
    fn add_class(&mut self, class: &str) {
        self.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.remove(class);
    }
}

/// Replace whichever theme class is present with the one for `theme`.
pub fn apply_theme<C: ClassSet + ?Sized>(classes: &mut C, theme: ColorTheme) {
    for known in ColorTheme::all() {
        if let Some(class) = known.css_class() {
            classes.remove_class(class);
        }
    }
    if let Some(class) = theme.css_class() {
        classes.add_class(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn unknown_values_fall_back_to_default() {
        assert_eq!(ColorTheme::from_stored(None), ColorTheme::Default);
        assert_eq!(ColorTheme::from_stored(Some("sepia")), ColorTheme::Default);
        assert_eq!(ColorTheme::from_stored(Some("")), ColorTheme::Default);
        assert_eq!(
            ColorTheme::from_stored(Some("tritanopia")),
            ColorTheme::Tritanopia
        );
    }

    #[test]
    fn identifiers_round_trip() {
        for theme in ColorTheme::all() {
            assert_eq!(ColorTheme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn applying_replaces_previous_theme_and_keeps_other_classes() {
        let mut set = classes(&["page", "protanopia"]);
        apply_theme(&mut set, ColorTheme::Deuteranopia);
        assert_eq!(set, classes(&["deuteranopia", "page"]));

        apply_theme(&mut set, ColorTheme::Default);
        assert_eq!(set, classes(&["page"]));
    }

    #[test]
    fn applying_is_idempotent() {
        for theme in ColorTheme::all() {
            let mut once = classes(&["page"]);
            apply_theme(&mut once, theme);
            let mut twice = once.clone();
            apply_theme(&mut twice, theme);
            assert_eq!(once, twice);
        }
    }
}
