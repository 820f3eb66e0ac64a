//! Root font-size preference.

/// Smallest root font size in pixels.
pub const MIN_FONT_PX: u8 = 12;
/// Largest root font size in pixels.
pub const MAX_FONT_PX: u8 = 20;
/// Browser default root font size in pixels.
pub const DEFAULT_FONT_PX: u8 = 16;
/// Increment applied by the +/- buttons.
pub const FONT_STEP_PX: u8 = 1;

/// Root font size, always within `[MIN_FONT_PX, MAX_FONT_PX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontSize(u8);

impl Default for FontSize {
    fn default() -> Self {
        Self(DEFAULT_FONT_PX)
    }
}

/// Direction of a font-size adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStep {
    /// Grow by one step.
    Increase,
    /// Shrink by one step.
    Decrease,
}

impl FontSize {
    /// Clamp an arbitrary pixel value into range. Non-finite input yields the default.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(px: f64) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        let bounded = px
            .round()
            .clamp(f64::from(MIN_FONT_PX), f64::from(MAX_FONT_PX));
        Self(bounded as u8)
    }

    /// Resolve a stored value; absent or unparsable input yields the default.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .map_or_else(Self::default, Self::clamped)
    }

    /// Parse a computed style value such as `"16px"`.
    #[must_use]
    pub fn from_computed(value: &str) -> Self {
        let trimmed = value.trim();
        let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
        Self::from_stored(Some(number))
    }

    /// Apply one step in `direction`, staying in range.
    #[must_use]
    pub fn step(self, direction: FontStep) -> Self {
        let delta = f64::from(FONT_STEP_PX);
        let current = f64::from(self.0);
        match direction {
            FontStep::Increase => Self::clamped(current + delta),
            FontStep::Decrease => Self::clamped(current - delta),
        }
    }

    /// Size in pixels.
    #[must_use]
    pub const fn px(self) -> u8 {
        self.0
    }

    /// Inline CSS value, e.g. `"16px"`.
    #[must_use]
    pub fn css_value(self) -> String {
        format!("{}px", self.0)
    }

    /// Decimal string written to storage.
    #[must_use]
    pub fn to_stored(self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_request_lands_in_range() {
        for requested in -50..80 {
            let size = FontSize::clamped(f64::from(requested));
            assert!((MIN_FONT_PX..=MAX_FONT_PX).contains(&size.px()), "{requested}");
        }
        assert_eq!(FontSize::clamped(f64::NAN), FontSize::default());
        assert_eq!(FontSize::clamped(f64::INFINITY), FontSize::default());
    }

    #[test]
    fn stored_values_parse_or_default() {
        assert_eq!(FontSize::from_stored(None).px(), 16);
        assert_eq!(FontSize::from_stored(Some("18")).px(), 18);
        assert_eq!(FontSize::from_stored(Some("abc")).px(), 16);
        assert_eq!(FontSize::from_stored(Some("99")).px(), 20);
        assert_eq!(FontSize::from_stored(Some("3")).px(), 12);
    }

    #[test]
    fn computed_values_strip_units_and_round() {
        assert_eq!(FontSize::from_computed("17px").px(), 17);
        assert_eq!(FontSize::from_computed("17.6px").px(), 18);
        assert_eq!(FontSize::from_computed("").px(), 16);
    }

    #[test]
    fn steps_saturate_at_the_bounds() {
        let max = FontSize::clamped(20.0);
        assert_eq!(max.step(FontStep::Increase), max);
        let min = FontSize::clamped(12.0);
        assert_eq!(min.step(FontStep::Decrease), min);
        assert_eq!(FontSize::default().step(FontStep::Increase).px(), 17);
        assert_eq!(FontSize::default().step(FontStep::Decrease).px(), 15);
    }

    #[test]
    fn renders_css_and_storage_forms() {
        let size = FontSize::clamped(14.0);
        assert_eq!(size.css_value(), "14px");
        assert_eq!(size.to_stored(), "14");
    }
}
