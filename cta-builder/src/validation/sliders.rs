//! Numeric ranges of the advanced styling sliders

use serde::Serialize;

/// One slider of the advanced styling step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderSpec {
    /// camelCase property key, as used in [`StyleOverrides`](crate::state::StyleOverrides)
    pub property: &'static str,
    /// Control label
    pub label: &'static str,
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
    /// Slider increment
    pub step: f64,
    /// Unit appended to stored values; empty for unitless values
    pub unit: &'static str,
}

/// Every slider, typography first
pub const SLIDERS: [SliderSpec; 8] = [
    SliderSpec {
        property: "fontSize",
        label: "Font Size (px)",
        min: 12.0,
        max: 28.0,
        step: 1.0,
        unit: "px",
    },
    SliderSpec {
        property: "lineHeight",
        label: "Line Height",
        min: 1.0,
        max: 3.0,
        step: 0.1,
        unit: "",
    },
    SliderSpec {
        property: "letterSpacing",
        label: "Letter Spacing (px)",
        min: -2.0,
        max: 6.0,
        step: 0.1,
        unit: "px",
    },
    SliderSpec {
        property: "borderRadius",
        label: "Border Radius (px)",
        min: 0.0,
        max: 50.0,
        step: 1.0,
        unit: "px",
    },
    SliderSpec {
        property: "borderWidth",
        label: "Border Width (px)",
        min: 0.0,
        max: 10.0,
        step: 1.0,
        unit: "px",
    },
    SliderSpec {
        property: "marginTop",
        label: "Margin Top (px)",
        min: 0.0,
        max: 40.0,
        step: 1.0,
        unit: "px",
    },
    SliderSpec {
        property: "marginBottom",
        label: "Margin Bottom (px)",
        min: 0.0,
        max: 40.0,
        step: 1.0,
        unit: "px",
    },
    SliderSpec {
        property: "padding",
        label: "Padding (px)",
        min: 4.0,
        max: 40.0,
        step: 1.0,
        unit: "px",
    },
];

impl SliderSpec {
    /// Slider for a property key
    #[must_use]
    pub fn for_property(property: &str) -> Option<&'static Self> {
        SLIDERS.iter().find(|slider| slider.property == property)
    }

    /// Numeric part of a stored value, if it is bare or carries this unit
    #[must_use]
    pub fn parse(&self, value: &str) -> Option<f64> {
        let value = value.trim();
        let number = if self.unit.is_empty() {
            value
        } else {
            value.strip_suffix(self.unit).unwrap_or(value)
        };
        number.trim().parse::<f64>().ok().filter(|n| n.is_finite())
    }

    /// Whether a stored value lies inside the slider range
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.parse(value)
            .is_some_and(|number| (self.min..=self.max).contains(&number))
    }

    /// Stored form of a slider position (`18px`, `1.4`)
    #[must_use]
    pub fn format(&self, number: f64) -> String {
        format!("{number}{}", self.unit)
    }

    /// Message for a value outside the range
    #[must_use]
    pub fn range_message(&self) -> String {
        format!(
            "{} must be between {}{unit} and {}{unit}",
            self.label.trim_end_matches(" (px)"),
            self.min,
            self.max,
            unit = self.unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_unit_and_bare_values() {
        let font = SliderSpec::for_property("fontSize").unwrap();
        assert!(font.accepts("18px"));
        assert!(font.accepts("12"));
        assert!(!font.accepts("30px"));
        assert!(!font.accepts("1.2em"));
        assert!(!font.accepts("large"));
    }

    #[test]
    fn test_negative_letter_spacing() {
        let spacing = SliderSpec::for_property("letterSpacing").unwrap();
        assert!(spacing.accepts("-1.5px"));
        assert!(!spacing.accepts("-3px"));
    }

    #[test]
    fn test_unitless_line_height() {
        let line_height = SliderSpec::for_property("lineHeight").unwrap();
        assert!(line_height.accepts("1.4"));
        assert!(!line_height.accepts("0.5"));
        assert_eq!(line_height.format(1.5), "1.5");
    }

    #[test]
    fn test_range_message() {
        let padding = SliderSpec::for_property("padding").unwrap();
        assert_eq!(padding.range_message(), "Padding must be between 4px and 40px");
        assert_eq!(padding.format(14.0), "14px");
    }
}
