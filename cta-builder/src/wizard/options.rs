//! Choices offered by each step
//!
//! These are the option lists behind the wizard's select boxes. Front ends
//! render them however they like; the values round-trip into
//! [`CtaConfig`](crate::state::CtaConfig) and
//! [`StyleOverrides`](crate::state::StyleOverrides) fields.

use serde::Serialize;

use crate::catalog::{Catalog, CtaInfo, DepartmentId, OemProfile};
use crate::state::DeviceTarget;

pub use crate::validation::sliders::{SliderSpec, SLIDERS};

/// Value of the "Custom" entry in label, style and tree lists
pub const CUSTOM_VALUE: &str = "__custom__";

/// Value of the custom entry in department lists
pub const CUSTOM_DEPARTMENT_VALUE: &str = "custom";

/// An option in a select list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Value attribute
    pub value: String,
    /// Display text
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Whether this is an empty-valued placeholder
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// OEMs in list order
#[must_use]
pub fn oem_options(catalog: &Catalog) -> Vec<SelectOption> {
    catalog
        .oems()
        .iter()
        .map(|oem| SelectOption::new(&oem.code, &oem.name))
        .collect()
}

/// CTA types in catalog order, labelled with their display name
#[must_use]
pub fn cta_options(catalog: &Catalog) -> Vec<SelectOption> {
    catalog
        .cta_labels()
        .iter()
        .map(|(cta_type, info)| SelectOption::new(cta_type, info.display_name()))
        .collect()
}

/// Predefined labels of a CTA followed by "Custom"
#[must_use]
pub fn label_options(info: &CtaInfo) -> Vec<SelectOption> {
    info.options
        .iter()
        .map(|label| SelectOption::new(label, label))
        .chain(std::iter::once(SelectOption::new(CUSTOM_VALUE, "Custom")))
        .collect()
}

/// OEM styles in palette order followed by "Custom"
#[must_use]
pub fn style_options(profile: &OemProfile) -> Vec<SelectOption> {
    profile
        .styles
        .iter()
        .map(|(key, style)| {
            let label = if style.label.is_empty() { key } else { &style.label };
            SelectOption::new(key, label)
        })
        .chain(std::iter::once(SelectOption::new(CUSTOM_VALUE, "Custom")))
        .collect()
}

/// Trees of a category, between a placeholder and "Custom Tree"
#[must_use]
pub fn tree_options(catalog: &Catalog, category: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "-- Select Tree --")];
    options.extend(
        catalog
            .trees_for_category(category)
            .into_iter()
            .map(|tree| SelectOption::new(tree.id.clone(), tree.id)),
    );
    options.push(SelectOption::new(CUSTOM_VALUE, "Custom Tree"));
    options
}

/// Departments of a category after a placeholder
#[must_use]
pub fn department_options(catalog: &Catalog, category: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "-- Select Department --")];
    options.extend(
        catalog
            .departments_for_category(category)
            .into_iter()
            .map(|dept| {
                let value = match &dept.id {
                    id if id.is_custom() => CUSTOM_DEPARTMENT_VALUE.to_string(),
                    DepartmentId::Number(number) => number.to_string(),
                    DepartmentId::Keyword(keyword) => keyword.clone(),
                };
                SelectOption::new(value, &dept.label)
            }),
    );
    options
}

/// Deeplink steps of a CTA after a placeholder
#[must_use]
pub fn deeplink_step_options(info: &CtaInfo) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "-- Select Step --")];
    options.extend(
        info.deeplink_steps
            .iter()
            .map(|step| SelectOption::new(&step.id, &step.label)),
    );
    options
}

const DEVICES: [(DeviceTarget, &str, &str); 3] = [
    (DeviceTarget::All, "all", "All devices"),
    (DeviceTarget::MobileOnly, "mobile", "Mobile only"),
    (DeviceTarget::DesktopOnly, "desktop", "Desktop only"),
];

/// Device visibility choices
#[must_use]
pub fn device_options() -> Vec<SelectOption> {
    DEVICES
        .iter()
        .map(|(_, value, label)| SelectOption::new(*value, *label))
        .collect()
}

/// Device target for a value of [`device_options`]
#[must_use]
pub fn parse_device(value: &str) -> Option<DeviceTarget> {
    DEVICES
        .iter()
        .find(|(_, candidate, _)| *candidate == value)
        .map(|(device, _, _)| *device)
}

/// A typography select box of the advanced step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypographySelect {
    /// Override property the value is written to
    pub property: &'static str,
    /// Field label
    pub label: &'static str,
    /// `(value, label)` pairs; an empty value inherits from the site
    pub choices: &'static [(&'static str, &'static str)],
}

impl TypographySelect {
    /// Choices as select options
    #[must_use]
    pub fn options(&self) -> Vec<SelectOption> {
        self.choices
            .iter()
            .map(|(value, label)| SelectOption::new(*value, *label))
            .collect()
    }
}

/// Select boxes of the advanced styling step
pub const TYPOGRAPHY_SELECTS: [TypographySelect; 4] = [
    TypographySelect {
        property: "fontFamily",
        label: "Font Family",
        choices: &[
            ("", "Inherit from site"),
            ("Arial, sans-serif", "Arial"),
            ("'Roboto', sans-serif", "Roboto"),
            ("'Montserrat', sans-serif", "Montserrat"),
            ("'Georgia', serif", "Georgia"),
        ],
    },
    TypographySelect {
        property: "textTransform",
        label: "Text Transform",
        choices: &[
            ("", "Inherit from site"),
            ("none", "None"),
            ("capitalize", "Capitalize"),
            ("uppercase", "Uppercase"),
            ("lowercase", "Lowercase"),
        ],
    },
    TypographySelect {
        property: "fontWeight",
        label: "Font Weight",
        choices: &[
            ("", "Inherit from site"),
            ("400", "Regular (400)"),
            ("500", "Medium (500)"),
            ("600", "Semi-bold (600)"),
            ("700", "Bold (700)"),
        ],
    },
    TypographySelect {
        property: "textWrap",
        label: "Text Wrapping",
        choices: &[
            ("", "Inherit from site"),
            ("wrap", "Wrap text"),
            ("nowrap", "No wrap"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|option| option.value.as_str()).collect()
    }

    #[test]
    fn test_cta_options_use_display_name() {
        let catalog = fixtures::catalog();
        let options = cta_options(&catalog);
        let pre_qualify = options.iter().find(|o| o.value == "pre_qualify").unwrap();
        assert_eq!(pre_qualify.label, "Pre-Qualify");
        let test_drive = options.iter().find(|o| o.value == "test_drive").unwrap();
        assert_eq!(test_drive.label, "Schedule Test Drive");
    }

    #[test]
    fn test_label_options_end_with_custom() {
        let catalog = fixtures::catalog();
        let options = label_options(catalog.cta_info("test_drive").unwrap());
        assert_eq!(
            values(&options),
            vec!["Schedule Test Drive", "Book a Test Drive", "Test Drive", CUSTOM_VALUE]
        );
        assert_eq!(options.last().unwrap().label, "Custom");
    }

    #[test]
    fn test_style_options_follow_palette() {
        let profile = fixtures::toyota();
        let options = style_options(&profile);
        assert_eq!(options.len(), profile.styles.len() + 1);
        assert_eq!(options[0].value, "primary");
        assert_eq!(options.last().unwrap().value, CUSTOM_VALUE);
    }

    #[test]
    fn test_tree_options_sorted_between_placeholder_and_custom() {
        let catalog = fixtures::catalog();
        let options = tree_options(&catalog, "sales");
        assert_eq!(
            values(&options),
            vec!["", "availability", "sales-tree-v1", "sales-tree-v2", CUSTOM_VALUE]
        );
        assert!(options[0].is_placeholder());
        assert_eq!(options[0].label, "-- Select Tree --");
        assert_eq!(options[4].label, "Custom Tree");
    }

    #[test]
    fn test_department_options_include_shared() {
        let catalog = fixtures::catalog();
        let options = department_options(&catalog, "sales");
        assert_eq!(values(&options), vec!["", "1", "4", CUSTOM_DEPARTMENT_VALUE]);
        assert_eq!(options[1].label, "Sales (1)");
    }

    #[test]
    fn test_device_options_round_trip() {
        for option in device_options() {
            assert!(parse_device(&option.value).is_some());
        }
        assert_eq!(parse_device("mobile"), Some(DeviceTarget::MobileOnly));
        assert_eq!(parse_device("tablet"), None);
    }

    #[test]
    fn test_typography_selects() {
        let weight = TYPOGRAPHY_SELECTS
            .iter()
            .find(|select| select.property == "fontWeight")
            .unwrap();
        assert_eq!(weight.options()[3].label, "Semi-bold (600)");

        // Every select can fall back to the site's value
        for select in &TYPOGRAPHY_SELECTS {
            assert!(select.options()[0].is_placeholder(), "{}", select.property);
        }
    }
}
