//! CTA label catalog

use serde::{Deserialize, Serialize};

/// CTA type that always uses a custom department number
pub const CONFIRM_AVAILABILITY: &str = "confirm_availability";

/// CTA type rendered as a BuyNow button
pub const PERSONALIZE_PAYMENT: &str = "personalize_payment";

/// Catalog entry describing one CTA type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaInfo {
    /// Default button label
    #[serde(rename = "default")]
    pub default_label: String,
    /// Name shown in the CTA picker, if different from the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Predefined label choices
    #[serde(default)]
    pub options: Vec<String>,
    /// Department number used when none is chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_dept: Option<u32>,
    /// Whether a tree and department must be configured
    #[serde(default)]
    pub requires_tree: bool,
    /// Whether the CTA can deeplink into the external flow
    #[serde(default)]
    pub supports_deeplink: bool,
    /// Steps a deeplink may jump to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deeplink_steps: Vec<DeeplinkStep>,
    /// Tree category used to filter trees and departments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_category: Option<String>,
    /// Fixed onclick handler, overriding the tree launcher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onclick_pattern: Option<String>,
}

impl CtaInfo {
    /// Name for pickers: display name, else the default label
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.default_label)
    }

    /// Whether a deeplinked CTA must also pick a step
    #[must_use]
    pub fn requires_deeplink_step(&self) -> bool {
        !self.deeplink_steps.is_empty()
    }
}

/// Step of the external flow a deeplink can target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeeplinkStep {
    /// Value written to the `drtstp` attribute
    pub id: String,
    /// Display label
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_entry() {
        let info: CtaInfo = serde_json::from_str(r#"{ "default": "Chat Now" }"#).unwrap();
        assert_eq!(info.default_label, "Chat Now");
        assert_eq!(info.display_name(), "Chat Now");
        assert!(!info.requires_tree);
        assert!(!info.requires_deeplink_step());
    }

    #[test]
    fn test_display_name_preferred() {
        let info: CtaInfo = serde_json::from_str(
            r#"{ "default": "Get Pre-Qualified", "displayName": "Pre-Qualify", "standardDept": 3 }"#,
        )
        .unwrap();
        assert_eq!(info.display_name(), "Pre-Qualify");
        assert_eq!(info.standard_dept, Some(3));
    }
}
