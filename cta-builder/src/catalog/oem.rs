//! OEM brand palettes
//!
//! Each OEM ships a JSON file with an ordered set of named button styles.
//! Style order is preserved because it is the order users pick from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Entry of the OEM list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OemSummary {
    /// Short code used for the OEM's data file (e.g. `toyota`)
    pub code: String,
    /// Display name
    pub name: String,
}

/// Wrapper matching the layout of `oem-list.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct OemList {
    pub(crate) oems: Vec<OemSummary>,
}

/// Full style palette of one OEM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OemProfile {
    /// Short code (e.g. `toyota`)
    #[serde(default)]
    pub code: String,
    /// Display name
    pub name: String,
    /// Main brand color, used when seeding standard styles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_color: Option<String>,
    /// Named button styles, in authoring order
    #[serde(default)]
    pub styles: IndexMap<String, StyleDefinition>,
}

impl OemProfile {
    /// Style key every palette is expected to carry
    pub const PRIMARY: &'static str = "primary";
    /// Style key used as the VDP base when present
    pub const SECONDARY: &'static str = "secondary";

    /// Look up a style, falling back to `primary` when the key is unknown
    #[must_use]
    pub fn style(&self, key: &str) -> Option<&StyleDefinition> {
        self.styles
            .get(key)
            .or_else(|| self.styles.get(Self::PRIMARY))
    }

    /// The `primary` style, if the palette has one
    #[must_use]
    pub fn primary(&self) -> Option<&StyleDefinition> {
        self.styles.get(Self::PRIMARY)
    }

    /// Base style for VDP placement: `secondary`, else `primary`
    #[must_use]
    pub fn vdp_base(&self) -> Option<&StyleDefinition> {
        self.styles
            .get(Self::SECONDARY)
            .or_else(|| self.primary())
    }
}

/// A single named button style
///
/// Every property is optional; missing ones fall back during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDefinition {
    /// Human readable label shown in the style picker
    #[serde(default)]
    pub label: String,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_text_color: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_space: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

impl StyleDefinition {
    /// CSS declarations for this style, in a stable property order
    ///
    /// The label and hover colors are not declarations of the base rule.
    #[must_use]
    pub fn css_declarations(&self) -> Vec<(&'static str, &str)> {
        let properties: [(&'static str, &Option<String>); 16] = [
            ("background-color", &self.background_color),
            ("color", &self.text_color),
            ("border-color", &self.border_color),
            ("border-radius", &self.border_radius),
            ("text-transform", &self.text_transform),
            ("font-size", &self.font_size),
            ("font-weight", &self.font_weight),
            ("font-family", &self.font_family),
            ("line-height", &self.line_height),
            ("padding", &self.padding),
            ("margin-top", &self.margin_top),
            ("margin-bottom", &self.margin_bottom),
            ("letter-spacing", &self.letter_spacing),
            ("border-width", &self.border_width),
            ("white-space", &self.white_space),
            ("transition", &self.transition),
        ];

        properties
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> OemProfile {
        serde_json::from_str(
            r##"{
                "name": "Test",
                "styles": {
                    "primary": { "label": "P", "backgroundColor": "#111111" },
                    "outline": { "label": "O", "backgroundColor": "transparent" }
                }
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_style_falls_back_to_primary() {
        let profile = profile();
        assert_eq!(profile.style("outline").unwrap().label, "O");
        assert_eq!(profile.style("missing").unwrap().label, "P");
    }

    #[test]
    fn test_vdp_base_without_secondary_uses_primary() {
        assert_eq!(profile().vdp_base().unwrap().label, "P");
    }

    #[test]
    fn test_styles_keep_file_order() {
        let keys: Vec<_> = profile().styles.keys().cloned().collect();
        assert_eq!(keys, vec!["primary", "outline"]);
    }

    #[test]
    fn test_css_declarations_order_and_skips() {
        let style = StyleDefinition {
            label: "ignored".into(),
            transition: Some("all 0.3s ease".into()),
            background_color: Some("#000".into()),
            hover_text_color: Some("#fff".into()),
            font_size: Some("16px".into()),
            ..StyleDefinition::default()
        };

        assert_eq!(
            style.css_declarations(),
            vec![
                ("background-color", "#000"),
                ("font-size", "16px"),
                ("transition", "all 0.3s ease"),
            ]
        );
    }
}
