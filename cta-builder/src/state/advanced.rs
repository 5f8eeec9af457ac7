//! Typography and spacing overrides
//!
//! The same override shape is used at two levels: per placement (the
//! advanced styling step) and per CTA.

use serde::{Deserialize, Serialize};

/// Text wrapping choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextWrap {
    /// Allow wrapping (`white-space: normal`)
    Wrap,
    /// Keep on one line (`white-space: nowrap`)
    Nowrap,
    /// Patch value clearing the choice back to the site's default
    #[serde(rename = "")]
    Inherit,
}

impl TextWrap {
    /// CSS `white-space` value
    #[must_use]
    pub const fn white_space(self) -> &'static str {
        match self {
            Self::Wrap | Self::Inherit => "normal",
            Self::Nowrap => "nowrap",
        }
    }

    /// Serialized value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::Nowrap => "nowrap",
            Self::Inherit => "",
        }
    }
}

/// Optional typography and spacing values
///
/// `None` means "inherit from the layer below".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOverrides {
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_wrap: Option<TextWrap>,
}

impl StyleOverrides {
    /// Whether no value is set
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations().is_empty()
    }

    /// Text wrapping in effect, if any
    #[must_use]
    pub fn wrap(&self) -> Option<TextWrap> {
        self.text_wrap.filter(|wrap| *wrap != TextWrap::Inherit)
    }

    /// Merge a patch into these overrides
    ///
    /// Set values in the patch replace the current ones; an empty string
    /// clears the field back to "inherit".
    pub fn apply(&mut self, patch: &Self) {
        fn merge(target: &mut Option<String>, value: Option<&String>) {
            if let Some(value) = value {
                *target = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.clone())
                };
            }
        }

        merge(&mut self.font_family, patch.font_family.as_ref());
        merge(&mut self.font_size, patch.font_size.as_ref());
        merge(&mut self.font_weight, patch.font_weight.as_ref());
        merge(&mut self.line_height, patch.line_height.as_ref());
        merge(&mut self.letter_spacing, patch.letter_spacing.as_ref());
        merge(&mut self.text_transform, patch.text_transform.as_ref());
        merge(&mut self.border_radius, patch.border_radius.as_ref());
        merge(&mut self.border_width, patch.border_width.as_ref());
        merge(&mut self.margin_top, patch.margin_top.as_ref());
        merge(&mut self.margin_bottom, patch.margin_bottom.as_ref());
        merge(&mut self.padding, patch.padding.as_ref());
        match patch.text_wrap {
            Some(TextWrap::Inherit) => self.text_wrap = None,
            Some(wrap) => self.text_wrap = Some(wrap),
            None => {}
        }
    }

    /// Text-valued fields as `(camelCase key, css property, value)`
    ///
    /// Order matches the emitted override rules. Blank values read as unset.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &'static str, Option<&str>); 11] {
        let fields = [
            ("fontFamily", "font-family", self.font_family.as_deref()),
            ("fontSize", "font-size", self.font_size.as_deref()),
            ("fontWeight", "font-weight", self.font_weight.as_deref()),
            ("lineHeight", "line-height", self.line_height.as_deref()),
            ("letterSpacing", "letter-spacing", self.letter_spacing.as_deref()),
            ("textTransform", "text-transform", self.text_transform.as_deref()),
            ("borderRadius", "border-radius", self.border_radius.as_deref()),
            ("borderWidth", "border-width", self.border_width.as_deref()),
            ("marginTop", "margin-top", self.margin_top.as_deref()),
            ("marginBottom", "margin-bottom", self.margin_bottom.as_deref()),
            ("padding", "padding", self.padding.as_deref()),
        ];
        fields.map(|(key, css, value)| (key, css, value.filter(|value| !value.trim().is_empty())))
    }

    /// CSS declarations for every set value, white-space last
    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, &str)> {
        let mut declarations: Vec<_> = self
            .fields()
            .into_iter()
            .filter_map(|(_, css, value)| value.map(|value| (css, value)))
            .collect();
        if let Some(wrap) = self.wrap() {
            declarations.push(("white-space", wrap.white_space()));
        }
        declarations
    }

    /// Value of a field by camelCase key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        if key == "textWrap" {
            return self.wrap().map(TextWrap::as_str);
        }
        self.fields()
            .into_iter()
            .find(|(name, _, _)| *name == key)
            .and_then(|(_, _, value)| value)
    }
}

/// Which advanced override set an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideTarget {
    /// Unified settings for SRP and VDP
    Buttons,
    /// SRP-only settings (separate styling)
    Srp,
    /// VDP-only settings (separate styling)
    Vdp,
}

impl OverrideTarget {
    /// Identifier used in field ids
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buttons => "buttons",
            Self::Srp => "srp",
            Self::Vdp => "vdp",
        }
    }
}

impl std::fmt::Display for OverrideTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement-level overrides from the advanced styling step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedStyles {
    /// Style SRP and VDP independently
    pub separate_styling: bool,
    /// Unified settings, used when `separate_styling` is off
    pub buttons: StyleOverrides,
    /// SRP settings, used when `separate_styling` is on
    pub srp: StyleOverrides,
    /// VDP settings, used when `separate_styling` is on
    pub vdp: StyleOverrides,
}

impl AdvancedStyles {
    /// Overrides stored for a target
    #[must_use]
    pub const fn target(&self, target: OverrideTarget) -> &StyleOverrides {
        match target {
            OverrideTarget::Buttons => &self.buttons,
            OverrideTarget::Srp => &self.srp,
            OverrideTarget::Vdp => &self.vdp,
        }
    }

    /// Mutable overrides stored for a target
    pub fn target_mut(&mut self, target: OverrideTarget) -> &mut StyleOverrides {
        match target {
            OverrideTarget::Buttons => &mut self.buttons,
            OverrideTarget::Srp => &mut self.srp,
            OverrideTarget::Vdp => &mut self.vdp,
        }
    }

    /// Targets currently in effect
    #[must_use]
    pub fn active_targets(&self) -> &'static [OverrideTarget] {
        if self.separate_styling {
            &[OverrideTarget::Srp, OverrideTarget::Vdp]
        } else {
            &[OverrideTarget::Buttons]
        }
    }
}
