//! Style cascade
//!
//! A CTA's effective style on a placement is resolved property by property:
//!
//! 1. the CTA's own overrides,
//! 2. the advanced override set in effect for the placement,
//! 3. the base style (OEM palette entry or custom colors),
//! 4. a fixed fallback.
//!
//! Colors never take part in the override layers; they always come from the
//! base style.

use serde::Serialize;

use crate::catalog::{OemProfile, StyleDefinition};
use crate::state::{
    AdvancedStyles, CtaConfig, CustomColors, Placement, StyleChoice, StyleOverrides, TextWrap,
    WizardState,
};

/// Border width of custom-color buttons
pub const CUSTOM_BORDER_WIDTH: &str = "2px";
/// Text transform of custom-color buttons
pub const CUSTOM_TEXT_TRANSFORM: &str = "none";
/// Transition used by custom-color buttons and as fallback
pub const DEFAULT_TRANSITION: &str = "all 0.3s ease";

/// Lowercase a name and replace anything outside `[a-z0-9-]` with `-`
#[must_use]
pub fn sanitize_css_class_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '-',
        })
        .collect()
}

/// Advanced override set that applies to a placement
#[must_use]
pub const fn effective_overrides(advanced: &AdvancedStyles, placement: Placement) -> &StyleOverrides {
    if !advanced.separate_styling {
        return &advanced.buttons;
    }
    match placement {
        Placement::Srp => &advanced.srp,
        Placement::Vdp => &advanced.vdp,
    }
}

/// Style synthesized from custom colors
///
/// Hover swaps the background and text colors.
#[must_use]
pub fn custom_style_definition(colors: &CustomColors) -> StyleDefinition {
    StyleDefinition {
        label: "Custom".to_string(),
        background_color: Some(colors.background_color.clone()),
        text_color: Some(colors.text_color.clone()),
        hover_background_color: Some(colors.text_color.clone()),
        hover_text_color: Some(colors.background_color.clone()),
        border_color: Some(colors.border_color.clone()),
        border_width: Some(CUSTOM_BORDER_WIDTH.to_string()),
        text_transform: Some(CUSTOM_TEXT_TRANSFORM.to_string()),
        transition: Some(DEFAULT_TRANSITION.to_string()),
        ..StyleDefinition::default()
    }
}

/// Base style of a CTA on a placement
///
/// An unknown OEM style key falls back to `primary`; an empty palette gives
/// an empty style.
#[must_use]
pub fn base_style(cta: &CtaConfig, placement: Placement, profile: Option<&OemProfile>) -> StyleDefinition {
    match cta.style_for(placement) {
        StyleChoice::Oem(key) => profile
            .and_then(|profile| profile.style(key))
            .cloned()
            .unwrap_or_default(),
        StyleChoice::Custom(colors) => custom_style_definition(colors),
    }
}

/// Fully resolved style of a CTA on one placement
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub background_color: String,
    pub text_color: String,
    pub border_color: String,
    pub hover_background_color: String,
    pub hover_text_color: String,
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
    pub letter_spacing: String,
    pub text_transform: String,
    pub border_radius: String,
    pub border_width: String,
    pub margin_top: String,
    pub margin_bottom: String,
    pub padding: String,
    pub white_space: String,
    pub transition: String,
}

mod fallback {
    pub const BACKGROUND_COLOR: &str = "transparent";
    pub const TEXT_COLOR: &str = "inherit";
    pub const BORDER_COLOR: &str = "currentColor";
    pub const FONT_FAMILY: &str = "inherit";
    pub const FONT_SIZE: &str = "16px";
    pub const FONT_WEIGHT: &str = "600";
    pub const LINE_HEIGHT: &str = "1.4";
    pub const LETTER_SPACING: &str = "0px";
    pub const TEXT_TRANSFORM: &str = "none";
    pub const BORDER_RADIUS: &str = "4px";
    pub const BORDER_WIDTH: &str = "2px";
    pub const MARGIN_TOP: &str = "6px";
    pub const MARGIN_BOTTOM: &str = "6px";
    pub const PADDING: &str = "12px";
}

/// Resolve a style from its layers, highest precedence first
#[must_use]
pub fn resolve_layers(
    cta_overrides: &StyleOverrides,
    placement_overrides: &StyleOverrides,
    base: &StyleDefinition,
) -> ResolvedStyle {
    let pick = |cta: &Option<String>, placement: &Option<String>, base: &Option<String>, default: &str| {
        [cta, placement, base]
            .into_iter()
            .find_map(|value| value.as_deref().filter(|value| !value.trim().is_empty()))
            .unwrap_or(default)
            .to_string()
    };
    let color = |value: &Option<String>, default: &str| value.clone().unwrap_or_else(|| default.to_string());

    let background_color = color(&base.background_color, fallback::BACKGROUND_COLOR);
    let text_color = color(&base.text_color, fallback::TEXT_COLOR);
    let wrap = cta_overrides.wrap().or(placement_overrides.wrap());

    ResolvedStyle {
        hover_background_color: color(&base.hover_background_color, background_color.as_str()),
        hover_text_color: color(&base.hover_text_color, text_color.as_str()),
        border_color: color(&base.border_color, fallback::BORDER_COLOR),
        font_family: pick(
            &cta_overrides.font_family,
            &placement_overrides.font_family,
            &base.font_family,
            fallback::FONT_FAMILY,
        ),
        font_size: pick(
            &cta_overrides.font_size,
            &placement_overrides.font_size,
            &base.font_size,
            fallback::FONT_SIZE,
        ),
        font_weight: pick(
            &cta_overrides.font_weight,
            &placement_overrides.font_weight,
            &base.font_weight,
            fallback::FONT_WEIGHT,
        ),
        line_height: pick(
            &cta_overrides.line_height,
            &placement_overrides.line_height,
            &base.line_height,
            fallback::LINE_HEIGHT,
        ),
        letter_spacing: pick(
            &cta_overrides.letter_spacing,
            &placement_overrides.letter_spacing,
            &base.letter_spacing,
            fallback::LETTER_SPACING,
        ),
        text_transform: pick(
            &cta_overrides.text_transform,
            &placement_overrides.text_transform,
            &base.text_transform,
            fallback::TEXT_TRANSFORM,
        ),
        border_radius: pick(
            &cta_overrides.border_radius,
            &placement_overrides.border_radius,
            &base.border_radius,
            fallback::BORDER_RADIUS,
        ),
        border_width: pick(
            &cta_overrides.border_width,
            &placement_overrides.border_width,
            &base.border_width,
            fallback::BORDER_WIDTH,
        ),
        margin_top: pick(
            &cta_overrides.margin_top,
            &placement_overrides.margin_top,
            &base.margin_top,
            fallback::MARGIN_TOP,
        ),
        margin_bottom: pick(
            &cta_overrides.margin_bottom,
            &placement_overrides.margin_bottom,
            &base.margin_bottom,
            fallback::MARGIN_BOTTOM,
        ),
        padding: pick(
            &cta_overrides.padding,
            &placement_overrides.padding,
            &base.padding,
            fallback::PADDING,
        ),
        white_space: match wrap {
            Some(TextWrap::Nowrap) => TextWrap::Nowrap.white_space(),
            _ => TextWrap::Wrap.white_space(),
        }
        .to_string(),
        transition: base
            .transition
            .clone()
            .unwrap_or_else(|| DEFAULT_TRANSITION.to_string()),
        background_color,
        text_color,
    }
}

/// Effective style of a CTA on a placement
#[must_use]
pub fn resolve(cta: &CtaConfig, placement: Placement, state: &WizardState) -> ResolvedStyle {
    let base = base_style(cta, placement, state.oem_profile());
    resolve_layers(
        &cta.overrides,
        effective_overrides(state.advanced(), placement),
        &base,
    )
}
