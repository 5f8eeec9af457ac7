//! Per-CTA configuration

use serde::{Deserialize, Serialize};

use super::advanced::StyleOverrides;
use crate::catalog::PERSONALIZE_PAYMENT;
use crate::style::sanitize_css_class_name;

/// Default sheen cycle length in seconds
pub const DEFAULT_SHEEN_INTERVAL_SECS: u32 = 15;

/// Page type a CTA can be placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Search Results Page
    Srp,
    /// Vehicle Detail Page
    Vdp,
}

impl Placement {
    /// Both placements, SRP first
    pub const ALL: [Self; 2] = [Self::Srp, Self::Vdp];

    /// Lowercase key (`srp` / `vdp`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Srp => "srp",
            Self::Vdp => "vdp",
        }
    }

    /// Uppercase title used in comments and headings
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Srp => "SRP",
            Self::Vdp => "VDP",
        }
    }

    /// Class carrying the placement override rule
    #[must_use]
    pub const fn override_class(self) -> &'static str {
        match self {
            Self::Srp => "convertnow-srp",
            Self::Vdp => "convertnow-vdp",
        }
    }

    /// Class of the section wrapper
    #[must_use]
    pub const fn wrapper_class(self) -> &'static str {
        match self {
            Self::Srp => "cn-srp-only",
            Self::Vdp => "cn-vdp-only",
        }
    }
}

/// Device targeting for a CTA
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceTarget {
    /// Shown everywhere
    #[default]
    All,
    /// Shown below the 768px breakpoint only
    MobileOnly,
    /// Shown from the 768px breakpoint up
    DesktopOnly,
}

impl DeviceTarget {
    /// Wrapper class, if the CTA is device restricted
    #[must_use]
    pub const fn wrapper_class(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::MobileOnly => Some("cn-mobile-only"),
            Self::DesktopOnly => Some("cn-desktop-only"),
        }
    }
}

/// Where a CTA is shown
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementConfig {
    /// Shown on the SRP
    pub srp: bool,
    /// Shown on the VDP
    pub vdp: bool,
    /// Device targeting
    #[serde(default)]
    pub device: DeviceTarget,
    /// Use the same style on both pages; otherwise `vdp_style` applies to VDP
    #[serde(default = "default_true")]
    pub same_style: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            srp: true,
            vdp: true,
            device: DeviceTarget::All,
            same_style: true,
        }
    }
}

impl PlacementConfig {
    /// Whether the CTA is shown on a placement
    #[must_use]
    pub const fn includes(&self, placement: Placement) -> bool {
        match placement {
            Placement::Srp => self.srp,
            Placement::Vdp => self.vdp,
        }
    }

    /// Whether the CTA is placed anywhere
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.srp || self.vdp
    }
}

const fn default_true() -> bool {
    true
}

/// Colors of a custom (non-OEM) style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomColors {
    /// Background color
    pub background_color: String,
    /// Text color
    pub text_color: String,
    /// Border color
    pub border_color: String,
}

impl Default for CustomColors {
    fn default() -> Self {
        Self {
            background_color: "#000000".to_string(),
            text_color: "#ffffff".to_string(),
            border_color: "#000000".to_string(),
        }
    }
}

/// Base style of a CTA
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum StyleChoice {
    /// One of the OEM palette styles, by key
    Oem(String),
    /// Custom colors
    Custom(CustomColors),
}

impl Default for StyleChoice {
    fn default() -> Self {
        Self::Oem("primary".to_string())
    }
}

/// Department used by the tree launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "number", rename_all = "camelCase")]
pub enum DepartmentChoice {
    /// Department from the catalog list
    Standard(u32),
    /// Department number typed by the user; `None` until entered
    Custom(Option<u32>),
}

impl DepartmentChoice {
    /// Department number, if known
    #[must_use]
    pub const fn number(self) -> Option<u32> {
        match self {
            Self::Standard(number) | Self::Custom(Some(number)) => Some(number),
            Self::Custom(None) => None,
        }
    }
}

/// Interactive effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectSettings {
    /// Periodic light sweep across the button
    pub sheen: bool,
    /// Length of one sheen cycle in seconds
    pub sheen_interval_secs: u32,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            sheen: false,
            sheen_interval_secs: DEFAULT_SHEEN_INTERVAL_SECS,
        }
    }
}

impl EffectSettings {
    /// Whether the sheen needs its own keyframes
    #[must_use]
    pub const fn has_custom_interval(&self) -> bool {
        self.sheen && self.sheen_interval_secs != DEFAULT_SHEEN_INTERVAL_SECS
    }
}

/// Configuration of one selected CTA
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaConfig {
    /// CTA type key
    #[serde(rename = "type")]
    pub cta_type: String,
    /// Selected predefined label
    pub label: String,
    /// Use `custom_label` instead of `label`
    #[serde(default)]
    pub use_custom_label: bool,
    /// Label typed by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,
    /// Jump into the external flow instead of launching a tree
    #[serde(default)]
    pub use_deeplink: bool,
    /// Deeplink step id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deeplink_step: Option<String>,
    /// Engagement tree id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<String>,
    /// The tree was typed rather than picked from the catalog
    #[serde(default)]
    pub use_custom_tree: bool,
    /// Department for the tree launcher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentChoice>,
    /// Base style (SRP, and VDP unless styled separately)
    #[serde(default)]
    pub style: StyleChoice,
    /// VDP style when `placement.same_style` is off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vdp_style: Option<StyleChoice>,
    /// Per-CTA typography and spacing overrides
    #[serde(default, skip_serializing_if = "StyleOverrides::is_empty")]
    pub overrides: StyleOverrides,
    /// Interactive effects
    #[serde(default)]
    pub effects: EffectSettings,
    /// Placement rules
    #[serde(default)]
    pub placement: PlacementConfig,
}

impl CtaConfig {
    /// Label written into the button
    ///
    /// A custom label only wins when it is non-empty.
    #[must_use]
    pub fn effective_label(&self) -> &str {
        match self.custom_label.as_deref() {
            Some(custom) if self.use_custom_label && !custom.trim().is_empty() => custom,
            _ => &self.label,
        }
    }

    /// Whether the VDP uses its own style
    #[must_use]
    pub const fn has_separate_vdp_style(&self) -> bool {
        !self.placement.same_style && self.vdp_style.is_some()
    }

    /// Style used on a placement
    #[must_use]
    pub fn style_for(&self, placement: Placement) -> &StyleChoice {
        match (placement, &self.vdp_style) {
            (Placement::Vdp, Some(vdp)) if !self.placement.same_style => vdp,
            _ => &self.style,
        }
    }

    /// Suffix of the `demo-cta-*` class used on a placement
    #[must_use]
    pub fn style_class(&self, placement: Placement) -> String {
        match self.style_for(placement) {
            StyleChoice::Oem(key) => sanitize_css_class_name(key),
            StyleChoice::Custom(_) => {
                let base = format!("custom-{}", sanitize_css_class_name(&self.cta_type));
                if placement == Placement::Vdp && self.has_separate_vdp_style() {
                    format!("{base}-vdp")
                } else {
                    base
                }
            }
        }
    }

    /// Class marking a CTA that carries its own override rule
    #[must_use]
    pub fn override_class(&self) -> Option<String> {
        (!self.overrides.is_empty())
            .then(|| format!("cn-cta-{}", sanitize_css_class_name(&self.cta_type)))
    }

    /// Department number for the tree launcher
    #[must_use]
    pub fn department_number(&self) -> Option<u32> {
        self.department.and_then(DepartmentChoice::number)
    }

    /// Whether this is the BuyNow CTA
    #[must_use]
    pub fn is_buy_now(&self) -> bool {
        self.cta_type == PERSONALIZE_PAYMENT
    }
}
