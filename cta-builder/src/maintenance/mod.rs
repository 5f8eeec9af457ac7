//! OEM palette maintenance
//!
//! Every palette carries two generated "standard" styles built from the OEM
//! brand color: a filled button and an outline button. The tasks here seed
//! them, move them to the top of the palette and prune hand-written styles
//! that merely repeat them.

use std::fmt;

use serde::Serialize;

use crate::catalog::{OemProfile, StyleDefinition};

/// Key of the filled standard style
pub const STANDARD_FILLED: &str = "oemTestFilled";

/// Key of the outline standard style
pub const STANDARD_OUTLINE: &str = "oemTestOutline";

/// Brand color used when a palette has none
pub const DEFAULT_BRAND_COLOR: &str = "#1d1d1d";

const WHITE: &str = "#ffffff";
const TRANSPARENT: [&str; 2] = ["transparent", "rgba(0,0,0,0)"];

/// Lighten or darken a hex color
///
/// A positive percent adds that share of 255 to every channel, a negative
/// one scales the channels down. The result is a lowercase `#rrggbb`, or
/// `None` when `hex` is not a `#rgb` / `#rrggbb` color.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn shade(hex: &str, percent: f64) -> Option<String> {
    let [r, g, b] = parse_hex(hex)?;
    let ratio = percent / 100.0;
    let adjust = |channel: u8| {
        let channel = f64::from(channel);
        let shifted = if percent >= 0.0 {
            255.0f64.mul_add(ratio, channel)
        } else {
            channel * (1.0 + ratio)
        };
        // Clamped to 0..=255 before the cast
        shifted.round().clamp(0.0, 255.0) as u8
    };
    Some(format!("#{:02x}{:02x}{:02x}", adjust(r), adjust(g), adjust(b)))
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let value = u32::from_str_radix(&expanded, 16).ok()?;
    let [_, r, g, b] = value.to_be_bytes();
    Some([r, g, b])
}

fn brand_color(profile: &OemProfile) -> String {
    profile
        .brand_color
        .as_deref()
        .filter(|color| parse_hex(color).is_some())
        .unwrap_or(DEFAULT_BRAND_COLOR)
        .to_lowercase()
}

fn standard_base(label: &str) -> StyleDefinition {
    StyleDefinition {
        label: label.to_string(),
        border_radius: Some("6px".into()),
        text_transform: Some("uppercase".into()),
        font_size: Some("16px".into()),
        font_weight: Some("600".into()),
        padding: Some("12px".into()),
        margin_top: Some("6px".into()),
        margin_bottom: Some("6px".into()),
        letter_spacing: Some("0.08em".into()),
        border_width: Some("2px".into()),
        transition: Some("all 0.3s ease".into()),
        ..StyleDefinition::default()
    }
}

/// Add the standard styles a palette is missing
///
/// Returns the keys that were added; existing standard styles are left as
/// they are.
pub fn seed_standard_styles(profile: &mut OemProfile) -> Vec<&'static str> {
    let brand = brand_color(profile);
    let mut added = Vec::new();

    if !profile.styles.contains_key(STANDARD_FILLED) {
        let style = StyleDefinition {
            background_color: Some(brand.clone()),
            text_color: Some(WHITE.into()),
            hover_background_color: shade(&brand, 15.0),
            hover_text_color: Some(WHITE.into()),
            border_color: Some(brand.clone()),
            ..standard_base("OEM 1 TEST")
        };
        profile.styles.insert(STANDARD_FILLED.to_string(), style);
        added.push(STANDARD_FILLED);
    }

    if !profile.styles.contains_key(STANDARD_OUTLINE) {
        let style = StyleDefinition {
            background_color: Some(TRANSPARENT[0].into()),
            text_color: Some(brand.clone()),
            hover_background_color: Some(brand.clone()),
            hover_text_color: Some(WHITE.into()),
            border_color: Some(brand),
            ..standard_base("OEM 2 TEST")
        };
        profile.styles.insert(STANDARD_OUTLINE.to_string(), style);
        added.push(STANDARD_OUTLINE);
    }

    if !added.is_empty() {
        tracing::info!(oem = %profile.code, added = ?added, "standard styles seeded");
    }
    added
}

/// Move the standard styles to the top and name them after the OEM
///
/// Returns `false` and leaves the palette alone unless both standard
/// styles exist.
pub fn promote_standard_styles(profile: &mut OemProfile) -> bool {
    if !has_standard_styles(profile) {
        tracing::debug!(oem = %profile.code, "standard styles missing, not promoted");
        return false;
    }

    for (index, (key, number)) in [(STANDARD_FILLED, 1), (STANDARD_OUTLINE, 2)].into_iter().enumerate() {
        if let Some(current) = profile.styles.get_index_of(key) {
            profile.styles.move_index(current, index);
        }
        if let Some(style) = profile.styles.get_mut(key) {
            style.label = format!("{} Standard {number}", profile.name);
        }
    }
    true
}

/// Why a style was pruned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PruneReason {
    /// Same colors as the filled standard style
    SimilarToStandard1,
    /// Transparent with the outline standard style's colors
    SimilarToStandard2,
}

impl fmt::Display for PruneReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SimilarToStandard1 => f.write_str("similar to Standard 1"),
            Self::SimilarToStandard2 => f.write_str("similar to Standard 2"),
        }
    }
}

/// A style removed by [`prune_similar_styles`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrunedStyle {
    /// Style key
    pub key: String,
    /// Style label
    pub label: String,
    /// Why it was removed
    pub reason: PruneReason,
}

fn same_color(a: Option<&String>, b: Option<&String>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a.eq_ignore_ascii_case(b))
}

fn label_mentions(style: &StyleDefinition, words: [&str; 2]) -> bool {
    let label = style.label.to_lowercase();
    words.iter().any(|word| label.contains(word))
}

fn similarity(style: &StyleDefinition, filled: &StyleDefinition, outline: &StyleDefinition) -> Option<PruneReason> {
    let like_filled = same_color(style.background_color.as_ref(), filled.background_color.as_ref())
        && same_color(style.text_color.as_ref(), filled.text_color.as_ref())
        && same_color(style.border_color.as_ref(), filled.border_color.as_ref())
        && label_mentions(style, ["filled", "primary"]);
    if like_filled {
        return Some(PruneReason::SimilarToStandard1);
    }

    let transparent = style
        .background_color
        .as_deref()
        .is_some_and(|color| TRANSPARENT.contains(&color));
    let like_outline = transparent
        && same_color(style.text_color.as_ref(), outline.text_color.as_ref())
        && same_color(style.border_color.as_ref(), outline.border_color.as_ref())
        && label_mentions(style, ["outline", "secondary"]);
    like_outline.then_some(PruneReason::SimilarToStandard2)
}

/// Remove styles that repeat one of the standard styles
///
/// Nothing is removed unless both standard styles exist.
pub fn prune_similar_styles(profile: &mut OemProfile) -> Vec<PrunedStyle> {
    let (Some(filled), Some(outline)) = (
        profile.styles.get(STANDARD_FILLED).cloned(),
        profile.styles.get(STANDARD_OUTLINE).cloned(),
    ) else {
        return Vec::new();
    };

    let pruned: Vec<PrunedStyle> = profile
        .styles
        .iter()
        .filter(|(key, _)| key.as_str() != STANDARD_FILLED && key.as_str() != STANDARD_OUTLINE)
        .filter_map(|(key, style)| {
            similarity(style, &filled, &outline).map(|reason| PrunedStyle {
                key: key.clone(),
                label: style.label.clone(),
                reason,
            })
        })
        .collect();

    for entry in &pruned {
        profile.styles.shift_remove(&entry.key);
        tracing::info!(oem = %profile.code, style = %entry.key, reason = %entry.reason, "style pruned");
    }
    pruned
}

fn has_standard_styles(profile: &OemProfile) -> bool {
    profile.styles.contains_key(STANDARD_FILLED) && profile.styles.contains_key(STANDARD_OUTLINE)
}

/// A maintenance pass over a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceTask {
    /// [`seed_standard_styles`]
    Seed,
    /// [`promote_standard_styles`]
    Promote,
    /// [`prune_similar_styles`]
    Prune,
}

/// Outcome of a [`MaintenanceTask`] on one palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceReport {
    /// OEM code
    pub oem: String,
    /// Task that ran
    pub task: MaintenanceTask,
    /// Whether the palette changed and needs saving
    pub changed: bool,
    /// One line per change, or why nothing happened
    pub notes: Vec<String>,
}

impl MaintenanceTask {
    /// Run the task on a palette
    pub fn apply(self, profile: &mut OemProfile) -> MaintenanceReport {
        let (changed, notes) = match self {
            Self::Seed => {
                let added = seed_standard_styles(profile);
                let notes = added.iter().map(|key| format!("Added {key}")).collect();
                (!added.is_empty(), notes)
            }
            Self::Promote => {
                if promote_standard_styles(profile) {
                    let note = format!(
                        "Moved {name} Standard 1 and {name} Standard 2 to top",
                        name = profile.name
                    );
                    (true, vec![note])
                } else {
                    (false, vec!["Skipped: missing standard styles".to_string()])
                }
            }
            Self::Prune => {
                if has_standard_styles(profile) {
                    let pruned = prune_similar_styles(profile);
                    let notes = pruned
                        .iter()
                        .map(|entry| format!("Removed \"{}\" ({})", entry.label, entry.reason))
                        .collect();
                    (!pruned.is_empty(), notes)
                } else {
                    (false, vec!["Skipped: missing standard styles".to_string()])
                }
            }
        };

        MaintenanceReport {
            oem: profile.code.clone(),
            task: self,
            changed,
            notes,
        }
    }
}
