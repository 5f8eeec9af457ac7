//! `<style>` block generation

use indexmap::IndexMap;

use super::effects;
use crate::catalog::{OemProfile, StyleDefinition};
use crate::state::{CtaConfig, CustomColors, Placement, StyleChoice, StyleOverrides, WizardState};
use crate::style::{
    effective_overrides, sanitize_css_class_name, CUSTOM_BORDER_WIDTH, CUSTOM_TEXT_TRANSFORM,
    DEFAULT_TRANSITION,
};

const INDENT: &str = "    ";

const BASE_DECLARATIONS: [(&str, &str); 8] = [
    ("display", "inline-flex"),
    ("justify-content", "center"),
    ("align-items", "center"),
    ("text-align", "center"),
    ("text-decoration", "none"),
    ("cursor", "pointer"),
    ("border-style", "solid"),
    ("width", "100%"),
];

/// Append `selector { ... }` followed by a blank line
pub(crate) fn push_rule(css: &mut String, selector: &str, declarations: &[(&str, &str)], important: bool) {
    css.push_str(selector);
    css.push_str(" {\n");
    for (property, value) in declarations {
        css.push_str(INDENT);
        css.push_str(property);
        css.push_str(": ");
        css.push_str(value);
        if important {
            css.push_str(" !important");
        }
        css.push_str(";\n");
    }
    css.push_str("}\n\n");
}

/// Render the complete `<style>` block
pub(crate) fn generate_css(state: &WizardState, profile: &OemProfile) -> String {
    let configs: Vec<&CtaConfig> = state.cta_configs().collect();
    let mut css = String::from("<style>\n");

    push_rule(&mut css, ".demo-cta", &BASE_DECLARATIONS, false);

    for (class, style) in oem_styles_in_use(&configs, profile) {
        push_oem_style(&mut css, &class, style);
    }

    for config in &configs {
        for placement in Placement::ALL {
            if let Some(colors) = custom_colors_for(config, placement) {
                push_custom_style(&mut css, &config.style_class(placement), colors);
            }
        }
    }

    for placement in Placement::ALL {
        let overrides = effective_overrides(state.advanced(), placement);
        push_rule(
            &mut css,
            &format!(".{}", placement.override_class()),
            &overrides.declarations(),
            true,
        );
    }

    for config in &configs {
        if let Some(class) = config.override_class() {
            push_cta_override(&mut css, &class, &config.overrides);
        }
    }

    if configs.iter().any(|config| config.use_deeplink) {
        push_rule(&mut css, ".cn-bn1", &[("display", "none")], true);
    }

    if configs.iter().any(|config| config.effects.sheen) {
        css.push_str(&effects::sheen_base_css());
        for config in configs.iter().filter(|config| config.effects.has_custom_interval()) {
            css.push_str(&effects::sheen_interval_css(
                &config.cta_type,
                config.effects.sheen_interval_secs,
            ));
        }
    }

    push_device_visibility(&mut css);
    css.push_str("</style>");
    css
}

/// Distinct OEM style classes in first-use order with their definitions
fn oem_styles_in_use<'a>(
    configs: &[&CtaConfig],
    profile: &'a OemProfile,
) -> IndexMap<String, &'a StyleDefinition> {
    let mut styles = IndexMap::new();
    for config in configs {
        let choices = [
            Some(&config.style),
            config
                .vdp_style
                .as_ref()
                .filter(|_| config.has_separate_vdp_style()),
        ];
        for choice in choices.into_iter().flatten() {
            let StyleChoice::Oem(key) = choice else {
                continue;
            };
            let class = sanitize_css_class_name(key);
            if styles.contains_key(&class) {
                continue;
            }
            match profile.style(key) {
                Some(style) => {
                    styles.insert(class, style);
                }
                None => tracing::warn!(style = %key, oem = %profile.code, "OEM has no style to emit"),
            }
        }
    }
    styles
}

fn custom_colors_for(config: &CtaConfig, placement: Placement) -> Option<&CustomColors> {
    if placement == Placement::Vdp && !config.has_separate_vdp_style() {
        return None;
    }
    match config.style_for(placement) {
        StyleChoice::Custom(colors) => Some(colors),
        StyleChoice::Oem(_) => None,
    }
}

fn push_oem_style(css: &mut String, class: &str, style: &StyleDefinition) {
    let selector = format!(".demo-cta-{class}");
    push_rule(css, &selector, &style.css_declarations(), false);

    let mut hover = Vec::with_capacity(2);
    if let Some(background) = style.hover_background_color.as_deref() {
        hover.push(("background-color", background));
    }
    if let Some(color) = style.hover_text_color.as_deref() {
        hover.push(("color", color));
    }
    push_rule(css, &format!("{selector}:hover"), &hover, false);
}

fn push_custom_style(css: &mut String, class: &str, colors: &CustomColors) {
    let selector = format!(".demo-cta-{class}");
    push_rule(
        css,
        &selector,
        &[
            ("background-color", colors.background_color.as_str()),
            ("color", colors.text_color.as_str()),
            ("border-color", colors.border_color.as_str()),
            ("border-width", CUSTOM_BORDER_WIDTH),
            ("text-transform", CUSTOM_TEXT_TRANSFORM),
            ("transition", DEFAULT_TRANSITION),
        ],
        false,
    );
    push_rule(
        css,
        &format!("{selector}:hover"),
        &[
            ("background-color", colors.text_color.as_str()),
            ("color", colors.background_color.as_str()),
        ],
        false,
    );
}

fn push_cta_override(css: &mut String, class: &str, overrides: &StyleOverrides) {
    push_rule(css, &format!(".demo-cta.{class}"), &overrides.declarations(), true);
}

fn push_device_visibility(css: &mut String) {
    css.push_str("/* Mobile-only visibility */\n");
    push_rule(css, ".cn-mobile-only", &[("display", "block")], false);
    push_media_rule(css, ".cn-mobile-only", "none");

    css.push_str("/* Desktop-only visibility */\n");
    push_rule(css, ".cn-desktop-only", &[("display", "none")], false);
    push_media_rule(css, ".cn-desktop-only", "block");
}

fn push_media_rule(css: &mut String, selector: &str, display: &str) {
    css.push_str("@media (min-width: 768px) {\n");
    css.push_str(&format!(
        "{INDENT}{selector} {{\n{INDENT}{INDENT}display: {display} !important;\n{INDENT}}}\n"
    ));
    css.push_str("}\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    fn state(ctas: &[&str]) -> WizardState {
        let mut state = WizardState::new();
        state.set_oem("toyota", fixtures::toyota());
        let types: Vec<String> = ctas.iter().map(ToString::to_string).collect();
        state.set_selected_ctas(&types, &fixtures::catalog()).unwrap();
        state
    }

    #[test]
    fn test_push_rule_format() {
        let mut css = String::new();
        push_rule(&mut css, ".x", &[("color", "red"), ("padding", "4px")], true);
        assert_eq!(css, ".x {\n    color: red !important;\n    padding: 4px !important;\n}\n\n");
    }

    #[test]
    fn test_each_oem_style_emitted_once() {
        let mut state = state(&["test_drive", "eprice", "chat_now"]);
        state.update_cta_config("chat_now", |config| {
            config.style = StyleChoice::Oem("redOutline".into());
        });
        let css = generate_css(&state, &fixtures::toyota());

        assert_eq!(css.matches(".demo-cta-primary {").count(), 1);
        assert_eq!(css.matches(".demo-cta-redoutline:hover {").count(), 1);
        let primary = css.find(".demo-cta-primary {").unwrap();
        let outline = css.find(".demo-cta-redoutline {").unwrap();
        assert!(primary < outline);
    }

    #[test]
    fn test_unknown_style_key_keeps_its_class() {
        let mut state = state(&["eprice"]);
        state.update_cta_config("eprice", |config| config.style = StyleChoice::Oem("gold".into()));
        let css = generate_css(&state, &fixtures::toyota());
        assert!(css.contains(".demo-cta-gold {\n    background-color: #eb0a1e;"));
    }

    #[test]
    fn test_separate_vdp_custom_style() {
        let mut state = state(&["eprice"]);
        state.update_cta_config("eprice", |config| {
            config.placement.same_style = false;
            config.vdp_style = Some(StyleChoice::Custom(CustomColors::default()));
        });
        let css = generate_css(&state, &fixtures::toyota());
        assert!(css.contains(".demo-cta-custom-eprice-vdp {"));
        assert!(!css.contains(".demo-cta-custom-eprice {"));
        assert!(css.contains(".demo-cta-custom-eprice-vdp:hover {\n    background-color: #ffffff;\n    color: #000000;\n}"));
    }

    #[test]
    fn test_placement_rules_always_present() {
        let css = generate_css(&state(&["eprice"]), &fixtures::toyota());
        assert!(css.contains(".convertnow-srp {\n}\n\n.convertnow-vdp {\n}\n\n"));
        assert!(!css.contains(".cn-bn1"));
        assert!(!css.contains("cn-sheen"));
        assert!(css.ends_with("}\n\n</style>"));
    }

    #[test]
    fn test_cta_override_rule() {
        let mut state = state(&["test_drive"]);
        state.update_cta_config("test_drive", |config| {
            config.overrides.margin_bottom = Some("10px".into());
        });
        let css = generate_css(&state, &fixtures::toyota());
        assert!(css.contains(".demo-cta.cn-cta-test-drive {\n    margin-bottom: 10px !important;\n}"));
    }

    #[test]
    fn test_media_rule_format() {
        let mut css = String::new();
        push_media_rule(&mut css, ".cn-mobile-only", "none");
        assert_eq!(
            css,
            "@media (min-width: 768px) {\n    .cn-mobile-only {\n        display: none !important;\n    }\n}\n\n"
        );
    }
}
