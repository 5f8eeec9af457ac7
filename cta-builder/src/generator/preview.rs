//! Preview rendering
//!
//! Two previews exist: a standalone HTML document around the generated code,
//! and a live fragment with inline styles that shows the resolved cascade
//! without any external CSS.

use handlebars::Handlebars;
use serde_json::json;

use super::effects::{sheen_base_css, sheen_class, sheen_interval_css};
use super::generate_code;
use super::html::{escape_attribute, escape_html};
use crate::catalog::{Catalog, OemProfile};
use crate::error::Result;
use crate::state::{CtaConfig, Placement, StyleOverrides, WizardState};
use crate::style::{effective_overrides, resolve, resolve_layers, ResolvedStyle};

const PREVIEW_DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
</head>
<body>
    <div style="max-width: 400px; margin: 50px auto; padding: 20px; background: #f5f5f5;">
        {{code}}
    </div>
</body>
</html>
"#;

const NO_OEM_MESSAGE: &str = r#"<p class="text-muted">Select an OEM to see preview</p>"#;
const NO_PLACEMENT_MESSAGE: &str =
    r#"<p class="text-muted">Enable SRP or VDP placement to see CTAs here.</p>"#;

/// Standalone HTML document showing the generated code
///
/// # Errors
///
/// Returns [`BuilderError::Template`](crate::BuilderError::Template) if the
/// document template fails to render.
pub fn generate_preview_html(state: &WizardState, catalog: &Catalog) -> Result<String> {
    let mut handlebars = Handlebars::new();

    // The code is markup and must be inserted verbatim
    handlebars.register_escape_fn(handlebars::no_escape);

    let title = state
        .oem_profile()
        .map_or_else(|| "CTA Preview".to_string(), |profile| format!("{} CTA Preview", profile.name));
    let context = json!({
        "title": escape_html(&title),
        "code": generate_code(state, catalog),
    });

    Ok(handlebars.render_template(PREVIEW_DOCUMENT, &context)?)
}

/// Inline `style` attribute value for a resolved style
#[must_use]
pub fn inline_button_style(style: &ResolvedStyle, sheen: bool) -> String {
    let border = format!("{} solid {}", style.border_width, style.border_color);
    let mut declarations: Vec<(&str, &str)> = vec![
        ("display", "inline-flex"),
        ("width", "100%"),
        ("justify-content", "center"),
        ("align-items", "center"),
        ("text-align", "center"),
        ("background-color", style.background_color.as_str()),
        ("color", style.text_color.as_str()),
        ("border", border.as_str()),
        ("border-radius", style.border_radius.as_str()),
        ("text-transform", style.text_transform.as_str()),
        ("font-size", style.font_size.as_str()),
        ("font-weight", style.font_weight.as_str()),
        ("line-height", style.line_height.as_str()),
        ("letter-spacing", style.letter_spacing.as_str()),
        ("padding", style.padding.as_str()),
        ("margin-top", style.margin_top.as_str()),
        ("margin-bottom", style.margin_bottom.as_str()),
        ("font-family", style.font_family.as_str()),
        ("white-space", style.white_space.as_str()),
        ("transition", style.transition.as_str()),
        ("text-decoration", "none"),
        ("cursor", "pointer"),
    ];
    if sheen {
        declarations.push(("position", "relative"));
        declarations.push(("overflow", "hidden"));
    }

    declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn preview_anchor(classes: &str, style: &str, label: &str) -> String {
    format!(
        "<a class=\"{classes}\" href=\"#\" style=\"{}\">{}</a>",
        escape_attribute(style),
        escape_html(label)
    )
}

fn sample_button(state: &WizardState, profile: &OemProfile) -> String {
    let base = profile.primary().cloned().unwrap_or_default();
    let style = resolve_layers(
        &StyleOverrides::default(),
        effective_overrides(state.advanced(), Placement::Srp),
        &base,
    );
    preview_anchor(
        "demo-cta demo-cta-primary",
        &inline_button_style(&style, false),
        &format!("Sample {} Button", profile.name),
    )
}

fn preview_button(config: &CtaConfig, placement: Placement, state: &WizardState) -> String {
    let mut classes = format!("demo-cta demo-cta-{}", config.style_class(placement));
    if config.effects.sheen {
        classes.push_str(" cn-sheen-enabled");
        if config.effects.has_custom_interval() {
            classes.push(' ');
            classes.push_str(&sheen_class(&config.cta_type));
        }
    }

    let style = resolve(config, placement, state);
    format!(
        "<div>{}</div>",
        preview_anchor(
            &classes,
            &inline_button_style(&style, config.effects.sheen),
            config.effective_label()
        )
    )
}

fn sheen_styles(configs: &[&CtaConfig]) -> Option<String> {
    if !configs.iter().any(|config| config.effects.sheen) {
        return None;
    }
    let mut css = sheen_base_css();
    for config in configs.iter().filter(|config| config.effects.has_custom_interval()) {
        css.push_str(&sheen_interval_css(
            &config.cta_type,
            config.effects.sheen_interval_secs,
        ));
    }
    Some(format!("<style>\n{css}</style>"))
}

/// Inline-styled preview fragment of the current state
#[must_use]
pub fn render_live_preview(state: &WizardState) -> String {
    let Some(profile) = state.oem_profile() else {
        return NO_OEM_MESSAGE.to_string();
    };

    let configs: Vec<&CtaConfig> = state.cta_configs().collect();
    if configs.is_empty() {
        return sample_button(state, profile);
    }

    let mut sections = Vec::new();
    for placement in Placement::ALL {
        let buttons: Vec<String> = configs
            .iter()
            .filter(|config| config.placement.includes(placement))
            .map(|config| preview_button(config, placement, state))
            .collect();
        if buttons.is_empty() {
            continue;
        }
        sections.push(format!(
            "<div class=\"preview-section\">\n<div class=\"preview-section-title\">{} Buttons</div>\n<div>\n{}\n</div>\n</div>",
            placement.title(),
            buttons.join("\n")
        ));
    }

    if sections.is_empty() {
        return NO_PLACEMENT_MESSAGE.to_string();
    }
    if let Some(styles) = sheen_styles(&configs) {
        sections.insert(0, styles);
    }
    sections.join("\n")
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
    fn test_preview_document_embeds_code() {
        let catalog = fixtures::catalog();
        let state = state(&["eprice"]);
        let html = generate_preview_html(&state, &catalog).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Toyota CTA Preview</title>"));
        assert!(html.contains("<style>\n.demo-cta {"));
        assert!(html.contains("<div class=\"cn-srp-only\">"));
    }

    #[test]
    fn test_live_preview_placeholder_and_sample() {
        assert_eq!(render_live_preview(&WizardState::new()), NO_OEM_MESSAGE);

        let mut state = WizardState::new();
        state.set_oem("toyota", fixtures::toyota());
        let sample = render_live_preview(&state);
        assert!(sample.contains(">Sample Toyota Button</a>"));
        assert!(sample.contains("background-color: #eb0a1e;"));
    }

    #[test]
    fn test_live_preview_sections() {
        let mut state = state(&["eprice", "chat_now"]);
        state.update_cta_config("chat_now", |config| config.placement.srp = false);

        let preview = render_live_preview(&state);
        let srp = preview.find("SRP Buttons").unwrap();
        let vdp = preview.find("VDP Buttons").unwrap();
        assert!(srp < vdp);
        assert_eq!(preview.matches(">Chat Now</a>").count(), 1);
        assert_eq!(preview.matches(">Get E-Price</a>").count(), 2);
    }

    #[test]
    fn test_live_preview_without_placements() {
        let mut state = state(&["eprice"]);
        state.update_cta_config("eprice", |config| {
            config.placement.srp = false;
            config.placement.vdp = false;
        });
        assert_eq!(render_live_preview(&state), NO_PLACEMENT_MESSAGE);
    }

    #[test]
    fn test_live_preview_sheen() {
        let mut state = state(&["eprice"]);
        state.update_cta_config("eprice", |config| {
            config.effects.sheen = true;
            config.effects.sheen_interval_secs = 6;
        });
        let preview = render_live_preview(&state);
        assert!(preview.starts_with("<style>\n"));
        assert!(preview.contains("@keyframes cn-sheen-cycle-eprice"));
        assert!(preview.contains("cn-sheen-enabled cn-sheen-eprice"));
        assert!(preview.contains("overflow: hidden;"));
    }

    #[test]
    fn test_inline_style_border_shorthand() {
        let state = state(&["eprice"]);
        let style = resolve(state.cta_config("eprice").unwrap(), Placement::Srp, &state);
        let inline = inline_button_style(&style, false);
        assert!(inline.contains("border: 2px solid #eb0a1e;"));
        assert!(!inline.contains("position"));
    }
}
