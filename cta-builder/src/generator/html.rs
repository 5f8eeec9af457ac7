//! SRP and VDP markup

use super::effects::sheen_class;
use crate::catalog::Catalog;
use crate::state::{CtaConfig, Placement, WizardState};

/// Escape text for HTML content and attribute values
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape text for a double-quoted attribute value, keeping single quotes
#[must_use]
pub fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Tree launcher handler for a CTA with a tree and numeric department
#[must_use]
pub fn launcher_onclick(tree: &str, department: u32) -> String {
    format!("CNPC.launch(this, {{ tree: '{tree}', dept: {department}, re_engage: true, vin: '{{vin}}'}})")
}

/// Classes of a CTA anchor on a placement
#[must_use]
pub fn cta_classes(config: &CtaConfig, placement: Placement) -> Vec<String> {
    let mut classes = vec![
        "demo-cta".to_string(),
        format!("demo-cta-{}", config.style_class(placement)),
        placement.override_class().to_string(),
    ];
    if let Some(class) = config.override_class() {
        classes.push(class);
    }
    if config.is_buy_now() && !config.use_deeplink {
        classes.push("cn-buynow-b1".to_string());
    }
    if config.use_deeplink {
        classes.push("cn-buy-now".to_string());
    }
    if config.effects.sheen {
        classes.push("cn-sheen-enabled".to_string());
        if config.effects.has_custom_interval() {
            classes.push(sheen_class(&config.cta_type));
        }
    }
    classes
}

/// Click handler of a CTA, if it gets one
///
/// BuyNow and deeplinked CTAs are driven by `data-vin` instead.
#[must_use]
pub fn cta_onclick(config: &CtaConfig, catalog: &Catalog) -> Option<String> {
    if config.is_buy_now() || config.use_deeplink {
        return None;
    }
    if let Some(pattern) = catalog
        .cta_info(&config.cta_type)
        .and_then(|info| info.onclick_pattern.as_ref())
    {
        return Some(pattern.clone());
    }

    let tree = config.tree.as_deref().filter(|tree| !tree.trim().is_empty())?;
    let department = config.department_number()?;
    Some(launcher_onclick(tree, department))
}

/// Attributes of a CTA anchor, each with its leading space
fn cta_attributes(config: &CtaConfig, placement: Placement, catalog: &Catalog) -> String {
    let mut attrs = format!(
        " href=\"#\" class=\"{}\" role=\"button\" tabindex=\"0\"",
        cta_classes(config, placement).join(" ")
    );

    if config.is_buy_now() || config.use_deeplink {
        attrs.push_str(" data-vin=\"{vin}\"");
    }
    if config.use_deeplink {
        if let Some(step) = config.deeplink_step.as_deref().filter(|step| !step.is_empty()) {
            attrs.push_str(&format!(" drtstp=\"{}\"", escape_attribute(step)));
        }
    }
    if let Some(onclick) = cta_onclick(config, catalog) {
        attrs.push_str(&format!(" onclick=\"{}\"", escape_attribute(&onclick)));
    }
    attrs
}

/// Markup of one placement section
pub(crate) fn html_section(placement: Placement, state: &WizardState, catalog: &Catalog) -> String {
    let mut html = format!(
        "<!-- {} CTAs -->\n<div class=\"{}\">\n",
        placement.title(),
        placement.wrapper_class()
    );

    for config in state.cta_configs().filter(|config| config.placement.includes(placement)) {
        let (open, close) = match config.placement.device.wrapper_class() {
            Some(class) => (format!("<div class=\"{class}\">"), "</div>"),
            None => (String::new(), ""),
        };

        html.push_str(&format!("    {open}<div>\n"));
        html.push_str(&format!(
            "        <a{}>{}</a>\n",
            cta_attributes(config, placement, catalog),
            escape_html(config.effective_label())
        ));
        html.push_str(&format!("    </div>{close}\n"));
    }

    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::state::{DepartmentChoice, DeviceTarget};

    fn state(ctas: &[&str]) -> (WizardState, Catalog) {
        let catalog = fixtures::catalog();
        let mut state = WizardState::new();
        state.set_oem("toyota", fixtures::toyota());
        let types: Vec<String> = ctas.iter().map(ToString::to_string).collect();
        state.set_selected_ctas(&types, &catalog).unwrap();
        (state, catalog)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & Jerry's <b>"), "Tom &amp; Jerry&#39;s &lt;b&gt;");
    }

    #[test]
    fn test_escape_attribute_keeps_single_quotes() {
        assert_eq!(escape_attribute("a 'b' \"c\" & d"), "a 'b' &quot;c&quot; &amp; d");
    }

    #[test]
    fn test_onclick_with_tree_and_department() {
        let (mut state, catalog) = state(&["test_drive"]);
        assert_eq!(cta_onclick(state.cta_config("test_drive").unwrap(), &catalog), None);

        state.update_cta_config("test_drive", |config| config.tree = Some("sales-tree-v2".into()));
        assert_eq!(
            cta_onclick(state.cta_config("test_drive").unwrap(), &catalog).as_deref(),
            Some("CNPC.launch(this, { tree: 'sales-tree-v2', dept: 1, re_engage: true, vin: '{vin}'})")
        );
    }

    #[test]
    fn test_custom_department_without_number_has_no_onclick() {
        let (mut state, catalog) = state(&["confirm_availability"]);
        state.update_cta_config("confirm_availability", |config| {
            config.tree = Some("availability".into());
        });
        let config = state.cta_config("confirm_availability").unwrap();
        assert_eq!(cta_onclick(config, &catalog), None);

        state.update_cta_config("confirm_availability", |config| {
            config.department = Some(DepartmentChoice::Custom(Some(7)));
        });
        let onclick = cta_onclick(state.cta_config("confirm_availability").unwrap(), &catalog).unwrap();
        assert!(onclick.contains("dept: 7,"));
    }

    #[test]
    fn test_catalog_pattern_wins() {
        let (state, catalog) = state(&["chat_now"]);
        let onclick = cta_onclick(state.cta_config("chat_now").unwrap(), &catalog).unwrap();
        assert!(onclick.contains("channel: 'chat'"));
    }

    #[test]
    fn test_buy_now_and_deeplink_classes() {
        let (mut state, _) = state(&["personalize_payment", "value_trade"]);
        let buy_now = cta_classes(state.cta_config("personalize_payment").unwrap(), Placement::Srp);
        assert_eq!(
            buy_now,
            vec!["demo-cta", "demo-cta-primary", "convertnow-srp", "cn-buynow-b1"]
        );

        state.update_cta_config("value_trade", |config| {
            config.use_deeplink = true;
            config.effects.sheen = true;
            config.effects.sheen_interval_secs = 9;
        });
        let trade = cta_classes(state.cta_config("value_trade").unwrap(), Placement::Vdp);
        assert_eq!(
            trade,
            vec![
                "demo-cta",
                "demo-cta-primary",
                "convertnow-vdp",
                "cn-buy-now",
                "cn-sheen-enabled",
                "cn-sheen-value-trade"
            ]
        );
    }

    #[test]
    fn test_section_skips_unplaced_and_wraps_devices() {
        let (mut state, catalog) = state(&["eprice", "chat_now"]);
        state.update_cta_config("eprice", |config| config.placement.device = DeviceTarget::MobileOnly);
        state.update_cta_config("chat_now", |config| config.placement.srp = false);

        let html = html_section(Placement::Srp, &state, &catalog);
        assert!(html.starts_with("<!-- SRP CTAs -->\n<div class=\"cn-srp-only\">\n"));
        assert!(html.contains("    <div class=\"cn-mobile-only\"><div>\n"));
        assert!(html.contains("    </div></div>\n"));
        assert!(!html.contains("Chat Now"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_deeplink_attributes() {
        let (mut state, catalog) = state(&["pre_qualify"]);
        state.update_cta_config("pre_qualify", |config| {
            config.use_deeplink = true;
            config.deeplink_step = Some("credit".into());
        });
        let html = html_section(Placement::Vdp, &state, &catalog);
        assert!(html.contains(
            "role=\"button\" tabindex=\"0\" data-vin=\"{vin}\" drtstp=\"credit\">Get Pre-Qualified</a>"
        ));
        assert!(!html.contains("onclick"));
    }
}
