//! Per-step validation rules
//!
//! Each wizard step has a rule set over the [`WizardState`]. Failures are
//! reported per field id (`tree-<cta>`, `fontSize-buttons`, ...) so that the
//! messages can be shown next to the matching input.

mod error;
pub mod sliders;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::Catalog;
use crate::state::{CtaConfig, CustomColors, DepartmentChoice, StyleChoice, Step, WizardState};

pub use error::{ErrorKind, FieldError, ValidationErrors};
pub use sliders::{SliderSpec, SLIDERS};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("Invalid regex")
});

/// Whether a string is a `#rgb` or `#rrggbb` color
#[must_use]
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Validate one step
#[must_use]
pub fn validate_step(step: Step, state: &WizardState, catalog: &Catalog) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    match step {
        Step::OemSelection => {
            if state.oem().is_none() {
                errors.required(step, "oem-select", "Please select an OEM");
            }
        }
        Step::CtaSelection => {
            if state.selected_ctas().is_empty() {
                errors.required(step, "cta-checkboxes", "Please select at least one CTA");
            }
        }
        Step::TreeConfiguration => {
            for config in state.cta_configs() {
                validate_tree(config, catalog, &mut errors);
            }
        }
        Step::Styling => {
            for config in state.cta_configs() {
                validate_styling(config, &mut errors);
            }
        }
        Step::AdvancedStyling => validate_advanced(state, &mut errors),
        Step::Placement => {
            for config in state.cta_configs() {
                if !config.placement.is_placed() {
                    errors.required(
                        step,
                        format!("srp-{}", config.cta_type),
                        "Select at least one placement (SRP or VDP)",
                    );
                }
            }
        }
        Step::Preview => {}
    }

    if errors.has_errors() {
        tracing::debug!(step = step.number(), errors = errors.count(), "step invalid");
    }
    errors
}

/// Validate every step before the preview
#[must_use]
pub fn validate_all(state: &WizardState, catalog: &Catalog) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for step in Step::ALL.into_iter().filter(|step| !step.is_last()) {
        errors.merge(validate_step(step, state, catalog));
    }
    errors
}

fn validate_tree(config: &CtaConfig, catalog: &Catalog, errors: &mut ValidationErrors) {
    const STEP: Step = Step::TreeConfiguration;
    let cta_type = &config.cta_type;
    let Some(info) = catalog.cta_info(cta_type) else {
        return;
    };

    if info.requires_tree && !config.use_deeplink {
        let has_tree = config.tree.as_deref().is_some_and(|tree| !tree.trim().is_empty());
        if !has_tree {
            if config.use_custom_tree {
                errors.required(STEP, format!("custom-tree-{cta_type}"), "Please enter a tree ID");
            } else {
                errors.required(STEP, format!("tree-{cta_type}"), "Please select a tree");
            }
        }

        match config.department {
            None => errors.required(STEP, format!("dept-{cta_type}"), "Please select a department"),
            Some(DepartmentChoice::Custom(None)) => errors.required(
                STEP,
                format!("custom-dept-{cta_type}"),
                "Please enter a department number",
            ),
            Some(_) => {}
        }
    }

    let has_step = config
        .deeplink_step
        .as_deref()
        .is_some_and(|step| !step.trim().is_empty());
    if config.use_deeplink && info.requires_deeplink_step() && !has_step {
        errors.required(
            STEP,
            format!("deeplink-step-{cta_type}"),
            "Please select a deeplink step",
        );
    }
}

fn validate_styling(config: &CtaConfig, errors: &mut ValidationErrors) {
    let cta_type = &config.cta_type;

    let custom_label_blank = config
        .custom_label
        .as_deref()
        .is_none_or(|label| label.trim().is_empty());
    if config.use_custom_label && custom_label_blank {
        errors.required(
            Step::Styling,
            format!("custom-label-{cta_type}"),
            "Please enter a custom label",
        );
    }

    if let StyleChoice::Custom(colors) = &config.style {
        validate_colors(colors, cta_type, errors);
    }
    if config.has_separate_vdp_style() {
        if let Some(StyleChoice::Custom(colors)) = &config.vdp_style {
            validate_colors(colors, &format!("{cta_type}-vdp"), errors);
        }
    }
}

fn validate_colors(colors: &CustomColors, suffix: &str, errors: &mut ValidationErrors) {
    let fields = [
        ("custom-bg-text", "Background", &colors.background_color),
        ("custom-text-text", "Text", &colors.text_color),
        ("custom-border-text", "Border", &colors.border_color),
    ];
    for (prefix, name, value) in fields {
        if !is_valid_hex_color(value) {
            errors.push(FieldError::new(
                Step::Styling,
                ErrorKind::Format,
                format!("{prefix}-{suffix}"),
                format!("{name} color must be a hex color like #1a2b3c"),
            ));
        }
    }
}

fn validate_advanced(state: &WizardState, errors: &mut ValidationErrors) {
    let advanced = state.advanced();
    for &target in advanced.active_targets() {
        let overrides = advanced.target(target);
        for slider in &SLIDERS {
            let Some(value) = overrides.get(slider.property) else {
                continue;
            };
            if !slider.accepts(value) {
                errors.push(FieldError::new(
                    Step::AdvancedStyling,
                    ErrorKind::Range,
                    format!("{}-{target}", slider.property),
                    slider.range_message(),
                ));
            }
        }
    }
}
