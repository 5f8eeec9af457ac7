//! Integration tests for the wizard over the bundled data
//!
//! Drives a wizard from the first step to the preview the way a front end
//! would, then round-trips the state through export and import.

use cta_builder::prelude::*;
use cta_builder::wizard::options;
use cta_builder::wizard::ProgressState;

fn data_dir() -> String {
    format!("{}/../data", env!("CARGO_MANIFEST_DIR"))
}

fn catalog() -> Catalog {
    Catalog::load_from_dir(data_dir()).unwrap()
}

/// Helper to reach the tree step with a set of CTAs
fn wizard_with(ctas: &[&str]) -> Wizard {
    let mut wizard = Wizard::new(catalog());
    wizard.choose_oem("ford").unwrap();
    assert_eq!(wizard.advance().unwrap(), Step::CtaSelection);

    let types: Vec<String> = ctas.iter().map(ToString::to_string).collect();
    wizard.select_ctas(&types).unwrap();
    assert_eq!(wizard.advance().unwrap(), Step::TreeConfiguration);
    wizard
}

#[test]
fn test_full_walkthrough() {
    let mut wizard = wizard_with(&["test_drive", "confirm_availability", "text_us"]);

    let errors = wizard.advance().unwrap_err();
    assert_eq!(
        errors.fields_with_errors(),
        vec![
            "tree-test_drive",
            "tree-confirm_availability",
            "custom-dept-confirm_availability"
        ]
    );

    let state = wizard.state_mut();
    state.update_cta_config("test_drive", |config| config.tree = Some("sales-tree-v2".into()));
    state.update_cta_config("confirm_availability", |config| {
        config.tree = Some("availability".into());
        config.department = Some(DepartmentChoice::Custom(Some(12)));
    });
    assert_eq!(wizard.advance().unwrap(), Step::Styling);

    wizard.state_mut().update_cta_config("text_us", |config| {
        config.style = StyleChoice::Custom(CustomColors {
            background_color: "#12".into(),
            ..CustomColors::default()
        });
    });
    let errors = wizard.advance().unwrap_err();
    assert!(errors.has_field_error("custom-bg-text-text_us"));

    wizard.state_mut().update_cta_config("text_us", |config| {
        config.style = StyleChoice::Custom(CustomColors {
            background_color: "#123456".into(),
            ..CustomColors::default()
        });
    });
    assert_eq!(wizard.advance().unwrap(), Step::AdvancedStyling);
    assert_eq!(wizard.advance().unwrap(), Step::Placement);
    assert_eq!(wizard.advance().unwrap(), Step::Preview);

    let status = wizard.status();
    assert_eq!(status.next_label, "Save This Config");
    assert!(!status.next_enabled);
    assert!(status.progress[..6].iter().all(|p| *p == ProgressState::Completed));
    assert!(!validate_all(wizard.state(), wizard.catalog()).has_errors());

    let code = generate_code(wizard.state(), wizard.catalog());
    assert!(validate_code(&code).is_valid);
    assert!(code.contains("dept: 12,"));
    assert!(code.contains(".demo-cta-custom-text-us {"));
}

#[test]
fn test_slider_out_of_range_blocks_advanced_step() {
    let mut wizard = wizard_with(&["chat_now"]);
    wizard.jump_to(Step::AdvancedStyling).unwrap();

    let patch = StyleOverrides {
        padding: Some("60px".into()),
        ..StyleOverrides::default()
    };
    wizard.state_mut().update_advanced_styles(OverrideTarget::Buttons, &patch);

    let errors = wizard.advance().unwrap_err();
    assert_eq!(
        errors.first_message(),
        Some("Padding must be between 4px and 40px")
    );

    // Separate styling checks the per-page targets instead
    wizard.state_mut().set_separate_styling(true);
    assert_eq!(wizard.advance().unwrap(), Step::Placement);
}

#[test]
fn test_export_import_resumes_wizard() {
    let mut wizard = wizard_with(&["eprice", "chat_now"]);
    wizard.state_mut().update_cta_config("chat_now", |config| {
        config.use_custom_label = true;
        config.custom_label = Some("Talk to Us".into());
        config.placement.device = DeviceTarget::DesktopOnly;
    });
    let exported = wizard.state().export_state().unwrap();

    let mut restored = WizardState::new();
    restored.import_state(&exported).unwrap();
    assert_eq!(restored.data(), wizard.state().data());

    let resumed = Wizard::with_state(catalog(), restored);
    let code = generate_code(resumed.state(), resumed.catalog());
    assert!(code.contains(">Talk to Us</a>"));
    assert!(code.contains("<div class=\"cn-desktop-only\"><div>"));
}

#[test]
fn test_import_rejects_malformed_state() {
    let mut wizard = wizard_with(&["eprice"]);
    let before = wizard.state().clone();
    assert!(wizard.state_mut().import_state("{ not json").is_err());
    assert_eq!(wizard.state(), &before);
}

#[test]
fn test_option_lists_from_bundled_data() {
    let catalog = catalog();

    let oems = options::oem_options(&catalog);
    assert_eq!(oems.len(), catalog.oems().len());
    assert!(oems.iter().any(|option| option.value == "ford" && option.label == "Ford"));

    let profile = catalog.load_oem("ford").unwrap();
    let styles = options::style_options(&profile);
    assert_eq!(styles[0].label, "Ford Blue");
    assert_eq!(styles[1].label, "Ford Outline");

    let steps = options::deeplink_step_options(catalog.cta_info("personalize_payment").unwrap());
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0].label, "-- Select Step --");
}
