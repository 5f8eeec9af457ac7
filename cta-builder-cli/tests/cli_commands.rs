//! Integration tests for the CLI commands
//!
//! Commands run against the bundled data; palette maintenance runs on a
//! temp copy of it.

use std::fs;
use std::path::{Path, PathBuf};

use cta_builder::catalog::Catalog;
use cta_builder::config::BuilderConfig;
use cta_builder::maintenance::STANDARD_FILLED;
use cta_builder::state::WizardState;
use cta_builder_cli_lib::commands::oem::OemTargets;
use cta_builder_cli_lib::commands::{read_state, write_file};
use cta_builder_cli_lib::{CatalogCommand, GenerateCommand, OemCommand, ValidateCommand};
use indicatif::ProgressBar;
use tempfile::TempDir;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../data")
}

fn settings() -> BuilderConfig {
    BuilderConfig {
        data_dir: data_dir(),
        ..BuilderConfig::default()
    }
}

fn catalog() -> Catalog {
    Catalog::load_from_dir(data_dir()).unwrap()
}

/// Helper to build a state for an OEM and CTA list
fn state_for(oem: &str, ctas: &[&str]) -> WizardState {
    let catalog = catalog();
    let mut state = WizardState::new();
    state.set_oem(oem, catalog.load_oem(oem).unwrap());
    let types: Vec<String> = ctas.iter().map(ToString::to_string).collect();
    state.set_selected_ctas(&types, &catalog).unwrap();
    state
}

/// Copy the data directory into a temp dir
fn data_copy() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let source = data_dir();
    fs::create_dir_all(temp_dir.path().join("oems")).unwrap();
    for file in ["oem-list.json", "cta-labels.json", "trees.json"] {
        fs::copy(source.join(file), temp_dir.path().join(file)).unwrap();
    }
    for entry in fs::read_dir(source.join("oems")).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), temp_dir.path().join("oems").join(entry.file_name())).unwrap();
    }
    temp_dir
}

fn targets(codes: &[&str], dry_run: bool) -> OemTargets {
    OemTargets {
        codes: codes.iter().map(ToString::to_string).collect(),
        all: false,
        dry_run,
    }
}

#[test]
fn test_state_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested/dir/state.json");
    let state = state_for("ford", &["chat_now"]);

    write_file(&path, &state.export_state().unwrap()).unwrap();
    let restored = read_state(&path).unwrap();
    assert_eq!(restored.data(), state.data());

    fs::write(&path, "{ not json").unwrap();
    let error = read_state(&path).unwrap_err();
    assert!(format!("{error:#}").contains("Invalid state file"));
}

#[test]
fn test_generate_renders_formatted_code() {
    let state = state_for("ford", &["chat_now"]);
    let command = GenerateCommand::new(settings(), PathBuf::from("state.json"), None, true, false);

    let output = command.render(&state, &catalog()).unwrap();
    assert!(output.code.starts_with("<style>"));
    assert!(!output.code.contains("\n\n\n"));
    assert!(output.code.contains("<!-- SRP CTAs -->"));
    let preview = output.preview.unwrap();
    assert!(preview.contains("<html"));
}

#[test]
fn test_generate_refuses_invalid_state() {
    let state = state_for("ford", &["test_drive"]);
    let command = GenerateCommand::new(settings(), PathBuf::from("state.json"), None, false, false);

    let error = command.render(&state, &catalog()).unwrap_err();
    assert!(error.to_string().contains("tree-test_drive"));

    let forced = GenerateCommand::new(settings(), PathBuf::from("state.json"), None, false, true);
    let output = forced.render(&state, &catalog()).unwrap();
    assert!(output.preview.is_none());

    let empty = forced.render(&WizardState::new(), &catalog()).unwrap_err();
    assert!(empty.to_string().contains("no OEM selected"));
}

#[test]
fn test_generate_execute_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let state_path = temp_dir.path().join("ford.json");
    let code_path = temp_dir.path().join("out/ford.html");
    write_file(&state_path, &state_for("ford", &["chat_now"]).export_state().unwrap()).unwrap();

    GenerateCommand::new(settings(), state_path, Some(code_path.clone()), false, false)
        .execute()
        .unwrap();
    let code = fs::read_to_string(code_path).unwrap();
    assert!(code.contains("</style>"));
}

#[test]
fn test_validate_reports_per_step() {
    let catalog = catalog();
    let (steps, code_errors) = ValidateCommand::check(&state_for("ford", &["chat_now"]), &catalog);
    assert_eq!(steps.len(), 6);
    assert!(steps.iter().all(|report| report.errors.is_empty()));
    assert!(code_errors.is_empty());

    let (steps, _) = ValidateCommand::check(&WizardState::new(), &catalog);
    assert_eq!(steps[0].errors, vec!["oem-select: Please select an OEM"]);
    assert_eq!(steps[1].errors, vec!["cta-checkboxes: Please select at least one CTA"]);
}

#[test]
fn test_catalog_rows() {
    let catalog = catalog();

    let oems = CatalogCommand::Oems.rows(&catalog).unwrap();
    let codes: Vec<&str> = oems.iter().map(|row| row.value.as_str()).collect();
    assert_eq!(codes, vec!["ford", "honda", "toyota"]);

    let styles = CatalogCommand::Styles { oem: "ford".into() }.rows(&catalog).unwrap();
    assert!(styles.iter().any(|row| row.label == "Ford Blue"));
    assert!(styles.iter().all(|row| row.label != "Custom"));

    let trees = CatalogCommand::Trees { category: "sales".into() }.rows(&catalog).unwrap();
    assert!(trees.iter().all(|row| !row.value.is_empty()));

    assert!(CatalogCommand::Styles { oem: "nope".into() }.rows(&catalog).is_err());
}

#[test]
fn test_oem_seed_dry_run_leaves_files() {
    let temp_dir = data_copy();
    let catalog = Catalog::load_from_dir(temp_dir.path()).unwrap();
    let command = OemCommand::Seed(targets(&["ford"], true));

    let reports = command.run(&catalog, &ProgressBar::hidden()).unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].changed);
    assert!(!catalog.load_oem("ford").unwrap().styles.contains_key(STANDARD_FILLED));
}

#[test]
fn test_oem_seed_saves_palette() {
    let temp_dir = data_copy();
    let catalog = Catalog::load_from_dir(temp_dir.path()).unwrap();
    let command = OemCommand::Seed(targets(&["ford", "honda"], false));

    let reports = command.run(&catalog, &ProgressBar::hidden()).unwrap();
    assert!(reports.iter().all(|report| report.changed));
    assert!(catalog.load_oem("honda").unwrap().styles.contains_key(STANDARD_FILLED));

    // Seeding again finds nothing to add
    let reports = command.run(&catalog, &ProgressBar::hidden()).unwrap();
    assert!(reports.iter().all(|report| !report.changed));
}

#[test]
fn test_oem_unknown_code() {
    let command = OemCommand::Prune(targets(&["delorean"], true));
    let error = command.codes(&catalog()).unwrap_err();
    assert!(error.to_string().contains("Unknown OEM: delorean"));

    let all = OemCommand::Promote(OemTargets {
        codes: Vec::new(),
        all: true,
        dry_run: true,
    });
    assert_eq!(all.codes(&catalog()).unwrap().len(), 3);
}
