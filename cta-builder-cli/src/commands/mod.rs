//! CLI command implementations

pub mod catalog;
pub mod generate;
pub mod oem;
pub mod validate;
pub mod wizard;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::Emoji;
use cta_builder::state::WizardState;
use cta_builder::validation::ValidationErrors;

pub use catalog::CatalogCommand;
pub use generate::GenerateCommand;
pub use oem::OemCommand;
pub use validate::ValidateCommand;
pub use wizard::WizardCommand;

pub(crate) static SUCCESS: Emoji = Emoji("✓ ", "√ ");
pub(crate) static FAILURE: Emoji = Emoji("✗ ", "x ");

/// Read an exported wizard state
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid export.
pub fn read_state(path: &Path) -> Result<WizardState> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;
    let mut state = WizardState::new();
    state
        .import_state(&json)
        .with_context(|| format!("Invalid state file: {}", path.display()))?;
    Ok(state)
}

/// Write a file, creating its parent directories
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// One `field: message` line per validation error
#[must_use]
pub fn error_lines(errors: &ValidationErrors) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}
