//! Code generation from a saved wizard state

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use cta_builder::catalog::Catalog;
use cta_builder::config::BuilderConfig;
use cta_builder::generator::{format_code, generate_code, generate_preview_html, validate_code};
use cta_builder::state::WizardState;
use cta_builder::validation::validate_all;

use super::{error_lines, read_state, write_file, SUCCESS};

/// Generated artifacts of one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    /// HTML + CSS to paste into the dealer site
    pub code: String,
    /// Standalone preview document, when requested
    pub preview: Option<String>,
}

/// Generate HTML/CSS from an exported state
pub struct GenerateCommand {
    settings: BuilderConfig,
    state_path: PathBuf,
    output: Option<PathBuf>,
    preview: bool,
    force: bool,
}

impl GenerateCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `state_path` - File written by the wizard's export
    /// * `output` - Where to write the code; stdout when `None`
    #[must_use]
    pub fn new(
        settings: BuilderConfig,
        state_path: PathBuf,
        output: Option<PathBuf>,
        preview: bool,
        force: bool,
    ) -> Self {
        Self {
            settings,
            state_path,
            output,
            preview,
            force,
        }
    }

    /// Render the code for a state
    ///
    /// # Errors
    ///
    /// Returns an error if the state has validation errors (unless forced)
    /// or the preview template fails.
    pub fn render(&self, state: &WizardState, catalog: &Catalog) -> Result<GeneratedOutput> {
        let errors = validate_all(state, catalog);
        if errors.has_errors() && !self.force {
            anyhow::bail!(
                "State has {} validation error(s):\n  {}",
                errors.count(),
                error_lines(&errors).join("\n  ")
            );
        }

        let mut code = generate_code(state, catalog);
        if code.is_empty() {
            anyhow::bail!("State has no OEM selected; nothing to generate");
        }
        if self.settings.output.format_code {
            code = format_code(&code);
        }

        let report = validate_code(&code);
        if !report.is_valid {
            tracing::warn!(errors = ?report.errors, "generated code failed structural checks");
        }

        let preview = if self.preview || self.settings.output.write_preview {
            Some(generate_preview_html(state, catalog).context("Failed to render preview")?)
        } else {
            None
        };

        Ok(GeneratedOutput { code, preview })
    }

    /// Path of the preview document next to the code
    fn preview_path(&self) -> PathBuf {
        let stem = self
            .state_path
            .file_stem()
            .map_or_else(|| "cta".to_string(), |stem| stem.to_string_lossy().into_owned());
        self.settings
            .output
            .output_dir
            .join(format!("{stem}-preview.html"))
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the state or catalog cannot be loaded, the state
    /// is invalid or an output file cannot be written.
    pub fn execute(&self) -> Result<()> {
        let catalog = crate::settings::load_catalog(&self.settings)?;
        let state = read_state(&self.state_path)?;
        let output = self.render(&state, &catalog)?;

        match &self.output {
            Some(path) => {
                write_file(path, &output.code)?;
                eprintln!(
                    "{}{} {}",
                    SUCCESS,
                    style("Code written to").green().bold(),
                    style(path.display()).cyan()
                );
            }
            None => println!("{}", output.code),
        }

        if let Some(preview) = &output.preview {
            let path = self.preview_path();
            write_file(&path, preview)?;
            eprintln!(
                "{}{} {}",
                SUCCESS,
                style("Preview written to").green().bold(),
                style(path.display()).cyan()
            );
        }

        Ok(())
    }
}
