//! Validation of a saved wizard state

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use cta_builder::catalog::Catalog;
use cta_builder::config::BuilderConfig;
use cta_builder::generator::{generate_code, validate_code};
use cta_builder::state::{Step, WizardState};
use cta_builder::validation::validate_all;
use serde_json::json;

use super::{read_state, FAILURE, SUCCESS};

/// Problems of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Step checked
    pub step: Step,
    /// `field: message` lines
    pub errors: Vec<String>,
}

/// Check an exported state against every step's rules
pub struct ValidateCommand {
    settings: BuilderConfig,
    state_path: PathBuf,
    json: bool,
}

impl ValidateCommand {
    /// Create a new command instance
    #[must_use]
    pub fn new(settings: BuilderConfig, state_path: PathBuf, json: bool) -> Self {
        Self {
            settings,
            state_path,
            json,
        }
    }

    /// Per-step reports plus the structural check of the generated code
    #[must_use]
    pub fn check(state: &WizardState, catalog: &Catalog) -> (Vec<StepReport>, Vec<String>) {
        let errors = validate_all(state, catalog);
        let steps = Step::ALL
            .into_iter()
            .filter(|step| !step.is_last())
            .map(|step| StepReport {
                step,
                errors: errors.for_step(step).map(ToString::to_string).collect(),
            })
            .collect();

        let code = generate_code(state, catalog);
        let code_errors = if code.is_empty() {
            Vec::new()
        } else {
            validate_code(&code).errors
        };
        (steps, code_errors)
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be loaded or any check fails.
    pub fn execute(&self) -> Result<()> {
        let catalog = crate::settings::load_catalog(&self.settings)?;
        let state = read_state(&self.state_path)?;
        let (steps, code_errors) = Self::check(&state, &catalog);
        let problems = steps.iter().map(|report| report.errors.len()).sum::<usize>() + code_errors.len();

        if self.json {
            let report = json!({
                "valid": problems == 0,
                "steps": steps
                    .iter()
                    .map(|report| json!({
                        "step": report.step.number(),
                        "title": report.step.title(),
                        "errors": report.errors,
                    }))
                    .collect::<Vec<_>>(),
                "code": code_errors,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?
            );
        } else {
            Self::print_report(&steps, &code_errors);
        }

        if problems > 0 {
            anyhow::bail!("{problems} problem(s) found in {}", self.state_path.display());
        }
        Ok(())
    }

    fn print_report(steps: &[StepReport], code_errors: &[String]) {
        for report in steps {
            if report.errors.is_empty() {
                println!("{}{}", SUCCESS, style(report.step).green());
            } else {
                println!("{}{}", FAILURE, style(report.step).red().bold());
                for line in &report.errors {
                    println!("    {}", style(line).dim());
                }
            }
        }

        if code_errors.is_empty() {
            println!("{}{}", SUCCESS, style("Generated code").green());
        } else {
            println!("{}{}", FAILURE, style("Generated code").red().bold());
            for line in code_errors {
                println!("    {}", style(line).dim());
            }
        }
    }
}
