//! OEM palette maintenance commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use cta_builder::catalog::Catalog;
use cta_builder::config::BuilderConfig;
use cta_builder::maintenance::{MaintenanceReport, MaintenanceTask};
use indicatif::{ProgressBar, ProgressStyle};

use super::SUCCESS;

/// Which palettes to process
#[derive(Debug, Clone, Args)]
pub struct OemTargets {
    /// OEM codes to process
    #[arg(required_unless_present = "all")]
    pub codes: Vec<String>,

    /// Process every OEM in the catalog
    #[arg(long, conflicts_with = "codes")]
    pub all: bool,

    /// Report changes without writing palette files
    #[arg(long)]
    pub dry_run: bool,
}

/// OEM palette maintenance commands
#[derive(Debug, Subcommand)]
pub enum OemCommand {
    /// Add the standard filled and outline styles
    Seed(OemTargets),

    /// Move the standard styles to the top and label them after the OEM
    Promote(OemTargets),

    /// Remove styles that repeat a standard style
    Prune(OemTargets),
}

impl OemCommand {
    const fn parts(&self) -> (MaintenanceTask, &OemTargets) {
        match self {
            Self::Seed(targets) => (MaintenanceTask::Seed, targets),
            Self::Promote(targets) => (MaintenanceTask::Promote, targets),
            Self::Prune(targets) => (MaintenanceTask::Prune, targets),
        }
    }

    /// OEM codes this run covers
    ///
    /// # Errors
    ///
    /// Returns an error if a requested code is not in the catalog.
    pub fn codes(&self, catalog: &Catalog) -> Result<Vec<String>> {
        let (_, targets) = self.parts();
        if targets.all {
            return Ok(catalog.oems().iter().map(|oem| oem.code.clone()).collect());
        }
        for code in &targets.codes {
            if !catalog.oems().iter().any(|oem| &oem.code == code) {
                anyhow::bail!("Unknown OEM: {code}. Run `cta-builder catalog oems` to list codes.");
            }
        }
        Ok(targets.codes.clone())
    }

    /// Run the task over the selected palettes
    ///
    /// # Errors
    ///
    /// Returns an error if a palette cannot be loaded or saved.
    pub fn run(&self, catalog: &Catalog, progress: &ProgressBar) -> Result<Vec<MaintenanceReport>> {
        let (task, targets) = self.parts();
        let mut reports = Vec::new();

        for code in self.codes(catalog)? {
            progress.set_message(format!("Processing {code}..."));
            let mut profile = catalog
                .load_oem(&code)
                .with_context(|| format!("Failed to load palette for {code}"))?;

            let report = task.apply(&mut profile);
            if report.changed && !targets.dry_run {
                catalog
                    .save_oem(&profile)
                    .with_context(|| format!("Failed to save palette for {code}"))?;
            }
            reports.push(report);
        }

        Ok(reports)
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or a palette cannot
    /// be processed.
    pub fn execute(&self, settings: &BuilderConfig) -> Result<()> {
        let catalog = crate::settings::load_catalog(settings)?;
        let (_, targets) = self.parts();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let reports = self.run(&catalog, &spinner);
        spinner.finish_and_clear();
        let reports = reports?;

        Self::print_reports(&reports);
        let changed = reports.iter().filter(|report| report.changed).count();
        if targets.dry_run {
            println!(
                "{}",
                style(format!("Dry run: {changed} palette(s) would change")).yellow()
            );
        } else {
            println!(
                "{}{}",
                SUCCESS,
                style(format!("{changed} palette(s) updated")).green().bold()
            );
        }
        Ok(())
    }

    fn print_reports(reports: &[MaintenanceReport]) {
        for report in reports {
            let name = if report.changed {
                style(&report.oem).cyan().bold()
            } else {
                style(&report.oem).dim()
            };
            println!("{name}:");
            if report.notes.is_empty() {
                println!("  {}", style("No changes").dim());
            }
            for note in &report.notes {
                println!("  {note}");
            }
        }
    }
}
