//! Catalog listing commands

use anyhow::Result;
use clap::Subcommand;
use console::style;
use cta_builder::catalog::Catalog;
use cta_builder::config::BuilderConfig;
use cta_builder::wizard::options::{self, SelectOption};

/// Catalog listing commands
#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List OEMs
    Oems,

    /// List CTA types
    Ctas,

    /// List the styles of an OEM palette
    Styles {
        /// OEM code
        oem: String,
    },

    /// List trees and departments of a category
    Trees {
        /// Tree category (e.g. sales)
        category: String,
    },
}

impl CatalogCommand {
    /// Rows printed for this listing
    ///
    /// # Errors
    ///
    /// Returns an error if an OEM palette cannot be loaded.
    pub fn rows(&self, catalog: &Catalog) -> Result<Vec<SelectOption>> {
        let rows = match self {
            Self::Oems => options::oem_options(catalog),
            Self::Ctas => options::cta_options(catalog),
            Self::Styles { oem } => options::style_options(&catalog.load_oem(oem)?)
                .into_iter()
                .filter(|option| option.value != options::CUSTOM_VALUE)
                .collect(),
            Self::Trees { category } => options::tree_options(catalog, category)
                .into_iter()
                .chain(options::department_options(catalog, category))
                .filter(|option| !option.is_placeholder() && option.value != options::CUSTOM_VALUE)
                .collect(),
        };
        Ok(rows)
    }

    const fn title(&self) -> &'static str {
        match self {
            Self::Oems => "OEMs",
            Self::Ctas => "CTA types",
            Self::Styles { .. } => "Styles",
            Self::Trees { .. } => "Trees and departments",
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn execute(&self, settings: &BuilderConfig) -> Result<()> {
        let catalog = crate::settings::load_catalog(settings)?;
        let rows = self.rows(&catalog)?;

        println!("{}", style(self.title()).bold().underlined());
        if rows.is_empty() {
            println!("  {}", style("(nothing to display)").dim());
        }
        let width = rows.iter().map(|row| row.value.len()).max().unwrap_or(0);
        for row in rows {
            let value = format!("{:<width$}", row.value);
            println!("  {}  {}", style(value).cyan(), row.label);
        }
        Ok(())
    }
}
