//! Call-to-action builder for automotive dealer websites
//!
//! `cta-builder` holds everything behind the CTA wizard: the catalog of OEM
//! brand palettes and CTA types, the wizard state store, the style cascade,
//! the HTML/CSS code generator and the per-step validation rules.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cta_builder::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let catalog = Catalog::load_from_dir("./data")?;
//! let mut wizard = Wizard::new(catalog);
//!
//! wizard.choose_oem("toyota")?;
//! wizard.advance().map_err(|errors| anyhow::anyhow!("{errors}"))?;
//!
//! wizard.select_ctas(&["test_drive".to_string()])?;
//! let code = generate_code(wizard.state(), wizard.catalog());
//! println!("{code}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod maintenance;
pub mod observability;
pub mod state;
pub mod style;
pub mod validation;
pub mod wizard;

pub use error::{BuilderError, Result};

/// Commonly used types
pub mod prelude {
    pub use crate::catalog::{Catalog, CtaInfo, OemProfile, OemSummary, StyleDefinition};
    pub use crate::config::BuilderConfig;
    pub use crate::error::{BuilderError, Result};
    pub use crate::generator::{
        format_code, generate_code, generate_preview_html, render_live_preview, validate_code,
        CodeReport,
    };
    pub use crate::state::{
        AdvancedStyles, CtaConfig, CustomColors, DepartmentChoice, DeviceTarget, OverrideTarget,
        Placement, PlacementConfig, Step, StyleChoice, StyleOverrides, WizardState,
    };
    pub use crate::style::{resolve, ResolvedStyle};
    pub use crate::validation::{validate_all, validate_step, ValidationErrors};
    pub use crate::wizard::{NavigationStatus, Wizard};
}
