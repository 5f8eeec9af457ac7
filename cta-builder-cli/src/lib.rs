//! cta-builder CLI library

#![forbid(unsafe_code)]

pub mod commands;
pub mod settings;

pub use commands::{
    CatalogCommand, GenerateCommand, OemCommand, ValidateCommand, WizardCommand,
};
