//! Configuration for a CLI run
//!
//! Global flags sit on top of the layered [`BuilderConfig`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cta_builder::catalog::Catalog;
use cta_builder::config::BuilderConfig;
use cta_builder::observability::{self, LoggingSettings};

/// Resolve the configuration for this run
///
/// An explicit `--config` file replaces the standard search locations;
/// `--data-dir` and `-v` win over anything configured.
///
/// # Errors
///
/// Returns an error if the configuration cannot be parsed.
pub fn resolve(config: Option<&Path>, data_dir: Option<PathBuf>, verbose: u8) -> Result<BuilderConfig> {
    let mut settings = match config {
        Some(path) => BuilderConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => BuilderConfig::load().context("Failed to load configuration")?,
    };

    if let Some(data_dir) = data_dir {
        settings.data_dir = data_dir;
    }
    if let Some(level) = verbosity_level(verbose) {
        settings.logging.level = level.to_string();
    }
    Ok(settings)
}

/// Filter directive for a `-v` count
#[must_use]
pub const fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("cta_builder=info"),
        2 => Some("cta_builder=debug"),
        _ => Some("trace"),
    }
}

/// Install logging for the run
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    observability::init(settings).context("Failed to initialize logging")
}

/// Load the catalog from the configured data directory
///
/// # Errors
///
/// Returns an error if the data directory is missing or malformed.
pub fn load_catalog(settings: &BuilderConfig) -> Result<Catalog> {
    Catalog::load_from_dir(&settings.data_dir).with_context(|| {
        format!(
            "Failed to load catalog from {} (set --data-dir or data_dir in cta-builder.toml)",
            settings.data_dir.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some("cta_builder=info"));
        assert_eq!(verbosity_level(2), Some("cta_builder=debug"));
        assert_eq!(verbosity_level(7), Some("trace"));
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cta-builder.toml");
        std::fs::write(&path, "data_dir = \"/from/file\"\n").unwrap();

        let settings = resolve(Some(&path), None, 0).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/from/file"));

        let settings = resolve(Some(&path), Some(PathBuf::from("/from/flag")), 2).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/from/flag"));
        assert_eq!(settings.logging.level, "cta_builder=debug");
    }

    #[test]
    fn test_missing_catalog_mentions_path() {
        let settings = BuilderConfig {
            data_dir: PathBuf::from("/nonexistent/cta-data"),
            ..BuilderConfig::default()
        };
        let error = load_catalog(&settings).unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/cta-data"));
    }
}
