//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

/// Library error type
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Catalog data is inconsistent or incomplete
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Reading a data file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON for its schema
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// CTA type is not present in the label catalog
    #[error("Unknown CTA type: {0}")]
    UnknownCta(String),

    /// OEM code is not present in the OEM list
    #[error("Unknown OEM: {0}")]
    UnknownOem(String),

    /// Wizard state could not be imported or exported
    #[error("State error: {0}")]
    State(String),

    /// Preview template failed to render
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BuilderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for BuilderError {
    fn from(error: figment::Error) -> Self {
        Self::Config(error.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, BuilderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let error = BuilderError::io(
            "data/oems/ford.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(error.to_string().contains("data/oems/ford.json"));
    }

    #[test]
    fn test_unknown_cta_display() {
        let error = BuilderError::UnknownCta("fly_me".to_string());
        assert_eq!(error.to_string(), "Unknown CTA type: fly_me");
    }
}
