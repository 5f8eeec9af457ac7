//! Logging setup
//!
//! The library only emits `tracing` events. Binaries install a subscriber
//! once at startup through [`init`].

use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl LoggingSettings {
    /// Settings with a filter directive
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    /// Switch to JSON output
    #[must_use]
    pub const fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Filter from `RUST_LOG`, else from the configured level
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("warn"))
        })
    }
}

/// Install the global subscriber
///
/// Output goes to stderr so generated code on stdout stays clean.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use cta_builder::observability::{self, LoggingSettings};
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(&LoggingSettings::new("info"))?;
/// tracing::info!("wizard started");
/// # Ok(())
/// # }
/// ```
pub fn init(settings: &LoggingSettings) -> anyhow::Result<()> {
    let env_filter = settings.env_filter();

    if settings.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = LoggingSettings::default();
        assert_eq!(settings.level, "warn");
        assert!(!settings.json);
    }

    #[test]
    fn test_builder() {
        let settings = LoggingSettings::new("cta_builder=debug").with_json();
        assert_eq!(settings.level, "cta_builder=debug");
        assert!(settings.json);
    }

    #[test]
    fn test_second_init_fails() {
        let settings = LoggingSettings::default();
        // only test in this binary that installs a subscriber
        assert!(init(&settings).is_ok());
        let second = init(&settings).unwrap_err();
        assert!(!second.to_string().is_empty());
    }
}
