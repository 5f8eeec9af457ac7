//! Configuration management
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CTA_BUILDER_` prefix, `__` for nesting)
//! 2. `./cta-builder.toml` (project)
//! 3. `~/.config/cta-builder/config.toml` (user config, XDG)
//! 4. `/etc/cta-builder/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! Environment variable format: `CTA_BUILDER_SECTION__FIELD_NAME`, for
//! example `CTA_BUILDER_OUTPUT__FORMAT_CODE=false`.
//!
//! # Example Configuration
//!
//! ```toml
//! data_dir = "./data"
//!
//! [output]
//! format_code = true
//! write_preview = false
//! output_dir = "./dist"
//!
//! [logging]
//! level = "info"
//! json = false
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{BuilderError, Result};
use crate::observability::LoggingSettings;

const APP_DIR: &str = "cta-builder";
const ENV_PREFIX: &str = "CTA_BUILDER_";
const LOCAL_CONFIG: &str = "./cta-builder.toml";

/// Where and how generated code is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Run generated code through [`format_code`](crate::generator::format_code)
    pub format_code: bool,

    /// Also write the standalone preview document
    pub write_preview: bool,

    /// Directory for generated files
    pub output_dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format_code: true,
            write_preview: false,
            output_dir: PathBuf::from("./dist"),
        }
    }
}

/// Complete builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Catalog data directory
    pub data_dir: PathBuf,

    /// Output settings
    pub output: OutputSettings,

    /// Logging settings
    pub logging: LoggingSettings,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            output: OutputSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl BuilderConfig {
    fn defaults() -> Result<Figment> {
        let defaults =
            toml::to_string(&Self::default()).map_err(|e| BuilderError::Config(e.to_string()))?;
        Ok(Figment::new().merge(Toml::string(&defaults)))
    }

    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if a config file that exists cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self> {
        let mut figment = Self::defaults()?;

        let system_config = PathBuf::from("/etc").join(APP_DIR).join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Self = figment.extract()?;
        tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file yields the defaults; environment variables still
    /// apply on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::defaults()?
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// The XDG user config path
    ///
    /// # Example
    ///
    /// ```rust
    /// use cta_builder::config::BuilderConfig;
    ///
    /// let path = BuilderConfig::recommended_path();
    /// // Returns: ~/.config/cta-builder/config.toml
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(LOCAL_CONFIG),
            |config_dir| config_dir.join(APP_DIR).join("config.toml"),
        )
    }
}
