//! Static catalog data
//!
//! The catalog is read from a data directory with this layout:
//!
//! ```text
//! data/
//! ├── oem-list.json      # {"oems": [{"code": "...", "name": "..."}]}
//! ├── cta-labels.json    # CTA type -> CtaInfo
//! ├── trees.json         # trees by category + departments
//! └── oems/
//!     └── <code>.json    # OemProfile
//! ```
//!
//! OEM palettes are loaded on demand through [`Catalog::load_oem`]; profiles
//! registered with [`Catalog::with_profile`] are served from memory.

pub mod cta;
pub mod oem;
pub mod trees;

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::error::{BuilderError, Result};

pub use cta::{CtaInfo, DeeplinkStep, CONFIRM_AVAILABILITY, PERSONALIZE_PAYMENT};
pub use oem::{OemProfile, OemSummary, StyleDefinition};
pub use trees::{Department, DepartmentId, TreeCatalog, TreeCategory, TreeOption};

use oem::OemList;

const OEM_LIST_FILE: &str = "oem-list.json";
const CTA_LABELS_FILE: &str = "cta-labels.json";
const TREES_FILE: &str = "trees.json";
const OEMS_DIR: &str = "oems";

/// Everything the wizard reads from static data
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    oems: Vec<OemSummary>,
    cta_labels: IndexMap<String, CtaInfo>,
    trees: TreeCatalog,
    profiles: IndexMap<String, OemProfile>,
    data_dir: Option<PathBuf>,
}

impl Catalog {
    /// Load the catalog from a data directory
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three index files is missing or
    /// does not match its schema.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        tracing::debug!(data_dir = %dir.display(), "loading catalog");

        let oems: OemList = read_json(&dir.join(OEM_LIST_FILE))?;
        let cta_labels = read_json(&dir.join(CTA_LABELS_FILE))?;
        let trees = read_json(&dir.join(TREES_FILE))?;

        let catalog = Self {
            oems: oems.oems,
            cta_labels,
            trees,
            profiles: IndexMap::new(),
            data_dir: Some(dir.to_path_buf()),
        };

        tracing::info!(
            oems = catalog.oems.len(),
            ctas = catalog.cta_labels.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from JSON documents, without a data directory
    ///
    /// # Errors
    ///
    /// Returns an error if a document does not match its schema.
    pub fn from_json(oem_list: &str, cta_labels: &str, trees: &str) -> Result<Self> {
        let oems: OemList =
            serde_json::from_str(oem_list).map_err(|e| BuilderError::json(OEM_LIST_FILE, e))?;
        let cta_labels =
            serde_json::from_str(cta_labels).map_err(|e| BuilderError::json(CTA_LABELS_FILE, e))?;
        let trees = serde_json::from_str(trees).map_err(|e| BuilderError::json(TREES_FILE, e))?;

        Ok(Self {
            oems: oems.oems,
            cta_labels,
            trees,
            profiles: IndexMap::new(),
            data_dir: None,
        })
    }

    /// Register an in-memory OEM profile
    #[must_use]
    pub fn with_profile(mut self, profile: OemProfile) -> Self {
        if !self.oems.iter().any(|oem| oem.code == profile.code) {
            self.oems.push(OemSummary {
                code: profile.code.clone(),
                name: profile.name.clone(),
            });
        }
        self.profiles.insert(profile.code.clone(), profile);
        self
    }

    /// OEMs available for selection, in list order
    #[must_use]
    pub fn oems(&self) -> &[OemSummary] {
        &self.oems
    }

    /// All CTA types, in catalog order
    #[must_use]
    pub const fn cta_labels(&self) -> &IndexMap<String, CtaInfo> {
        &self.cta_labels
    }

    /// Catalog entry of one CTA type
    #[must_use]
    pub fn cta_info(&self, cta_type: &str) -> Option<&CtaInfo> {
        self.cta_labels.get(cta_type)
    }

    /// Trees and departments
    #[must_use]
    pub const fn trees(&self) -> &TreeCatalog {
        &self.trees
    }

    /// Directory the catalog was loaded from, if any
    #[must_use]
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Trees for a category, sorted by id
    #[must_use]
    pub fn trees_for_category(&self, category: &str) -> Vec<TreeOption> {
        self.trees.trees_for_category(category)
    }

    /// Departments for a category, including shared ones
    #[must_use]
    pub fn departments_for_category(&self, category: &str) -> Vec<&Department> {
        self.trees.departments_for_category(category)
    }

    /// Load the style palette of an OEM
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::UnknownOem`] if the code is not in the OEM
    /// list, or an I/O / JSON error if its data file cannot be read.
    pub fn load_oem(&self, code: &str) -> Result<OemProfile> {
        let summary = self
            .oems
            .iter()
            .find(|oem| oem.code == code)
            .ok_or_else(|| BuilderError::UnknownOem(code.to_string()))?;

        if let Some(profile) = self.profiles.get(code) {
            return Ok(profile.clone());
        }

        let path = self.oem_path(code)?;
        let mut profile: OemProfile = read_json(&path)?;
        if profile.code.is_empty() {
            profile.code.clone_from(&summary.code);
        }

        if profile.primary().is_none() {
            tracing::warn!(oem = code, "OEM palette has no primary style");
        }
        tracing::debug!(oem = code, styles = profile.styles.len(), "OEM palette loaded");
        Ok(profile)
    }

    /// Write an OEM palette back to its data file
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog has no data directory or the file
    /// cannot be written.
    pub fn save_oem(&self, profile: &OemProfile) -> Result<PathBuf> {
        let path = self.oem_path(&profile.code)?;
        let mut json = serde_json::to_string_pretty(profile)
            .map_err(|e| BuilderError::json(&path, e))?;
        json.push('\n');
        fs::write(&path, json).map_err(|e| BuilderError::io(&path, e))?;
        Ok(path)
    }

    fn oem_path(&self, code: &str) -> Result<PathBuf> {
        let dir = self.data_dir.as_ref().ok_or_else(|| {
            BuilderError::Catalog(format!("no data directory to load OEM '{code}' from"))
        })?;
        Ok(dir.join(OEMS_DIR).join(format!("{code}.json")))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| BuilderError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| BuilderError::json(path, e))
}
