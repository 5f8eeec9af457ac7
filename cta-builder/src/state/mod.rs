//! Wizard state store
//!
//! [`WizardState`] holds the current step plus everything the user has chosen
//! so far. All mutations go through methods so that the CTA selection and
//! the per-CTA configurations never drift apart.

pub mod advanced;
pub mod cta;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, OemProfile, CONFIRM_AVAILABILITY};
use crate::error::{BuilderError, Result};

pub use advanced::{AdvancedStyles, OverrideTarget, StyleOverrides, TextWrap};
pub use cta::{
    CtaConfig, CustomColors, DepartmentChoice, DeviceTarget, EffectSettings, Placement,
    PlacementConfig, StyleChoice, DEFAULT_SHEEN_INTERVAL_SECS,
};

/// Number of wizard steps
pub const TOTAL_STEPS: u8 = 7;

/// Wizard step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Step {
    /// Pick the OEM
    #[default]
    OemSelection = 1,
    /// Pick the CTAs
    CtaSelection = 2,
    /// Trees, departments and deeplinks
    TreeConfiguration = 3,
    /// Labels and base styles
    Styling = 4,
    /// Typography and spacing overrides
    AdvancedStyling = 5,
    /// SRP/VDP and device placement
    Placement = 6,
    /// Preview and export
    Preview = 7,
}

impl Step {
    /// Every step in order
    pub const ALL: [Self; TOTAL_STEPS as usize] = [
        Self::OemSelection,
        Self::CtaSelection,
        Self::TreeConfiguration,
        Self::Styling,
        Self::AdvancedStyling,
        Self::Placement,
        Self::Preview,
    ];

    /// Step for a 1-based number
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
    }

    /// 1-based step number
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Heading shown for the step
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::OemSelection => "Select OEM",
            Self::CtaSelection => "Select CTAs",
            Self::TreeConfiguration => "Configure Trees",
            Self::Styling => "Style CTAs",
            Self::AdvancedStyling => "Advanced Styling",
            Self::Placement => "Placement",
            Self::Preview => "Preview & Export",
        }
    }

    /// The following step, if any
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, if any
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Whether this is the last step
    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::Preview
    }
}

impl TryFrom<u8> for Step {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_number(value).ok_or_else(|| format!("step must be 1..={TOTAL_STEPS}, got {value}"))
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.number()
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// OEM chosen in the first step together with its palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedOem {
    /// OEM code
    pub code: String,
    /// Loaded style palette
    pub profile: OemProfile,
}

/// User choices, as exported and imported
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardData {
    /// Selected OEM
    pub oem: Option<SelectedOem>,
    /// Selected CTA types, in selection order
    pub selected_ctas: Vec<String>,
    /// Configuration per selected CTA, in selection order
    pub cta_configs: IndexMap<String, CtaConfig>,
    /// Placement-level overrides
    pub advanced: AdvancedStyles,
}

/// Complete wizard state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    current_step: Step,
    data: WizardData,
}

impl WizardState {
    /// Fresh state on step 1
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step
    #[must_use]
    pub const fn current_step(&self) -> Step {
        self.current_step
    }

    /// Go to a step by number; numbers outside 1..=7 are ignored
    pub fn go_to_step(&mut self, number: u8) -> bool {
        match Step::from_number(number) {
            Some(step) => {
                tracing::debug!(from = self.current_step.number(), to = number, "go to step");
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    /// Move forward one step; false on the last step
    pub fn next_step(&mut self) -> bool {
        match self.current_step.next() {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    /// Move back one step; false on the first step
    pub fn prev_step(&mut self) -> bool {
        match self.current_step.prev() {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    /// Read access to the user's choices
    #[must_use]
    pub const fn data(&self) -> &WizardData {
        &self.data
    }

    /// Selected OEM
    #[must_use]
    pub const fn oem(&self) -> Option<&SelectedOem> {
        self.data.oem.as_ref()
    }

    /// Palette of the selected OEM
    #[must_use]
    pub fn oem_profile(&self) -> Option<&OemProfile> {
        self.data.oem.as_ref().map(|oem| &oem.profile)
    }

    /// Select an OEM
    pub fn set_oem(&mut self, code: impl Into<String>, profile: OemProfile) {
        let code = code.into();
        tracing::info!(oem = %code, styles = profile.styles.len(), "OEM selected");
        self.data.oem = Some(SelectedOem { code, profile });
    }

    /// Forget the selected OEM
    pub fn clear_oem(&mut self) {
        self.data.oem = None;
    }

    /// Selected CTA types, in selection order
    #[must_use]
    pub fn selected_ctas(&self) -> &[String] {
        &self.data.selected_ctas
    }

    /// Replace the CTA selection
    ///
    /// Configurations of CTAs that stay selected are kept, new CTAs get a
    /// default configuration and configurations of deselected CTAs are
    /// dropped. Repeated types are only taken once.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::UnknownCta`] if a type is not in the catalog;
    /// the state is left unchanged.
    pub fn set_selected_ctas(&mut self, cta_types: &[String], catalog: &Catalog) -> Result<()> {
        if let Some(unknown) = cta_types.iter().find(|t| catalog.cta_info(t).is_none()) {
            return Err(BuilderError::UnknownCta(unknown.clone()));
        }

        let selected = first_occurrences(cta_types);
        let mut previous = std::mem::take(&mut self.data.cta_configs);
        let mut configs = IndexMap::with_capacity(selected.len());
        for cta_type in &selected {
            let config = match previous.shift_remove(cta_type) {
                Some(config) => config,
                None => Self::create_default_cta_config(cta_type, catalog)?,
            };
            configs.insert(cta_type.clone(), config);
        }

        tracing::info!(
            selected = selected.len(),
            dropped = previous.len(),
            "CTA selection updated"
        );
        self.data.selected_ctas = selected;
        self.data.cta_configs = configs;
        Ok(())
    }

    /// Default configuration for a newly selected CTA
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::UnknownCta`] if the type is not in the catalog.
    pub fn create_default_cta_config(cta_type: &str, catalog: &Catalog) -> Result<CtaConfig> {
        let info = catalog
            .cta_info(cta_type)
            .ok_or_else(|| BuilderError::UnknownCta(cta_type.to_string()))?;

        let department = if cta_type == CONFIRM_AVAILABILITY {
            Some(DepartmentChoice::Custom(None))
        } else {
            info.standard_dept.map(DepartmentChoice::Standard)
        };

        Ok(CtaConfig {
            cta_type: cta_type.to_string(),
            label: info.default_label.clone(),
            use_custom_label: false,
            custom_label: None,
            use_deeplink: false,
            deeplink_step: None,
            tree: None,
            use_custom_tree: false,
            department,
            style: StyleChoice::default(),
            vdp_style: None,
            overrides: StyleOverrides::default(),
            effects: EffectSettings::default(),
            placement: PlacementConfig::default(),
        })
    }

    /// Mutate the configuration of a selected CTA
    ///
    /// Returns false if the CTA is not selected.
    pub fn update_cta_config<F>(&mut self, cta_type: &str, update: F) -> bool
    where
        F: FnOnce(&mut CtaConfig),
    {
        match self.data.cta_configs.get_mut(cta_type) {
            Some(config) => {
                update(config);
                tracing::debug!(cta = cta_type, "CTA config updated");
                true
            }
            None => false,
        }
    }

    /// Configuration of a selected CTA
    #[must_use]
    pub fn cta_config(&self, cta_type: &str) -> Option<&CtaConfig> {
        self.data.cta_configs.get(cta_type)
    }

    /// Configurations of all selected CTAs, in selection order
    pub fn cta_configs(&self) -> impl Iterator<Item = &CtaConfig> {
        self.data
            .selected_ctas
            .iter()
            .filter_map(|cta_type| self.data.cta_configs.get(cta_type))
    }

    /// Placement-level overrides
    #[must_use]
    pub const fn advanced(&self) -> &AdvancedStyles {
        &self.data.advanced
    }

    /// Switch between unified and separate SRP/VDP styling
    pub fn set_separate_styling(&mut self, separate: bool) {
        self.data.advanced.separate_styling = separate;
    }

    /// Whether SRP and VDP are styled separately
    #[must_use]
    pub const fn separate_styling(&self) -> bool {
        self.data.advanced.separate_styling
    }

    /// Patch one advanced override set
    pub fn update_advanced_styles(&mut self, target: OverrideTarget, patch: &StyleOverrides) {
        self.data.advanced.target_mut(target).apply(patch);
        tracing::debug!(%target, "advanced styles updated");
    }

    /// Back to step 1 with nothing chosen
    pub fn reset(&mut self) {
        tracing::info!("wizard state reset");
        *self = Self::default();
    }

    /// Serialize the user's choices as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::State`] if serialization fails.
    pub fn export_state(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.data).map_err(|e| BuilderError::State(e.to_string()))
    }

    /// Replace the user's choices with previously exported JSON
    ///
    /// Configurations of CTAs that are not in the selection are discarded and
    /// a repeated CTA type is only taken once.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::State`] if the JSON is malformed or a selected
    /// CTA has no configuration; the state is left unchanged.
    pub fn import_state(&mut self, json: &str) -> Result<()> {
        let mut data: WizardData =
            serde_json::from_str(json).map_err(|e| BuilderError::State(e.to_string()))?;

        if let Some(missing) = data
            .selected_ctas
            .iter()
            .find(|cta_type| !data.cta_configs.contains_key(*cta_type))
        {
            return Err(BuilderError::State(format!(
                "selected CTA '{missing}' has no configuration"
            )));
        }

        data.selected_ctas = first_occurrences(&data.selected_ctas);
        let selected = &data.selected_ctas;
        data.cta_configs.retain(|cta_type, _| selected.contains(cta_type));
        tracing::info!(ctas = data.selected_ctas.len(), "wizard state imported");
        self.data = data;
        Ok(())
    }
}

/// Types in order with repeats removed
fn first_occurrences(cta_types: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(cta_types.len());
    for cta_type in cta_types {
        if !unique.contains(cta_type) {
            unique.push(cta_type.clone());
        }
    }
    unique
}
