//! Step navigation
//!
//! A [`Wizard`] owns the [`WizardState`] together with the [`Catalog`] it was
//! built from. Moving forward is gated by the rules of
//! [`validate_step`](crate::validation::validate_step); moving back never is.
//!
//! ```rust
//! use cta_builder::prelude::*;
//!
//! let mut wizard = Wizard::new(Catalog::default());
//! let errors = wizard.advance().unwrap_err();
//! assert!(errors.has_field_error("oem-select"));
//! assert_eq!(wizard.state().current_step(), Step::OemSelection);
//! ```

pub mod options;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::state::{Step, WizardState, TOTAL_STEPS};
use crate::validation::{validate_step, ValidationErrors};

pub use options::SelectOption;

/// Label of the next button on every step but the last
pub const NEXT_LABEL: &str = "Next";

/// Label of the next button on the last step
pub const SAVE_LABEL: &str = "Save This Config";

/// Progress marker of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressState {
    /// Step lies behind the current one
    Completed,
    /// Current step
    Active,
    /// Step not reached yet
    Pending,
}

/// What the navigation controls show for the current step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationStatus {
    /// Current step
    pub step: Step,
    /// Whether the back button is enabled
    pub can_go_back: bool,
    /// Label of the next button
    pub next_label: &'static str,
    /// Whether the next button is enabled
    pub next_enabled: bool,
    /// Marker per step, step 1 first
    pub progress: [ProgressState; TOTAL_STEPS as usize],
    /// Whether the live preview sidebar is visible
    pub show_preview_sidebar: bool,
}

impl NavigationStatus {
    /// Status for a step
    #[must_use]
    pub fn for_step(step: Step) -> Self {
        let progress = Step::ALL.map(|other| match other.cmp(&step) {
            std::cmp::Ordering::Less => ProgressState::Completed,
            std::cmp::Ordering::Equal => ProgressState::Active,
            std::cmp::Ordering::Greater => ProgressState::Pending,
        });

        Self {
            step,
            can_go_back: step.prev().is_some(),
            next_label: if step.is_last() { SAVE_LABEL } else { NEXT_LABEL },
            next_enabled: !step.is_last(),
            progress,
            show_preview_sidebar: !step.is_last(),
        }
    }
}

/// Wizard state bound to its catalog
#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    catalog: Catalog,
}

impl Wizard {
    /// Fresh wizard on step 1
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_state(catalog, WizardState::new())
    }

    /// Wizard resuming an existing state
    #[must_use]
    pub const fn with_state(catalog: Catalog, state: WizardState) -> Self {
        Self { state, catalog }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    /// Mutable state, for edits that need no validation
    pub fn state_mut(&mut self) -> &mut WizardState {
        &mut self.state
    }

    /// Catalog the wizard reads from
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load an OEM palette and select it
    ///
    /// # Errors
    ///
    /// Returns an error if the OEM is unknown or its palette cannot be
    /// loaded; the current selection is kept in that case.
    pub fn choose_oem(&mut self, code: &str) -> Result<()> {
        let profile = self.catalog.load_oem(code)?;
        self.state.set_oem(code, profile);
        Ok(())
    }

    /// Replace the CTA selection
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::UnknownCta`](crate::BuilderError::UnknownCta)
    /// if a type is not in the catalog.
    pub fn select_ctas(&mut self, cta_types: &[String]) -> Result<()> {
        self.state.set_selected_ctas(cta_types, &self.catalog)
    }

    /// Problems on the current step
    #[must_use]
    pub fn validate_current(&self) -> ValidationErrors {
        validate_step(self.state.current_step(), &self.state, &self.catalog)
    }

    /// Move to the next step if the current one is valid
    ///
    /// On the last step the state does not move and the last step is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of the current step.
    pub fn advance(&mut self) -> std::result::Result<Step, ValidationErrors> {
        let errors = self.validate_current();
        if errors.has_errors() {
            tracing::debug!(
                step = self.state.current_step().number(),
                errors = errors.count(),
                "step blocked"
            );
            return Err(errors);
        }

        self.state.next_step();
        Ok(self.state.current_step())
    }

    /// Move to the previous step; returns whether it moved
    pub fn back(&mut self) -> bool {
        self.state.prev_step()
    }

    /// Jump to a step
    ///
    /// Going back is always allowed. Going forward requires the current step
    /// and every step up to the target to be valid.
    ///
    /// # Errors
    ///
    /// Returns the errors of the first invalid step on the way; the state
    /// does not move.
    pub fn jump_to(&mut self, step: Step) -> std::result::Result<Step, ValidationErrors> {
        let current = self.state.current_step();
        if step > current {
            let blocking = Step::ALL
                .into_iter()
                .filter(|between| *between >= current && *between < step)
                .map(|between| validate_step(between, &self.state, &self.catalog))
                .find(ValidationErrors::has_errors);
            if let Some(errors) = blocking {
                return Err(errors);
            }
        }

        self.state.go_to_step(step.number());
        Ok(step)
    }

    /// Navigation controls for the current step
    #[must_use]
    pub fn status(&self) -> NavigationStatus {
        NavigationStatus::for_step(self.state.current_step())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    fn wizard_on_trees() -> Wizard {
        let mut wizard = Wizard::new(fixtures::catalog());
        wizard.choose_oem("toyota").unwrap();
        wizard.advance().unwrap();
        wizard.select_ctas(&["test_drive".to_string()]).unwrap();
        assert_eq!(wizard.advance().unwrap(), Step::TreeConfiguration);
        wizard
    }

    #[test]
    fn test_advance_blocked_without_oem() {
        let mut wizard = Wizard::new(fixtures::catalog());
        let errors = wizard.advance().unwrap_err();
        assert_eq!(errors.first_message(), Some("Please select an OEM"));
        assert_eq!(wizard.state().current_step(), Step::OemSelection);
    }

    #[test]
    fn test_choose_unknown_oem_keeps_selection() {
        let mut wizard = Wizard::new(fixtures::catalog());
        wizard.choose_oem("honda").unwrap();
        assert!(wizard.choose_oem("lada").is_err());
        assert_eq!(wizard.state().oem().unwrap().code, "honda");
    }

    #[test]
    fn test_tree_step_gates_progress() {
        let mut wizard = wizard_on_trees();
        let errors = wizard.advance().unwrap_err();
        assert!(errors.has_field_error("tree-test_drive"));

        wizard
            .state_mut()
            .update_cta_config("test_drive", |config| config.tree = Some("sales-tree-v2".into()));
        assert_eq!(wizard.advance().unwrap(), Step::Styling);
    }

    #[test]
    fn test_advance_on_last_step_stays() {
        let mut wizard = wizard_on_trees();
        wizard
            .state_mut()
            .update_cta_config("test_drive", |config| config.tree = Some("sales-tree-v2".into()));
        for _ in 0..10 {
            wizard.advance().unwrap();
        }
        assert_eq!(wizard.state().current_step(), Step::Preview);
        assert_eq!(wizard.advance().unwrap(), Step::Preview);
    }

    #[test]
    fn test_jump_forward_needs_valid_steps() {
        let mut wizard = wizard_on_trees();
        let errors = wizard.jump_to(Step::Placement).unwrap_err();
        assert!(errors.has_field_error("tree-test_drive"));
        assert_eq!(wizard.state().current_step(), Step::TreeConfiguration);

        assert_eq!(wizard.jump_to(Step::OemSelection).unwrap(), Step::OemSelection);
        wizard
            .state_mut()
            .update_cta_config("test_drive", |config| config.tree = Some("sales-tree-v2".into()));
        assert_eq!(wizard.jump_to(Step::Placement).unwrap(), Step::Placement);
    }

    #[test]
    fn test_back_stops_at_first_step() {
        let mut wizard = wizard_on_trees();
        assert!(wizard.back());
        assert!(wizard.back());
        assert!(!wizard.back());
        assert_eq!(wizard.state().current_step(), Step::OemSelection);
    }

    #[test]
    fn test_status_first_and_last() {
        let first = NavigationStatus::for_step(Step::OemSelection);
        assert!(!first.can_go_back);
        assert_eq!(first.next_label, "Next");
        assert!(first.next_enabled);
        assert_eq!(first.progress[0], ProgressState::Active);
        assert!(first.progress[1..].iter().all(|p| *p == ProgressState::Pending));

        let last = NavigationStatus::for_step(Step::Preview);
        assert!(last.can_go_back);
        assert_eq!(last.next_label, "Save This Config");
        assert!(!last.next_enabled);
        assert!(!last.show_preview_sidebar);
        assert!(last.progress[..6].iter().all(|p| *p == ProgressState::Completed));
        assert_eq!(last.progress[6], ProgressState::Active);
    }

    #[test]
    fn test_status_serializes_lowercase_progress() {
        let json = serde_json::to_value(NavigationStatus::for_step(Step::Styling)).unwrap();
        assert_eq!(json["step"], 4);
        assert_eq!(json["nextLabel"], "Next");
        assert_eq!(json["progress"][2], "completed");
        assert_eq!(json["progress"][3], "active");
        assert_eq!(json["progress"][4], "pending");
    }
}
