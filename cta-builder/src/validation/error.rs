//! Validation problems by step and field
//!
//! Every problem records the wizard step that raised it and the id of the
//! input it belongs to (`tree-<cta>`, `fontSize-buttons`, ...). Front ends
//! group by step for summaries and attach messages next to inputs by field.

use crate::state::Step;

/// Kind of rule a value broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing was chosen or entered
    Required,
    /// The value is not in the expected format
    Format,
    /// The value is outside the slider range
    Range,
}

/// A problem with one wizard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Step whose rules raised the problem
    pub step: Step,
    /// Input id
    pub field: String,
    /// Rule broken
    pub kind: ErrorKind,
    /// Message shown to the user
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    #[must_use]
    pub fn new(step: Step, kind: ErrorKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            step,
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Problems in the order the rules found them
///
/// # Examples
///
/// ```rust
/// use cta_builder::state::Step;
/// use cta_builder::validation::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.required(Step::OemSelection, "oem-select", "Please select an OEM");
/// errors.required(Step::TreeConfiguration, "tree-test_drive", "Please select a tree");
///
/// assert_eq!(errors.first_step(), Some(Step::OemSelection));
/// assert_eq!(errors.fields_with_errors(), vec!["oem-select", "tree-test_drive"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Record a missing value
    pub fn required(&mut self, step: Step, field: impl Into<String>, message: impl Into<String>) {
        self.push(FieldError::new(step, ErrorKind::Required, field, message));
    }

    /// Whether any problem was found
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether an input has a problem
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// Problems of one input
    #[must_use]
    pub fn for_field(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|error| error.field == field).collect()
    }

    /// Problems raised by one step
    pub fn for_step(&self, step: Step) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |error| error.step == step)
    }

    /// Input ids with problems, each once, in discovery order
    #[must_use]
    pub fn fields_with_errors(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(&error.field);
            }
        }
        fields
    }

    /// Earliest step with a problem
    #[must_use]
    pub fn first_step(&self) -> Option<Step> {
        self.errors.iter().map(|error| error.step).min()
    }

    /// Number of problems
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.len()
    }

    /// Append the problems of another collection
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// All problems
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message of the first problem, for one-line summaries
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|error| error.message.as_str())
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_field_listed_once() {
        let mut errors = ValidationErrors::new();
        assert!(!errors.has_errors());

        errors.push(FieldError::new(
            Step::Styling,
            ErrorKind::Format,
            "custom-bg-text-eprice",
            "is invalid",
        ));
        errors.required(Step::Styling, "custom-bg-text-eprice", "is required");

        assert!(errors.has_field_error("custom-bg-text-eprice"));
        assert!(!errors.has_field_error("oem-select"));
        assert_eq!(errors.for_field("custom-bg-text-eprice").len(), 2);
        assert_eq!(errors.fields_with_errors(), vec!["custom-bg-text-eprice"]);
        assert_eq!(errors.count(), 2);
    }

    #[test]
    fn test_merge_groups_by_step() {
        let mut errors = ValidationErrors::new();
        errors.required(Step::Placement, "srp-eprice", "Select at least one placement (SRP or VDP)");

        let mut earlier = ValidationErrors::new();
        earlier.required(Step::CtaSelection, "cta-checkboxes", "Please select at least one CTA");
        errors.merge(earlier);

        assert_eq!(errors.first_step(), Some(Step::CtaSelection));
        assert_eq!(errors.for_step(Step::Placement).count(), 1);
        assert_eq!(errors.for_step(Step::Styling).count(), 0);
        assert_eq!(
            errors.first_message(),
            Some("Select at least one placement (SRP or VDP)")
        );
    }

    #[test]
    fn test_display_lists_every_error() {
        let mut errors = ValidationErrors::new();
        errors.required(Step::OemSelection, "oem-select", "Please select an OEM");
        errors.required(Step::CtaSelection, "cta-checkboxes", "Please select at least one CTA");

        assert_eq!(
            errors.to_string(),
            "oem-select: Please select an OEM\ncta-checkboxes: Please select at least one CTA"
        );
    }
}
