//! Formatting and structural checks of generated code

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("Invalid regex"));

/// Tidy generated code for copying
///
/// Collapses runs of three or more newlines into one blank line, strips
/// trailing whitespace from every line and trims the whole text. Runs are
/// collapsed before lines are stripped, so lines holding only spaces still
/// separate newlines and survive as empty lines.
#[must_use]
pub fn format_code(code: &str) -> String {
    BLANK_RUNS
        .replace_all(code, "\n\n")
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Result of [`validate_code`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeReport {
    /// Whether no problem was found
    pub is_valid: bool,
    /// Problems found, in check order
    pub errors: Vec<String>,
}

/// Structural sanity checks over generated code
#[must_use]
pub fn validate_code(code: &str) -> CodeReport {
    let mut errors = Vec::new();

    if !code.contains("<style>") {
        errors.push("Missing CSS styles".to_string());
    }
    if !code.contains("demo-cta") {
        errors.push("Missing CTA elements".to_string());
    }
    if code.matches("<div").count() != code.matches("</div>").count() {
        errors.push("Mismatched div tags".to_string());
    }
    if code.matches("<a ").count() != code.matches("</a>").count() {
        errors.push("Mismatched anchor tags".to_string());
    }

    CodeReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
