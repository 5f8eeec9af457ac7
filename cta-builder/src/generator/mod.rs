//! HTML/CSS code generation
//!
//! The generated code is a single text blob:
//!
//! ```text
//! <style>
//! ...base, OEM, custom, placement and per-CTA rules, effects, media queries
//! </style>
//!
//! <!-- SRP CTAs -->
//! <div class="cn-srp-only">...</div>
//!
//! <!-- VDP CTAs -->
//! <div class="cn-vdp-only">...</div>
//! ```
//!
//! Page sections are left out when no CTA is placed on that page.

mod css;
pub mod effects;
pub mod html;
mod preview;
mod report;

use crate::catalog::Catalog;
use crate::state::{Placement, WizardState};

pub use html::escape_html;
pub use preview::{generate_preview_html, inline_button_style, render_live_preview};
pub use report::{format_code, validate_code, CodeReport};

/// Generate the code for the current state
///
/// Returns an empty string until an OEM is selected.
#[must_use]
pub fn generate_code(state: &WizardState, catalog: &Catalog) -> String {
    let Some(profile) = state.oem_profile() else {
        return String::new();
    };

    let mut code = css::generate_css(state, profile);
    code.push_str("\n\n");

    let placed = |placement: Placement| state.cta_configs().any(|config| config.placement.includes(placement));
    let srp = placed(Placement::Srp);
    let vdp = placed(Placement::Vdp);

    if srp {
        code.push_str(&html::html_section(Placement::Srp, state, catalog));
        code.push_str("\n\n");
    }
    if vdp {
        code.push_str(&html::html_section(Placement::Vdp, state, catalog));
    }

    tracing::debug!(
        oem = %profile.code,
        ctas = state.selected_ctas().len(),
        srp,
        vdp,
        bytes = code.len(),
        "code generated"
    );
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn test_no_oem_generates_nothing() {
        assert_eq!(generate_code(&WizardState::new(), &fixtures::catalog()), "");
    }

    #[test]
    fn test_sections_follow_placements() {
        let catalog = fixtures::catalog();
        let mut state = WizardState::new();
        state.set_oem("honda", fixtures::honda());
        state.set_selected_ctas(&["eprice".to_string()], &catalog).unwrap();

        let code = generate_code(&state, &catalog);
        assert!(code.contains("</style>\n\n<!-- SRP CTAs -->"));
        assert!(code.contains("</div>\n\n<!-- VDP CTAs -->"));
        assert!(code.ends_with("</div>"));
        assert!(validate_code(&code).is_valid);

        state.update_cta_config("eprice", |config| config.placement.srp = false);
        let code = generate_code(&state, &catalog);
        assert!(!code.contains("SRP CTAs"));
        assert!(code.contains("</style>\n\n<!-- VDP CTAs -->"));
    }
}
