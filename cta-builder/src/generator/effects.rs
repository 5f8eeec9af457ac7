//! Sheen animation CSS
//!
//! The sheen is a translucent band that sweeps across the button in a fixed
//! 0.7s, then waits out the rest of the cycle. A cycle length other than the
//! default gets its own keyframes and animation rule per CTA type.

use super::css::push_rule;
use crate::state::DEFAULT_SHEEN_INTERVAL_SECS;
use crate::style::sanitize_css_class_name;

/// Keyframes name of the default cycle
const CYCLE_NAME: &str = "cn-sheen-cycle";

/// Sweep duration in seconds
const SWEEP_SECS: f64 = 0.7;

/// Keyframe percentages `(sweep end, snap back)` for a cycle length
///
/// The sweep percentage is computed in floating point and rounded to two
/// decimals with halves rounded up, so an interval of 80s ends the sweep at
/// `0.87` because `0.7 / 80 * 100` sits just below the half. The snap lands
/// 0.01% after the rounded sweep.
#[must_use]
pub fn keyframe_stops(interval_secs: u32) -> (String, String) {
    let percent = SWEEP_SECS / f64::from(interval_secs.max(1)) * 100.0;
    let sweep = two_decimals(percent);
    let rounded = sweep.parse::<f64>().unwrap_or(percent);
    let snap = two_decimals(rounded + 0.01);
    (sweep, snap)
}

/// Fixed two decimal form, rounding exact halves up
fn two_decimals(value: f64) -> String {
    // a hundredths half is always a whole number of eighths, and an odd one
    let eighths = value * 8.0;
    let halfway = eighths.fract() == 0.0 && (eighths / 2.0).fract() != 0.0;
    if halfway {
        format!("{:.2}", value + 0.001)
    } else {
        format!("{value:.2}")
    }
}

fn keyframes(name: &str, interval_secs: u32) -> String {
    let (sweep, snap) = keyframe_stops(interval_secs);
    format!(
        "@keyframes {name} {{\n    0% {{ left: -60%; }}\n    {sweep}% {{ left: 120%; }}\n    {snap}% {{ left: -60%; }}\n    100% {{ left: -60%; }}\n}}\n\n"
    )
}

/// Shared sheen rules with the default cycle
#[must_use]
pub fn sheen_base_css() -> String {
    let mut css = String::new();
    push_rule(
        &mut css,
        ".cn-sheen-enabled",
        &[("position", "relative"), ("overflow", "hidden")],
        false,
    );

    let animation = format!("{CYCLE_NAME} {DEFAULT_SHEEN_INTERVAL_SECS}s ease-out infinite");
    push_rule(
        &mut css,
        ".cn-sheen-enabled::after",
        &[
            ("content", "''"),
            ("position", "absolute"),
            ("top", "0"),
            ("left", "-60%"),
            ("width", "40%"),
            ("height", "100%"),
            (
                "background",
                "linear-gradient(120deg, rgba(255, 255, 255, 0) 0%, rgba(255, 255, 255, 0.45) 50%, rgba(255, 255, 255, 0) 100%)",
            ),
            ("pointer-events", "none"),
            ("animation", animation.as_str()),
        ],
        false,
    );
    css.push_str(&keyframes(CYCLE_NAME, DEFAULT_SHEEN_INTERVAL_SECS));
    css
}

/// Class marking a CTA with its own sheen cycle
#[must_use]
pub fn sheen_class(cta_type: &str) -> String {
    format!("cn-sheen-{}", sanitize_css_class_name(cta_type))
}

/// Keyframes and animation rule for a CTA with a non-default cycle
#[must_use]
pub fn sheen_interval_css(cta_type: &str, interval_secs: u32) -> String {
    let name = format!("{CYCLE_NAME}-{}", sanitize_css_class_name(cta_type));
    let mut css = keyframes(&name, interval_secs);
    let animation = format!("{name} {}s ease-out infinite", interval_secs.max(1));
    push_rule(
        &mut css,
        &format!(".{}::after", sheen_class(cta_type)),
        &[("animation", animation.as_str())],
        true,
    );
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframe_stops() {
        assert_eq!(keyframe_stops(15), ("4.67".to_string(), "4.68".to_string()));
        assert_eq!(keyframe_stops(10), ("7.00".to_string(), "7.01".to_string()));
        assert_eq!(keyframe_stops(1), ("70.00".to_string(), "70.01".to_string()));
        assert_eq!(keyframe_stops(0), keyframe_stops(1));
    }

    #[test]
    fn test_keyframe_stops_round_halves_up() {
        assert_eq!(keyframe_stops(16), ("4.38".to_string(), "4.39".to_string()));
        assert_eq!(keyframe_stops(112), ("0.63".to_string(), "0.64".to_string()));
        assert_eq!(keyframe_stops(80), ("0.87".to_string(), "0.88".to_string()));
    }

    #[test]
    fn test_interval_css_names_follow_type() {
        let css = sheen_interval_css("value_trade", 8);
        assert!(css.starts_with("@keyframes cn-sheen-cycle-value-trade {"));
        assert!(css.contains("8.75% { left: 120%; }"));
        assert!(css.contains(
            ".cn-sheen-value-trade::after {\n    animation: cn-sheen-cycle-value-trade 8s ease-out infinite !important;\n}"
        ));
    }

    #[test]
    fn test_base_css_uses_default_cycle() {
        let css = sheen_base_css();
        assert!(css.contains("animation: cn-sheen-cycle 15s ease-out infinite;"));
        assert!(css.contains("@keyframes cn-sheen-cycle {"));
    }
}
