//! Formatting utilities for performance metrics display.

use super::constants::HUNDRED;

/// Placeholder shown for undefined values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a decimal as a percentage string with 2 decimals (`0.1523` → `15.23%`).
#[must_use]
pub fn format_pct(value: f64) -> String {
    format_pct_with(value, 2)
}

/// Format a decimal as a percentage string with `decimals` places.
#[must_use]
pub fn format_pct_with(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.*}%", decimals, value * HUNDRED)
}

/// Format a value with a fixed number of decimals.
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{value:.decimals$}")
}

/// Format a ratio with 2 decimal places.
#[must_use]
pub fn format_ratio(value: f64) -> String {
    format_fixed(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_pct(0.1523), "15.23%");
        assert_eq!(format_pct(-0.2), "-20.00%");
        assert_eq!(format_pct_with(0.75, 1), "75.0%");
        assert_eq!(format_fixed(0.0175, 3), "0.018");
        assert_eq!(format_ratio(2.345_678), "2.35");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_ratio(f64::NAN), "N/A");
        assert_eq!(format_pct(f64::INFINITY), "N/A");
    }
}
