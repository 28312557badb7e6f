//! NAV and drawdown curves.

use super::constants::NAV_BASE;

/// Build the NAV curve of a return series.
///
/// The curve starts at `1.0` and has one more point than `returns`:
/// `nav[i] = nav[i - 1] * (1 + returns[i - 1])`. An empty series yields `[1.0]`.
///
/// # Example
///
/// ```
/// use factorview_analytics::metrics::build_nav;
///
/// let nav = build_nav(&[0.1, -0.05]);
/// assert_eq!(nav.len(), 3);
/// assert_eq!(nav[0], 1.0);
/// ```
#[must_use]
pub fn build_nav(returns: &[f64]) -> Vec<f64> {
    let mut nav = Vec::with_capacity(returns.len() + 1);
    let mut value = NAV_BASE;
    nav.push(value);
    for r in returns {
        value *= 1.0 + r;
        nav.push(value);
    }
    nav
}

/// Drawdown curve of a return series, relative to the running NAV peak.
#[must_use]
pub fn drawdown(returns: &[f64]) -> Vec<f64> {
    drawdown_from_nav(&build_nav(returns))
}

/// Drawdown curve of an already built NAV curve.
///
/// `dd[0]` is `0`; the peak only moves on a strictly higher NAV.
#[must_use]
pub fn drawdown_from_nav(nav: &[f64]) -> Vec<f64> {
    let Some((&first, rest)) = nav.split_first() else {
        return Vec::new();
    };

    let mut peak = first;
    let mut dd = Vec::with_capacity(nav.len());
    dd.push(0.0);

    for &value in rest {
        if value > peak {
            peak = value;
        }
        dd.push(value / peak - 1.0);
    }

    dd
}

/// Maximum drawdown (most negative drawdown, `0` if there is none).
#[must_use]
pub fn max_drawdown(returns: &[f64]) -> f64 {
    max_drawdown_from_nav(&build_nav(returns))
}

/// Maximum drawdown of an already built NAV curve.
///
/// A `NaN` anywhere in the curve (an overflowed NAV) makes the result `NaN`.
#[must_use]
pub fn max_drawdown_from_nav(nav: &[f64]) -> f64 {
    let dd = drawdown_from_nav(nav);
    if dd.iter().any(|d| d.is_nan()) {
        return f64::NAN;
    }
    dd.into_iter().fold(0.0, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_nav_compounds_returns() {
        let nav = build_nav(&[0.1, -0.05, 0.02]);
        assert_close(&nav, &[1.0, 1.1, 1.045, 1.0659]);
    }

    #[test]
    fn test_nav_of_empty_series() {
        assert_eq!(build_nav(&[]), vec![1.0]);
    }

    #[test]
    fn test_drawdown_tracks_running_peak() {
        let dd = drawdown(&[0.1, -0.2, 0.1]);
        assert_close(&dd, &[0.0, 0.0, -0.2, -0.12]);
        assert!((max_drawdown(&[0.1, -0.2, 0.1]) + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_drawdown_of_empty_series() {
        assert_eq!(drawdown(&[]), vec![0.0]);
        assert_eq!(max_drawdown(&[]), 0.0);
    }

    #[test]
    fn test_drawdown_of_empty_nav() {
        assert!(drawdown_from_nav(&[]).is_empty());
        assert_eq!(max_drawdown_from_nav(&[]), 0.0);
    }

    #[test]
    fn test_monotonic_nav_has_no_drawdown() {
        assert_eq!(max_drawdown(&[0.01, 0.0, 0.02, 0.03]), 0.0);
    }

    #[test]
    fn test_overflowed_nav_propagates_nan() {
        let returns = [1e308, 1e308];
        let dd = drawdown(&returns);
        assert_eq!(dd.len(), 3);
        assert!(dd[2].is_nan());
        assert!(max_drawdown(&returns).is_nan());
    }

    #[test]
    fn test_peak_not_reset_by_equal_value() {
        // Back to the peak exactly, then below it
        let dd = drawdown_from_nav(&[1.0, 2.0, 1.0, 2.0, 1.5]);
        assert_close(&dd, &[0.0, 0.0, -0.5, 0.0, -0.25]);
    }
}
