//! Statistical math utilities for performance metric calculations.
//!
//! Every sum is a left fold starting at `0.0`, so results reproduce the
//! dashboard's summation order exactly.

/// Sum of a slice, folded left to right from zero.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// Calculate mean of a slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(sum(values) / values.len() as f64)
}

/// Mean of squared values (raw second moment, not demeaned).
pub fn mean_square(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let squares = values.iter().fold(0.0, |acc, v| acc + v * v);
    Some(squares / values.len() as f64)
}

/// Population standard deviation around a precomputed mean.
pub fn population_std_dev(values: &[f64], mean: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let variance_sum = values
        .iter()
        .fold(0.0, |acc, v| acc + (v - mean) * (v - mean));
    Some((variance_sum / values.len() as f64).sqrt())
}

/// Trailing-window mean.
///
/// Position `i` averages `values[i + 1 - period ..= i]` (clipped at the start
/// of the series) and is `None` until the window holds `min_periods`
/// observations.
pub fn rolling_mean(values: &[f64], period: usize, min_periods: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(period);
            let window = &values[start..=i];
            if window.len() >= min_periods {
                mean(window)
            } else {
                None
            }
        })
        .collect()
}
