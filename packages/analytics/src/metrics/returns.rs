//! Annualized return/volatility estimators and the ratios built on them.
//!
//! Degenerate inputs (an empty series, zero volatility, zero drawdown) return
//! `0` rather than `NaN` or an infinity. Historical dashboards render these
//! sentinels, so they are part of the output contract.

use super::constants::TRADING_DAYS_PER_YEAR;
use super::math::mean_square;
use super::nav::{build_nav, max_drawdown_from_nav};

/// Cumulative return of a NAV curve (`final NAV - 1`).
pub(crate) fn cumulative_return_from_nav(nav: &[f64]) -> f64 {
    nav.last().map_or(0.0, |last| last - 1.0)
}

/// Annualized return: `(1 + total_return)^(252 / n) - 1`.
///
/// Returns `0` for an empty series.
#[must_use]
pub fn annualized_return(returns: &[f64]) -> f64 {
    annualized_return_from_nav(&build_nav(returns), returns.len())
}

pub(crate) fn annualized_return_from_nav(nav: &[f64], periods: usize) -> f64 {
    if periods == 0 {
        return 0.0;
    }
    let total_return = cumulative_return_from_nav(nav);
    (1.0 + total_return).powf(TRADING_DAYS_PER_YEAR / periods as f64) - 1.0
}

/// Annualized volatility: `sqrt(252) * sqrt(mean(r^2))`.
///
/// Uses the raw second moment (returns are not demeaned). Returns `0` for an
/// empty series.
#[must_use]
pub fn annualized_volatility(returns: &[f64]) -> f64 {
    mean_square(returns).map_or(0.0, |ms| TRADING_DAYS_PER_YEAR.sqrt() * ms.sqrt())
}

/// Sharpe ratio with a zero risk-free rate; `0` when volatility is `0`.
#[must_use]
pub fn sharpe_ratio(returns: &[f64]) -> f64 {
    sharpe_from_parts(annualized_return(returns), annualized_volatility(returns))
}

pub(crate) fn sharpe_from_parts(annualized_return: f64, annualized_volatility: f64) -> f64 {
    if annualized_volatility == 0.0 {
        return 0.0;
    }
    annualized_return / annualized_volatility
}

/// Calmar ratio: annualized return over `|max drawdown|`; `0` without drawdown.
#[must_use]
pub fn calmar_ratio(returns: &[f64]) -> f64 {
    let nav = build_nav(returns);
    calmar_from_parts(
        annualized_return_from_nav(&nav, returns.len()),
        max_drawdown_from_nav(&nav),
    )
}

pub(crate) fn calmar_from_parts(annualized_return: f64, max_drawdown: f64) -> f64 {
    if max_drawdown == 0.0 {
        return 0.0;
    }
    annualized_return / max_drawdown.abs()
}
