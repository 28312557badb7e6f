//! Performance summary of a single return series.

use serde::{Deserialize, Serialize};

use super::nav::{build_nav, max_drawdown_from_nav};
use super::returns::{
    annualized_return_from_nav, annualized_volatility, calmar_from_parts,
    cumulative_return_from_nav, sharpe_from_parts,
};

/// Performance summary with all calculated metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    /// Final NAV minus one (decimal, e.g., 0.15 = 15%).
    pub cumulative_return: f64,
    /// Annualized return over 252 periods per year.
    pub annualized_return: f64,
    /// Annualized volatility of raw returns.
    pub annualized_volatility: f64,
    /// Maximum drawdown (non-positive decimal, e.g., -0.20 = 20% below peak).
    pub max_drawdown: f64,
    /// Sharpe ratio with zero risk-free rate.
    pub sharpe_ratio: f64,
    /// Calmar ratio.
    pub calmar_ratio: f64,
}

impl PerformanceSummary {
    /// Calculate all performance metrics of a return series.
    ///
    /// The NAV curve is built once and shared by every metric; results equal
    /// those of the individual estimators.
    #[must_use]
    pub fn from_returns(returns: &[f64]) -> Self {
        let nav = build_nav(returns);

        let annualized_return = annualized_return_from_nav(&nav, returns.len());
        let annualized_volatility = annualized_volatility(returns);
        let max_drawdown = max_drawdown_from_nav(&nav);

        Self {
            cumulative_return: cumulative_return_from_nav(&nav),
            annualized_return,
            annualized_volatility,
            max_drawdown,
            sharpe_ratio: sharpe_from_parts(annualized_return, annualized_volatility),
            calmar_ratio: calmar_from_parts(annualized_return, max_drawdown),
        }
    }
}

/// Performance summary of a return series.
#[must_use]
pub fn calc_perf(returns: &[f64]) -> PerformanceSummary {
    PerformanceSummary::from_returns(returns)
}
