//! Detail report layout configuration.

use serde::{Deserialize, Serialize};

/// Labels and column layout of the factor and strategy detail reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of quantile groups before the hedge column.
    #[serde(default = "default_group_count")]
    pub group_count: usize,
    /// Label of every group column past `group_count`.
    #[serde(default = "default_hedge_label")]
    pub hedge_label: String,
    /// Names of the leading backtest return columns, in tuple order.
    #[serde(default = "default_backtest_series")]
    pub backtest_series: Vec<String>,
    /// Backtest column whose drawdown is charted.
    #[serde(default = "default_drawdown_series")]
    pub drawdown_series: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            group_count: default_group_count(),
            hedge_label: default_hedge_label(),
            backtest_series: default_backtest_series(),
            drawdown_series: default_drawdown_series(),
        }
    }
}

impl ReportConfig {
    /// Label of the group column at `position`.
    #[must_use]
    pub fn group_label(&self, position: usize) -> String {
        if position < self.group_count {
            format!("Group {}", position + 1)
        } else {
            self.hedge_label.clone()
        }
    }
}

const fn default_group_count() -> usize {
    10
}

fn default_hedge_label() -> String {
    "LS Hedge".to_string()
}

fn default_backtest_series() -> Vec<String> {
    ["Strategy", "Index", "Excess"]
        .into_iter()
        .map(String::from)
        .collect()
}

const fn default_drawdown_series() -> usize {
    2
}
