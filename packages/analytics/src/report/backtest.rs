//! Backtest curves shared by the factor and strategy reports.

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::metrics::{build_nav, drawdown};
use crate::series::RowRecord;

/// A named curve over a section's dates.
///
/// NAV curves carry one more value than the section has dates: `values[0]`
/// is the `1.0` base preceding the first date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Legend name.
    pub name: String,
    /// Curve values.
    pub values: Vec<f64>,
}

/// NAV curves of the leading backtest columns plus one drawdown curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestSection {
    /// Dates of the window.
    pub index: Vec<String>,
    /// One NAV curve per configured backtest series.
    pub curves: Vec<Curve>,
    /// Drawdown of the configured drawdown series.
    pub drawdown: Curve,
}

impl BacktestSection {
    /// Build the section from an already filtered backtest record.
    pub fn build(record: &RowRecord, config: &ReportConfig) -> Result<Self> {
        let curves = config
            .backtest_series
            .iter()
            .enumerate()
            .map(|(position, name)| {
                Ok(Curve {
                    name: name.clone(),
                    values: build_nav(&record.column(position)?),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let drawdown = Curve {
            name: "Drawdown".to_string(),
            values: drawdown(&record.column(config.drawdown_series)?),
        };

        Ok(Self {
            index: record.index.clone(),
            curves,
            drawdown,
        })
    }
}
