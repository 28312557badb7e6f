//! Strategy detail report.

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, span};

use super::backtest::BacktestSection;
use super::factor::window;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::metrics::{CALENDAR_DAYS_PER_YEAR, PerformanceSummary, mean, sum};
use crate::series::{DateRange, RowRecord, StrategyPerfPayload, parse_date, require};

/// Trading activity of a backtest window, read from the trailing
/// holding-count, turnover and fee columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingActivity {
    /// Calendar days between the first and last date, in 365-day years.
    pub total_years: f64,
    /// Mean number of holdings.
    pub avg_position: f64,
    /// Total turnover per year.
    pub annual_turnover: f64,
    /// Total fee rate per year.
    pub annual_fee: f64,
}

impl TradingActivity {
    /// Read the activity columns of a non-empty backtest record.
    ///
    /// A window whose first and last dates coincide divides by zero years
    /// and yields infinite or `NaN` annual figures.
    pub fn from_record(record: &RowRecord) -> Result<Self> {
        let total_years = match record.date_span() {
            Some((first, last)) => {
                let days = (parse_date(last)? - parse_date(first)?).num_days();
                days as f64 / CALENDAR_DAYS_PER_YEAR
            }
            None => 0.0,
        };

        let positions = record.column_from_end(3)?;
        let turnovers = record.column_from_end(2)?;
        let fees = record.column_from_end(1)?;

        Ok(Self {
            total_years,
            avg_position: mean(&positions).unwrap_or(f64::NAN),
            annual_turnover: sum(&turnovers) / total_years,
            annual_fee: sum(&fees) / total_years,
        })
    }
}

/// Statistics row of one backtest series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRow {
    /// Strategy name.
    pub name: String,
    /// Series label (`Strategy`, `Index`, `Excess`).
    pub series: String,
    /// Statistics of the series.
    #[serde(flatten)]
    pub summary: PerformanceSummary,
    /// Window-wide trading activity.
    #[serde(flatten)]
    pub activity: TradingActivity,
}

/// Everything the strategy detail page shows for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyReport {
    /// Strategy name.
    pub name: String,
    /// Backtest curves and drawdown.
    pub backtest: BacktestSection,
    /// One row per configured backtest series.
    pub rows: Vec<StrategyRow>,
}

impl StrategyReport {
    /// Build the report of `name` over `range`.
    ///
    /// # Errors
    ///
    /// - `MissingSeries` if the payload lacks `backtest_ret`
    /// - `ShapeMismatch` if its index and values differ in length
    /// - `EmptyWindow` if nothing falls inside `range`
    /// - `MissingColumn` if rows lack the return or activity columns
    /// - `InvalidDate` if the window's boundary dates are malformed
    pub fn build(
        name: &str,
        payload: &StrategyPerfPayload,
        range: &DateRange,
        config: &ReportConfig,
    ) -> Result<Self> {
        let span = span!(Level::DEBUG, "strategy_report", strategy = %name);
        let _enter = span.enter();

        let record = window(
            require(payload.backtest_ret.as_ref(), "backtest_ret")?,
            range,
            "backtest_ret",
        )?;
        let backtest = BacktestSection::build(&record, config)?;
        let activity = TradingActivity::from_record(&record)?;

        let rows = config
            .backtest_series
            .iter()
            .enumerate()
            .map(|(position, series)| {
                Ok(StrategyRow {
                    name: name.to_string(),
                    series: series.clone(),
                    summary: PerformanceSummary::from_returns(&record.column(position)?),
                    activity,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            rows = record.len(),
            total_years = activity.total_years,
            "Built strategy report"
        );
        Ok(Self {
            name: name.to_string(),
            backtest,
            rows,
        })
    }
}
