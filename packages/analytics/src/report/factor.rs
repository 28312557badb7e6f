//! Factor detail report.
//!
//! Filters the IC, group-return and backtest-return series of one factor to
//! a date window and derives everything the detail page charts:
//!
//! - IC bars with the rolling IC line, and the IC statistics block
//! - one NAV curve and one performance row per quantile group
//! - backtest NAV curves with the excess drawdown

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, span, warn};

use super::backtest::{BacktestSection, Curve};
use crate::config::{ReportConfig, RollingIcConfig};
use crate::error::{AnalyticsError, Result};
use crate::metrics::{IcPoint, IcStats, PerformanceSummary, build_nav};
use crate::series::{DateRange, FactorPerfPayload, RowRecord, require};

/// A curve's performance statistics, labelled like its legend entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    /// Factor or strategy name.
    pub name: String,
    /// Series label (`Group 3`, `LS Hedge`, `Excess`, ...).
    pub series: String,
    /// Statistics of the series.
    #[serde(flatten)]
    pub summary: PerformanceSummary,
}

/// IC chart data and statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcSection {
    /// Dates of the window.
    pub index: Vec<String>,
    /// `(ic, rolling)` per date.
    pub points: Vec<IcPoint>,
    /// Statistics of the instantaneous IC.
    pub stats: IcStats,
}

impl IcSection {
    /// Build from a filtered IC record.
    ///
    /// Records without a rolling column get one computed over the window.
    pub fn build(record: &RowRecord, rolling: &RollingIcConfig) -> Result<Self> {
        let points = if record.width() >= 2 {
            record.ic_points()?
        } else {
            IcPoint::series_with_rolling(
                &record.column(0)?,
                rolling.period,
                rolling.min_periods,
            )
        };
        let stats = IcStats::from_points(&points);

        Ok(Self {
            index: record.index.clone(),
            points,
            stats,
        })
    }
}

/// Quantile group curves and statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSection {
    /// Dates of the window.
    pub index: Vec<String>,
    /// One NAV curve per group column.
    pub curves: Vec<Curve>,
    /// One statistics row per group column.
    pub rows: Vec<PerformanceRow>,
}

impl GroupSection {
    /// Build from a filtered group-return record.
    pub fn build(name: &str, record: &RowRecord, config: &ReportConfig) -> Result<Self> {
        let mut curves = Vec::with_capacity(record.width());
        let mut rows = Vec::with_capacity(record.width());

        for position in 0..record.width() {
            let label = config.group_label(position);
            let returns = record.column(position)?;
            rows.push(PerformanceRow {
                name: name.to_string(),
                series: label.clone(),
                summary: PerformanceSummary::from_returns(&returns),
            });
            curves.push(Curve {
                name: label,
                values: build_nav(&returns),
            });
        }

        Ok(Self {
            index: record.index.clone(),
            curves,
            rows,
        })
    }
}

/// Everything the factor detail page shows for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorReport {
    /// Factor name.
    pub name: String,
    /// IC chart and statistics.
    pub ic: IcSection,
    /// Quantile group curves and statistics.
    pub group: GroupSection,
    /// Backtest curves and drawdown.
    pub backtest: BacktestSection,
}

impl FactorReport {
    /// Build the report of `name` over `range`.
    ///
    /// # Errors
    ///
    /// - `MissingSeries` if the payload lacks `ic`, `group` or `backtest_ret`
    /// - `ShapeMismatch` if a series' index and values differ in length
    /// - `EmptyWindow` if any series has no observation inside `range`
    /// - `MissingColumn` if a row is shorter than the layout requires
    pub fn build(
        name: &str,
        payload: &FactorPerfPayload,
        range: &DateRange,
        report: &ReportConfig,
        rolling: &RollingIcConfig,
    ) -> Result<Self> {
        let span = span!(Level::DEBUG, "factor_report", factor = %name);
        let _enter = span.enter();

        let ic = window(require(payload.ic.as_ref(), "ic")?, range, "ic")?;
        let group = window(require(payload.group.as_ref(), "group")?, range, "group")?;
        let backtest = window(
            require(payload.backtest_ret.as_ref(), "backtest_ret")?,
            range,
            "backtest_ret",
        )?;

        let built = Self {
            name: name.to_string(),
            ic: IcSection::build(&ic, rolling)?,
            group: GroupSection::build(name, &group, report)?,
            backtest: BacktestSection::build(&backtest, report)?,
        };
        debug!(
            ic_rows = ic.len(),
            group_rows = group.len(),
            backtest_rows = backtest.len(),
            groups = built.group.curves.len(),
            "Built factor report"
        );
        Ok(built)
    }
}

/// Filter one payload series to the window, rejecting empty results.
pub(crate) fn window(record: &RowRecord, range: &DateRange, series: &str) -> Result<RowRecord> {
    let filtered = record.filter(range).inspect_err(|e| {
        warn!(series, error = %e, "Series rejected");
    })?;
    if filtered.is_empty() {
        warn!(
            series,
            start = ?range.start_date,
            end = ?range.end_date,
            "No observations in date range"
        );
        return Err(AnalyticsError::EmptyWindow(series.to_string()));
    }
    Ok(filtered)
}
