//! Page-level reports assembled from the metrics and series layers.
//!
//! - [`FactorReport`] / [`StrategyReport`]: detail pages over a date window
//! - [`SummaryTable`]: overview table with filter and sort reducers
//! - [`ReportQuery`]: overview selector state and its fetch parameters

mod backtest;
mod factor;
mod query;
mod strategy;
mod table;

pub use backtest::{BacktestSection, Curve};
pub use factor::{FactorReport, GroupSection, IcSection, PerformanceRow};
pub use query::{NO_OPTIMIZER, QueryEvent, ReportQuery};
pub use strategy::{StrategyReport, StrategyRow, TradingActivity};
pub use table::{
    Bounds, NumericField, SortOrder, SummaryColumn, SummaryRow, SummaryTable, TableEvent,
    TableFilter,
};
