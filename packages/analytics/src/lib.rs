// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::unreadable_literal,
        clippy::items_after_statements
    )
)]

//! FactorView Analytics - Performance Computation Core
//!
//! Pure numerical core of the factor and strategy dashboards: daily return
//! series in, NAV curves, drawdowns and risk/return statistics out, scoped
//! to a user-selected date window.
//!
//! # Layers (leaves first)
//!
//! - **metrics**: NAV, drawdown, annualized return/volatility, Sharpe,
//!   Calmar, IC statistics and display formatting
//! - **series**: date-range filter, period presets and the record shapes
//!   of the data endpoints
//! - **report**: factor/strategy detail reports, overview table and query
//!   reducers
//!
//! Ambient modules: `config` (YAML), `error` (error codes) and `telemetry`
//! (tracing subscriber setup).
//!
//! # Numeric conventions
//!
//! - `f64` throughout, summed left to right from `0.0`
//! - 252 trading periods per year
//! - zero risk-free rate
//! - degenerate inputs return `0.0` sentinels, except IC statistics of an
//!   empty series, which are `NaN`
//!
//! # Example
//!
//! ```
//! use factorview_analytics::{DateRange, PerformanceSummary, filter_by_date};
//!
//! let index = ["2024-01-02", "2024-01-03", "2024-01-04"];
//! let returns = [0.01, -0.02, 0.015];
//!
//! let window = filter_by_date(&returns, &index, &DateRange::since("2024-01-03"))?;
//! let summary = PerformanceSummary::from_returns(&window.values);
//! assert!(summary.max_drawdown < 0.0);
//! # Ok::<(), factorview_analytics::AnalyticsError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Configuration loading and validation.
pub mod config;

/// Error types and codes.
pub mod error;

/// Performance metrics over return series.
pub mod metrics;

/// Detail reports, overview table and query state.
pub mod report;

/// Date-indexed series handling.
pub mod series;

/// Logging initialisation.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{AnalyticsConfig, ConfigError, load_config, load_config_from_string};
pub use error::{AnalyticsError, ErrorCode, Result};
pub use metrics::{
    IcPoint, IcStats, PerformanceSummary, annualized_return, annualized_volatility, build_nav,
    calc_perf, calmar_ratio, drawdown, ic_stats, max_drawdown, sharpe_ratio,
};
pub use report::{FactorReport, QueryEvent, ReportQuery, StrategyReport, SummaryTable, TableEvent};
pub use series::{
    ColumnRecord, DateRange, FactorPerfPayload, Filtered, PeriodPreset, RowRecord,
    StrategyPerfPayload, SummaryPayload, filter_by_date,
};
