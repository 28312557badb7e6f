//! Numeric constants for performance metric calculations.

/// Periods per year assumed by every annualized estimator (trading days).
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Starting value of every NAV curve.
pub const NAV_BASE: f64 = 1.0;

/// Default trailing window of the rolling IC companion series.
pub const DEFAULT_ROLLING_PERIOD: usize = 252;

/// Default minimum observations before the rolling IC emits a value.
pub const DEFAULT_ROLLING_MIN_PERIODS: usize = 60;

/// Calendar days per year used to measure backtest spans.
pub const CALENDAR_DAYS_PER_YEAR: f64 = 365.0;

/// Scale from a decimal fraction to percent.
pub const HUNDRED: f64 = 100.0;
