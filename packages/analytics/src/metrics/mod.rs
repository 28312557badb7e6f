//! Performance metrics over daily return series.
//!
//! Implements the dashboard's performance math:
//! - NAV curve (compounded unit investment)
//! - Drawdown curve and maximum drawdown
//! - Annualized return and volatility (252 periods per year)
//! - Sharpe ratio (zero risk-free rate) and Calmar ratio
//! - Information-coefficient statistics
//!
//! Everything here is a pure function of its input slice.

mod constants;
mod format;
mod ic;
mod math;
mod nav;
mod returns;
mod summary;

pub use constants::{
    CALENDAR_DAYS_PER_YEAR, DEFAULT_ROLLING_MIN_PERIODS, DEFAULT_ROLLING_PERIOD,
    TRADING_DAYS_PER_YEAR,
};
pub use format::{NOT_AVAILABLE, format_fixed, format_pct, format_pct_with, format_ratio};
pub use ic::{IcPoint, IcStats, ic_stats};
pub use math::{mean, rolling_mean, sum};
pub use nav::{build_nav, drawdown, drawdown_from_nav, max_drawdown, max_drawdown_from_nav};
pub use returns::{annualized_return, annualized_volatility, calmar_ratio, sharpe_ratio};
pub use summary::{PerformanceSummary, calc_perf};
