//! Rolling IC window configuration.

use serde::{Deserialize, Serialize};

use crate::metrics::{DEFAULT_ROLLING_MIN_PERIODS, DEFAULT_ROLLING_PERIOD};

/// Window of the rolling IC companion series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingIcConfig {
    /// Trailing window length in periods.
    #[serde(default = "default_period")]
    pub period: usize,
    /// Observations required before a value is emitted.
    #[serde(default = "default_min_periods")]
    pub min_periods: usize,
}

impl Default for RollingIcConfig {
    fn default() -> Self {
        Self {
            period: default_period(),
            min_periods: default_min_periods(),
        }
    }
}

const fn default_period() -> usize {
    DEFAULT_ROLLING_PERIOD
}

const fn default_min_periods() -> usize {
    DEFAULT_ROLLING_MIN_PERIODS
}
