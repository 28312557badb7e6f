//! Information-coefficient statistics.

use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_ROLLING_MIN_PERIODS, DEFAULT_ROLLING_PERIOD};
use super::math::{mean, population_std_dev, rolling_mean};

/// One period of an IC series: the instantaneous IC and its rolling mean.
///
/// Serialized as the `[ic, rolling]` pair used by the IC endpoints; a `null`
/// IC reads as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(Option<f64>, Option<f64>)", into = "(f64, Option<f64>)")]
pub struct IcPoint {
    /// Instantaneous IC.
    pub ic: f64,
    /// Rolling-window mean IC, absent until the window is warm.
    pub rolling: Option<f64>,
}

impl From<(Option<f64>, Option<f64>)> for IcPoint {
    fn from((ic, rolling): (Option<f64>, Option<f64>)) -> Self {
        Self {
            ic: ic.unwrap_or(0.0),
            rolling,
        }
    }
}

impl From<IcPoint> for (f64, Option<f64>) {
    fn from(point: IcPoint) -> Self {
        (point.ic, point.rolling)
    }
}

impl IcPoint {
    /// Pair each IC with its trailing mean over `period` observations,
    /// emitted once `min_periods` observations are available.
    #[must_use]
    pub fn series_with_rolling(ics: &[f64], period: usize, min_periods: usize) -> Vec<Self> {
        ics.iter()
            .zip(rolling_mean(ics, period, min_periods))
            .map(|(&ic, rolling)| Self { ic, rolling })
            .collect()
    }

    /// [`Self::series_with_rolling`] with the default 252/60 window.
    #[must_use]
    pub fn series(ics: &[f64]) -> Vec<Self> {
        Self::series_with_rolling(ics, DEFAULT_ROLLING_PERIOD, DEFAULT_ROLLING_MIN_PERIODS)
    }
}

/// Aggregate statistics of an IC series.
///
/// An empty series has no defined statistics: every field is `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IcStats {
    /// Mean IC.
    #[serde(rename = "ic")]
    pub mean_ic: f64,
    /// Mean IC over its population standard deviation.
    pub icir: f64,
    /// t-statistic of the mean IC.
    #[serde(rename = "tvalue")]
    pub t_stat: f64,
    /// Share of periods with a positive IC.
    pub positive_ratio: f64,
    /// Share of periods with a negative IC.
    pub negative_ratio: f64,
}

impl IcStats {
    /// Compute statistics from the instantaneous component of each point.
    #[must_use]
    pub fn from_points(points: &[IcPoint]) -> Self {
        let ics: Vec<f64> = points.iter().map(|p| p.ic).collect();
        Self::from_ics(&ics)
    }

    /// Compute statistics from bare IC values.
    #[must_use]
    pub fn from_ics(ics: &[f64]) -> Self {
        let n = ics.len() as f64;
        let mean_ic = mean(ics).unwrap_or(f64::NAN);
        let std_ic = population_std_dev(ics, mean_ic).unwrap_or(f64::NAN);

        let positive = ics.iter().filter(|v| **v > 0.0).count() as f64;
        let negative = ics.iter().filter(|v| **v < 0.0).count() as f64;

        Self {
            mean_ic,
            icir: mean_ic / std_ic,
            t_stat: mean_ic / (std_ic / n.sqrt()),
            positive_ratio: positive / n,
            negative_ratio: negative / n,
        }
    }

    /// Whether every statistic is a finite number.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        [
            self.mean_ic,
            self.icir,
            self.t_stat,
            self.positive_ratio,
            self.negative_ratio,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// IC statistics of a sequence of `(IC, rolling IC)` points.
#[must_use]
pub fn ic_stats(points: &[IcPoint]) -> IcStats {
    IcStats::from_points(points)
}
