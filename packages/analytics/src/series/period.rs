//! Named relative date windows ("year to date", "last 3 years", ...).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::filter::DateRange;
use crate::error::AnalyticsError;

/// ISO date format used by every index.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Period preset offered by the dashboards' period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PeriodPreset {
    /// Whole history.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Since January 1st of the reference year.
    #[serde(rename = "ytd")]
    YearToDate,
    /// Last 3 months.
    #[serde(rename = "3m")]
    ThreeMonths,
    /// Last year.
    #[serde(rename = "1y")]
    OneYear,
    /// Last 3 years.
    #[serde(rename = "3y")]
    ThreeYears,
    /// Last 5 years.
    #[serde(rename = "5y")]
    FiveYears,
}

impl PeriodPreset {
    /// Selector value of the preset.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::YearToDate => "ytd",
            Self::ThreeMonths => "3m",
            Self::OneYear => "1y",
            Self::ThreeYears => "3y",
            Self::FiveYears => "5y",
        }
    }

    /// First day of the window ending on `reference`, `None` for [`Self::All`].
    #[must_use]
    pub fn start_from(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let months_back = match self {
            Self::All => return None,
            Self::YearToDate => return NaiveDate::from_ymd_opt(reference.year(), 1, 1),
            Self::ThreeMonths => 3,
            Self::OneYear => 12,
            Self::ThreeYears => 36,
            Self::FiveYears => 60,
        };
        reference.checked_sub_months(Months::new(months_back))
    }

    /// Resolve the preset into a date window ending on `reference`.
    #[must_use]
    pub fn resolve(&self, reference: NaiveDate) -> DateRange {
        match self.start_from(reference) {
            None => DateRange::all(),
            Some(start) => DateRange::between(
                start.format(DATE_FORMAT).to_string(),
                reference.format(DATE_FORMAT).to_string(),
            ),
        }
    }
}

impl fmt::Display for PeriodPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodPreset {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "ytd" => Ok(Self::YearToDate),
            "3m" => Ok(Self::ThreeMonths),
            "1y" => Ok(Self::OneYear),
            "3y" => Ok(Self::ThreeYears),
            "5y" => Ok(Self::FiveYears),
            _ => Err(AnalyticsError::InvalidPreset(s.to_string())),
        }
    }
}

impl DateRange {
    /// Window of a preset ending on `reference`.
    #[must_use]
    pub fn from_preset(preset: PeriodPreset, reference: NaiveDate) -> Self {
        preset.resolve(reference)
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, AnalyticsError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AnalyticsError::InvalidDate(value.to_string()))
}
