//! Selector state of the overview pages and the query it sends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::QueryDefaults;
use crate::error::Result;
use crate::series::{DateRange, PeriodPreset, parse_date};

/// Optimizer selector value meaning "no optimizer".
pub const NO_OPTIMIZER: &str = "NA";

/// Parameters of an overview fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Stock pool.
    pub pool: String,
    /// Benchmark index code.
    pub benchmark_index: String,
    /// Optimizer index code, `None` when disabled.
    pub optimizer_index: Option<String>,
    /// First date of the window.
    pub start_date: Option<String>,
    /// Last date of the window.
    pub end_date: Option<String>,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self::from_defaults(&QueryDefaults::default())
    }
}

/// A selector change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum QueryEvent {
    /// Stock pool selected.
    Pool(String),
    /// Benchmark selected.
    Benchmark(String),
    /// Optimizer selected; [`NO_OPTIMIZER`] disables it.
    Optimizer(String),
    /// Period preset selected, resolved against a reference date.
    Period {
        /// Selected preset.
        preset: PeriodPreset,
        /// Last date of the window.
        reference: NaiveDate,
    },
    /// Start date typed; empty clears it.
    StartDate(String),
    /// End date typed; empty clears it.
    EndDate(String),
}

impl ReportQuery {
    /// Initial query from the configured selector defaults.
    #[must_use]
    pub fn from_defaults(defaults: &QueryDefaults) -> Self {
        Self {
            pool: defaults.pool.clone(),
            benchmark_index: defaults.benchmark_index.clone(),
            optimizer_index: Some(defaults.optimizer_index.clone()),
            start_date: None,
            end_date: None,
        }
    }

    /// Query after `event`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if a typed date is not `YYYY-MM-DD`.
    pub fn apply(self, event: QueryEvent) -> Result<Self> {
        let next = match event {
            QueryEvent::Pool(pool) => Self { pool, ..self },
            QueryEvent::Benchmark(benchmark_index) => Self {
                benchmark_index,
                ..self
            },
            QueryEvent::Optimizer(value) => Self {
                optimizer_index: (value != NO_OPTIMIZER).then_some(value),
                ..self
            },
            QueryEvent::Period { preset, reference } => {
                let range = preset.resolve(reference);
                Self {
                    start_date: range.start_date,
                    end_date: range.end_date,
                    ..self
                }
            }
            QueryEvent::StartDate(value) => Self {
                start_date: typed_date(&value)?,
                ..self
            },
            QueryEvent::EndDate(value) => Self {
                end_date: typed_date(&value)?,
                ..self
            },
        };
        debug!(
            pool = %next.pool,
            start = ?next.start_date,
            end = ?next.end_date,
            "Updated report query"
        );
        Ok(next)
    }

    /// Key/value pairs of the fetch query string; unset values are empty.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pool", self.pool.clone()),
            ("start_date", self.start_date.clone().unwrap_or_default()),
            ("end_date", self.end_date.clone().unwrap_or_default()),
            ("benchmark_index", self.benchmark_index.clone()),
            (
                "optimizer_index",
                self.optimizer_index.clone().unwrap_or_default(),
            ),
        ]
    }

    /// Date window of the query.
    #[must_use]
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

fn typed_date(value: &str) -> Result<Option<String>> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Ok(None);
    }
    parse_date(&value)?;
    Ok(Some(value))
}
