//! Aligned time-series records as served by the data endpoints.
//!
//! Two shapes recur:
//!
//! - **Row-oriented** (`RowRecord`): `{ index: [date...], values: [[v0, v1, ...], ...] }`
//!   for IC, group-return and backtest-return series, where tuple position
//!   carries meaning.
//! - **Column-oriented** (`ColumnRecord`): `{ index: [key...], values: { field: [v...] } }`
//!   for factor/strategy summary tables.
//!
//! Upstream `NaN`s arrive as JSON `null`. Numeric row columns read `null` as
//! `0`, the same coercion the dashboards apply when doing arithmetic on it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::filter::{DateRange, filter_by_date};
use crate::error::{AnalyticsError, Result};
use crate::metrics::IcPoint;

/// Row-oriented record: one tuple of numbers per date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    /// ISO dates, one per row.
    #[serde(default)]
    pub index: Vec<String>,
    /// One tuple per date.
    #[serde(default)]
    pub values: Vec<Vec<Option<f64>>>,
}

impl RowRecord {
    /// Build a record, rejecting misaligned input.
    pub fn new(index: Vec<String>, values: Vec<Vec<Option<f64>>>) -> Result<Self> {
        let record = Self { index, values };
        record.validate()?;
        Ok(record)
    }

    /// Build a single-column record from plain numbers.
    pub fn from_column(index: Vec<String>, column: &[f64]) -> Result<Self> {
        Self::new(index, column.iter().map(|v| vec![Some(*v)]).collect())
    }

    /// Check that index and values are aligned.
    pub fn validate(&self) -> Result<()> {
        if self.values.len() != self.index.len() {
            return Err(AnalyticsError::ShapeMismatch {
                values: self.values.len(),
                index: self.index.len(),
            });
        }
        Ok(())
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the record has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Tuple width of the first row (`0` when empty).
    #[must_use]
    pub fn width(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Values at tuple position `position` of every row.
    pub fn column(&self, position: usize) -> Result<Vec<f64>> {
        self.values
            .iter()
            .enumerate()
            .map(|(row, values)| match values.get(position) {
                Some(value) => Ok(value.unwrap_or(0.0)),
                None => Err(AnalyticsError::MissingColumn {
                    row,
                    position: position as isize,
                    len: values.len(),
                }),
            })
            .collect()
    }

    /// Values at the `offset`-th position from the end of every row
    /// (`1` is the last element).
    pub fn column_from_end(&self, offset: usize) -> Result<Vec<f64>> {
        self.values
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .len()
                    .checked_sub(offset)
                    .and_then(|position| values.get(position))
                    .map(|value| value.unwrap_or(0.0))
                    .ok_or_else(|| AnalyticsError::MissingColumn {
                        row,
                        position: -(offset as isize),
                        len: values.len(),
                    })
            })
            .collect()
    }

    /// Instantaneous IC at position 0 with the rolling IC at position 1 when present.
    pub fn ic_points(&self) -> Result<Vec<IcPoint>> {
        let ics = self.column(0)?;
        Ok(ics
            .into_iter()
            .zip(&self.values)
            .map(|(ic, row)| IcPoint {
                ic,
                rolling: row.get(1).copied().flatten(),
            })
            .collect())
    }

    /// Keep the rows whose date falls inside `range`.
    pub fn filter(&self, range: &DateRange) -> Result<Self> {
        let filtered = filter_by_date(&self.values, &self.index, range)?;
        debug!(
            rows = self.len(),
            kept = filtered.len(),
            "Filtered row record"
        );
        Ok(Self {
            index: filtered.index,
            values: filtered.values,
        })
    }

    /// First and last dates, if any.
    #[must_use]
    pub fn date_span(&self) -> Option<(&str, &str)> {
        Some((self.index.first()?.as_str(), self.index.last()?.as_str()))
    }
}

/// Column-oriented record: named columns sharing one index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnRecord {
    /// Row keys (factor names, strategy names or dates).
    #[serde(default)]
    pub index: Vec<String>,
    /// Column name to column values.
    #[serde(default)]
    pub values: BTreeMap<String, Vec<Value>>,
}

impl ColumnRecord {
    /// Check that every column matches the index length.
    pub fn validate(&self) -> Result<()> {
        for column in self.values.values() {
            if column.len() != self.index.len() {
                return Err(AnalyticsError::ShapeMismatch {
                    values: column.len(),
                    index: self.index.len(),
                });
            }
        }
        Ok(())
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the record has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn raw_column(&self, name: &str) -> Result<&[Value]> {
        self.values
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| AnalyticsError::MissingSeries(name.to_string()))
    }

    /// Numbers of a column; `null` and non-numeric cells read as `NaN`.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self
            .raw_column(name)?
            .iter()
            .map(|v| v.as_f64().unwrap_or(f64::NAN))
            .collect())
    }

    /// Text of a column; `null` reads as an empty string.
    pub fn text_column(&self, name: &str) -> Result<Vec<String>> {
        Ok(self
            .raw_column(name)?
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect())
    }

    /// Keep the rows whose index key falls inside `range`.
    pub fn filter(&self, range: &DateRange) -> Result<Self> {
        self.validate()?;
        let keep: Vec<bool> = self.index.iter().map(|d| range.contains(d)).collect();
        let pick = |column: &[Value]| -> Vec<Value> {
            column
                .iter()
                .zip(&keep)
                .filter(|(_, kept)| **kept)
                .map(|(value, _)| value.clone())
                .collect()
        };

        Ok(Self {
            index: self
                .index
                .iter()
                .zip(&keep)
                .filter(|(_, kept)| **kept)
                .map(|(date, _)| date.clone())
                .collect(),
            values: self
                .values
                .iter()
                .map(|(name, column)| (name.clone(), pick(column)))
                .collect(),
        })
    }
}

/// Payload of a factor detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorPerfPayload {
    /// `[ic, rolling_ic]` per date.
    #[serde(default)]
    pub ic: Option<RowRecord>,
    /// Quantile group returns per date, hedge column last.
    #[serde(default)]
    pub group: Option<RowRecord>,
    /// Strategy, index and excess returns, then holding count, turnover and fee.
    #[serde(default)]
    pub backtest_ret: Option<RowRecord>,
}

impl FactorPerfPayload {
    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Payload of a strategy detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyPerfPayload {
    /// Strategy, index and excess returns, then holding count, turnover and fee.
    #[serde(default)]
    pub backtest_ret: Option<RowRecord>,
}

impl StrategyPerfPayload {
    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Payload of a summary endpoint: named column-oriented tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryPayload {
    tables: BTreeMap<String, ColumnRecord>,
}

impl SummaryPayload {
    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// A named table (`factor_info`, `strategy_info`, ...).
    pub fn table(&self, name: &str) -> Result<&ColumnRecord> {
        self.tables
            .get(name)
            .ok_or_else(|| AnalyticsError::MissingSeries(name.to_string()))
    }
}

/// Unwrap an optional payload series.
pub fn require<'a>(series: Option<&'a RowRecord>, name: &str) -> Result<&'a RowRecord> {
    series.ok_or_else(|| AnalyticsError::MissingSeries(name.to_string()))
}
