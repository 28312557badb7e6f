//! Date-window filtering of aligned (values, index) series.
//!
//! Bounds compare ISO `YYYY-MM-DD` strings lexicographically; no calendar
//! parsing happens here.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// Inclusive date window. A missing or empty bound is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date kept (inclusive).
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last date kept (inclusive).
    #[serde(default)]
    pub end_date: Option<String>,
}

impl DateRange {
    /// The unbounded window.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start_date: None,
            end_date: None,
        }
    }

    /// Window between two inclusive bounds.
    #[must_use]
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start_date: Some(start.into()),
            end_date: Some(end.into()),
        }
    }

    /// Window open at the end.
    #[must_use]
    pub fn since(start: impl Into<String>) -> Self {
        Self {
            start_date: Some(start.into()),
            end_date: None,
        }
    }

    /// Window open at the start.
    #[must_use]
    pub fn until(end: impl Into<String>) -> Self {
        Self {
            start_date: None,
            end_date: Some(end.into()),
        }
    }

    fn start(&self) -> Option<&str> {
        self.start_date.as_deref().filter(|s| !s.is_empty())
    }

    fn end(&self) -> Option<&str> {
        self.end_date.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether the window has no effective bound.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.start().is_none() && self.end().is_none()
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: &str) -> bool {
        let after_start = self.start().is_none_or(|start| date >= start);
        let before_end = self.end().is_none_or(|end| date <= end);
        after_start && before_end
    }
}

/// Output of [`filter_by_date`]: values and index of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filtered<T> {
    /// Kept values, in input order.
    pub values: Vec<T>,
    /// Dates of the kept values.
    pub index: Vec<String>,
}

impl<T> Filtered<T> {
    /// Number of kept observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether nothing was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Restrict an aligned (values, index) pair to a date window.
///
/// Fails with [`AnalyticsError::ShapeMismatch`] when the two sequences differ
/// in length; it never truncates to the shorter one.
///
/// # Example
///
/// ```
/// use factorview_analytics::series::{DateRange, filter_by_date};
///
/// let index = ["2023-01-01", "2023-01-02", "2023-01-03"];
/// let kept = filter_by_date(&[1, 2, 3], &index, &DateRange::since("2023-01-02")).unwrap();
/// assert_eq!(kept.values, vec![2, 3]);
/// ```
pub fn filter_by_date<T, S>(values: &[T], index: &[S], range: &DateRange) -> Result<Filtered<T>>
where
    T: Clone,
    S: AsRef<str>,
{
    if values.len() != index.len() {
        return Err(AnalyticsError::ShapeMismatch {
            values: values.len(),
            index: index.len(),
        });
    }

    let (values, index) = values
        .iter()
        .zip(index)
        .filter(|(_, date)| range.contains(date.as_ref()))
        .map(|(value, date)| (value.clone(), date.as_ref().to_string()))
        .unzip();

    Ok(Filtered { values, index })
}
