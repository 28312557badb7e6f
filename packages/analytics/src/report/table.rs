//! Summary table of the factor overview page.
//!
//! The table is a value: filter changes go through [`TableFilter::apply`]
//! and sorting through [`SummaryTable::toggle_sort`], each returning a new
//! value instead of mutating page state.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::series::ColumnRecord;

/// One factor of the overview table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Factor name.
    pub name: String,
    /// Factor class.
    pub class_name: String,
    /// Mean IC.
    pub ic: f64,
    /// Long-short group return.
    pub group_pnl: f64,
    /// Backtest return.
    pub backtest_ret: f64,
}

impl SummaryRow {
    /// Read rows from a record keyed by factor name with `class_name`,
    /// `ic`, `group_pnl` and `backtest_ret` columns.
    pub fn from_record(record: &ColumnRecord) -> Result<Vec<Self>> {
        record.validate()?;
        let classes = record.text_column("class_name")?;
        let ic = record.numeric_column("ic")?;
        let group_pnl = record.numeric_column("group_pnl")?;
        let backtest_ret = record.numeric_column("backtest_ret")?;

        Ok(record
            .index
            .iter()
            .enumerate()
            .map(|(i, name)| Self {
                name: name.clone(),
                class_name: classes[i].clone(),
                ic: ic[i],
                group_pnl: group_pnl[i],
                backtest_ret: backtest_ret[i],
            })
            .collect())
    }

    /// Value of a numeric field.
    #[must_use]
    pub const fn value(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Ic => self.ic,
            NumericField::GroupPnl => self.group_pnl,
            NumericField::BacktestRet => self.backtest_ret,
        }
    }
}

/// Numeric columns that accept range filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    /// Mean IC.
    Ic,
    /// Long-short group return.
    GroupPnl,
    /// Backtest return.
    BacktestRet,
}

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryColumn {
    /// Factor name.
    Name,
    /// Factor class.
    ClassName,
    /// A numeric column.
    Numeric(NumericField),
}

/// Inclusive bounds; `None` leaves a side open.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound.
    pub min: Option<f64>,
    /// Upper bound.
    pub max: Option<f64>,
}

impl Bounds {
    /// Whether `value` passes. A missing cell (`NaN`) compares as `0`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let value = if value.is_nan() { 0.0 } else { value };
        !self.min.is_some_and(|min| value < min) && !self.max.is_some_and(|max| value > max)
    }

    const fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// A change to the table filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableEvent {
    /// Keep only these names; empty keeps all.
    SelectNames {
        /// Selected names.
        names: Vec<String>,
    },
    /// Keep only these classes; empty keeps all.
    SelectClasses {
        /// Selected classes.
        classes: Vec<String>,
    },
    /// Bound a numeric field.
    SetRange {
        /// Field to bound.
        field: NumericField,
        /// Lower bound.
        min: Option<f64>,
        /// Upper bound.
        max: Option<f64>,
    },
    /// Remove the bounds of a numeric field.
    ClearRange {
        /// Field to unbound.
        field: NumericField,
    },
    /// Drop every criterion.
    Reset,
}

/// Row selection criteria.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableFilter {
    /// Selected names; empty selects all.
    #[serde(default)]
    pub names: BTreeSet<String>,
    /// Selected classes; empty selects all.
    #[serde(default)]
    pub classes: BTreeSet<String>,
    /// Bounds per numeric field.
    #[serde(default)]
    pub ranges: BTreeMap<NumericField, Bounds>,
}

impl TableFilter {
    /// Filter after `event`.
    #[must_use]
    pub fn apply(mut self, event: TableEvent) -> Self {
        match event {
            TableEvent::SelectNames { names } => self.names = names.into_iter().collect(),
            TableEvent::SelectClasses { classes } => {
                self.classes = classes.into_iter().collect();
            }
            TableEvent::SetRange { field, min, max } => {
                let bounds = Bounds { min, max };
                if bounds.is_open() {
                    self.ranges.remove(&field);
                } else {
                    self.ranges.insert(field, bounds);
                }
            }
            TableEvent::ClearRange { field } => {
                self.ranges.remove(&field);
            }
            TableEvent::Reset => return Self::default(),
        }
        self
    }

    /// Whether `row` passes every criterion.
    #[must_use]
    pub fn matches(&self, row: &SummaryRow) -> bool {
        (self.names.is_empty() || self.names.contains(&row.name))
            && (self.classes.is_empty() || self.classes.contains(&row.class_name))
            && self
                .ranges
                .iter()
                .all(|(field, bounds)| bounds.contains(row.value(*field)))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// The other direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Overview table: all rows, the active filter and the sort state.
///
/// Like the page it backs, the table keeps one direction that flips on
/// every sort request, whichever column is clicked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
    filter: TableFilter,
    sorted_by: Option<(SummaryColumn, SortOrder)>,
    next_order: SortOrder,
}

impl SummaryTable {
    /// Unfiltered, unsorted table.
    #[must_use]
    pub fn new(rows: Vec<SummaryRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Table of the rows in `record`.
    pub fn from_record(record: &ColumnRecord) -> Result<Self> {
        Ok(Self::new(SummaryRow::from_record(record)?))
    }

    /// Active filter.
    #[must_use]
    pub const fn filter(&self) -> &TableFilter {
        &self.filter
    }

    /// Column and direction of the last sort.
    #[must_use]
    pub const fn sorted_by(&self) -> Option<(SummaryColumn, SortOrder)> {
        self.sorted_by
    }

    /// Table after a filter event.
    #[must_use]
    pub fn apply(self, event: TableEvent) -> Self {
        let filter = self.filter.apply(event);
        let table = Self { filter, ..self };
        debug!(
            rows = table.rows.len(),
            visible = table.visible_rows().len(),
            "Applied table filter"
        );
        table
    }

    /// Table sorted by `column` in the pending direction, which then flips.
    #[must_use]
    pub fn toggle_sort(mut self, column: SummaryColumn) -> Self {
        let order = self.next_order;
        self.rows.sort_by(|a, b| compare(a, b, column, order));
        self.sorted_by = Some((column, order));
        self.next_order = order.toggled();
        self
    }

    /// Rows passing the filter, in table order.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&SummaryRow> {
        self.rows.iter().filter(|row| self.filter.matches(row)).collect()
    }

    /// Distinct classes, for the class selector.
    #[must_use]
    pub fn classes(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|row| row.class_name.as_str()).collect()
    }
}

fn compare(a: &SummaryRow, b: &SummaryRow, column: SummaryColumn, order: SortOrder) -> Ordering {
    let directed = |ordering: Ordering| match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    };

    match column {
        SummaryColumn::Name => directed(a.name.cmp(&b.name)),
        SummaryColumn::ClassName => directed(a.class_name.cmp(&b.class_name)),
        SummaryColumn::Numeric(field) => {
            let (x, y) = (a.value(field), b.value(field));
            // Non-finite values trail in both directions
            match (x.is_finite(), y.is_finite()) {
                (true, true) => directed(x.total_cmp(&y)),
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => Ordering::Equal,
            }
        }
    }
}
