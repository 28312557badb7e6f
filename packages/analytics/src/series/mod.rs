//! Aligned time series: date filtering, period presets and the record
//! shapes served by the data endpoints.

mod filter;
mod period;
mod record;

pub use filter::{DateRange, Filtered, filter_by_date};
pub use period::{DATE_FORMAT, PeriodPreset, parse_date};
pub use record::{
    ColumnRecord, FactorPerfPayload, RowRecord, StrategyPerfPayload, SummaryPayload, require,
};
