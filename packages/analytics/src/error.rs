//! Error types for the analytics core.
//!
//! Only input-shape problems are errors. Degenerate numeric inputs (empty
//! series, zero volatility) resolve to documented sentinel values instead.
//!
//! | Code | Usage |
//! |------|-------|
//! | `SHAPE_MISMATCH` | Paired values/index sequences differ in length |
//! | `MISSING_COLUMN` | Row tuple too short for the requested position |
//! | `MISSING_SERIES` | Payload lacks a required series or column |
//! | `EMPTY_WINDOW` | No observations left after date filtering |
//! | `INVALID_DATE` | Date string is not `YYYY-MM-DD` |
//! | `INVALID_PRESET` | Unknown period preset |
//! | `INVALID_PAYLOAD` | JSON payload could not be decoded |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Paired sequences differ in length.
    ShapeMismatch,
    /// Row tuple too short.
    MissingColumn,
    /// Required series absent.
    MissingSeries,
    /// Date window selects nothing.
    EmptyWindow,
    /// Malformed date.
    InvalidDate,
    /// Unknown period preset.
    InvalidPreset,
    /// Undecodable payload.
    InvalidPayload,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::ShapeMismatch => "SHAPE_MISMATCH",
            Self::MissingColumn => "MISSING_COLUMN",
            Self::MissingSeries => "MISSING_SERIES",
            Self::EmptyWindow => "EMPTY_WINDOW",
            Self::InvalidDate => "INVALID_DATE",
            Self::InvalidPreset => "INVALID_PRESET",
            Self::InvalidPayload => "INVALID_PAYLOAD",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Errors raised while shaping input series.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Values and index are not aligned.
    #[error("shape mismatch: {values} values against {index} index entries")]
    ShapeMismatch {
        /// Number of values.
        values: usize,
        /// Number of index entries.
        index: usize,
    },

    /// A row has no element at the requested position.
    #[error("row {row} has {len} columns, position {position} requested")]
    MissingColumn {
        /// Row number.
        row: usize,
        /// Requested tuple position; negative positions count from the end.
        position: isize,
        /// Actual row length.
        len: usize,
    },

    /// A named series or column is absent.
    #[error("missing series: {0}")]
    MissingSeries(String),

    /// The date window left a series empty.
    #[error("no observations of '{0}' in the selected date range")]
    EmptyWindow(String),

    /// A date string failed to parse.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// An unknown period preset.
    #[error("invalid period preset '{0}'")]
    InvalidPreset(String),

    /// JSON decoding failed.
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalyticsError {
    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            Self::MissingColumn { .. } => ErrorCode::MissingColumn,
            Self::MissingSeries(_) => ErrorCode::MissingSeries,
            Self::EmptyWindow(_) => ErrorCode::EmptyWindow,
            Self::InvalidDate(_) => ErrorCode::InvalidDate,
            Self::InvalidPreset(_) => ErrorCode::InvalidPreset,
            Self::Json(_) => ErrorCode::InvalidPayload,
        }
    }
}

/// Result alias for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AnalyticsError::ShapeMismatch {
            values: 3,
            index: 2,
        };
        assert_eq!(err.code(), ErrorCode::ShapeMismatch);
        assert_eq!(err.code().to_string(), "SHAPE_MISMATCH");
        assert!(err.to_string().contains("3 values against 2"));
    }

    #[test]
    fn test_json_error_maps_to_invalid_payload() {
        let Err(source) = serde_json::from_str::<Vec<f64>>("[1,") else {
            panic!("truncated JSON should fail");
        };
        let err = AnalyticsError::from(source);
        assert_eq!(err.code(), ErrorCode::InvalidPayload);
    }

    #[test]
    fn test_code_serializes_as_reason() {
        let json = match serde_json::to_string(&ErrorCode::EmptyWindow) {
            Ok(s) => s,
            Err(e) => panic!("code should serialize: {e}"),
        };
        assert_eq!(json, "\"EMPTY_WINDOW\"");
    }
}
