//! Errors
//!
//! Custom error types used throughout the `trend_chi2` crate.
use thiserror::Error;

/// Errors that can occur when running the trend test.
#[derive(Debug, Error)]
pub enum TrendTestError {
    /// Table and tendency shapes cannot be reconciled.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
    /// An observed count is negative or non-finite.
    #[error("Observed counts must be finite and non-negative, found {0}.")]
    InvalidCount(f64),
    /// A 2x2 table needs the evaluated axis spelled out.
    #[error("Observed table is 2x2, specify the axis of the evaluated variable (rows or columns).")]
    AmbiguousAxis,
    /// The statistic's denominator vanished.
    #[error("Trend statistic is undefined: {0}")]
    DegenerateInput(String),
}
