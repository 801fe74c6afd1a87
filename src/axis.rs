//! Axis resolution
//!
//! Locates the axis of the observed table that holds the two-level
//! evaluated variable, falling back to a caller hint when the table
//! is 2x2 and both axes qualify.

use crate::constants::TWO_LEVEL_AXIS_LEN;
use crate::data::ContingencyTable;
use crate::errors::TrendTestError;
use serde::{Deserialize, Serialize};

/// Table axis of the evaluated variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Rows,
    Cols,
}

impl Axis {
    /// Numeric index of the axis, rows first.
    pub fn index(&self) -> usize {
        match self {
            Axis::Rows => 0,
            Axis::Cols => 1,
        }
    }

    /// The other axis.
    pub fn opposite(&self) -> Axis {
        match self {
            Axis::Rows => Axis::Cols,
            Axis::Cols => Axis::Rows,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = TrendTestError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::Rows),
            1 => Ok(Axis::Cols),
            _ => Err(TrendTestError::ShapeMismatch(format!(
                "axis index must be 0 or 1, got {}",
                value
            ))),
        }
    }
}

/// Outcome of scanning the table for a length-2 axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDetection {
    /// Exactly one axis holds two levels.
    Unique(Axis),
    /// Both axes hold two levels, the caller must disambiguate.
    Ambiguous,
    /// No axis holds two levels.
    None,
}

/// Scan both axes of the table for the two-level evaluated variable.
pub fn detect_evaluated_axis(observed: &ContingencyTable) -> AxisDetection {
    match (
        observed.rows == TWO_LEVEL_AXIS_LEN,
        observed.cols == TWO_LEVEL_AXIS_LEN,
    ) {
        (true, true) => AxisDetection::Ambiguous,
        (true, false) => AxisDetection::Unique(Axis::Rows),
        (false, true) => AxisDetection::Unique(Axis::Cols),
        (false, false) => AxisDetection::None,
    }
}

/// Resolve the evaluated axis, folding in the caller hint where the
/// table alone cannot decide.
pub fn resolve_evaluated_axis(
    observed: &ContingencyTable,
    hint: Option<Axis>,
) -> Result<Axis, TrendTestError> {
    match detect_evaluated_axis(observed) {
        AxisDetection::Unique(axis) => Ok(axis),
        AxisDetection::Ambiguous => hint.ok_or(TrendTestError::AmbiguousAxis),
        AxisDetection::None => Err(TrendTestError::ShapeMismatch(format!(
            "observed table is {}x{}, one axis must hold exactly {} levels",
            observed.rows, observed.cols, TWO_LEVEL_AXIS_LEN
        ))),
    }
}
