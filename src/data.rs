use serde::{Deserialize, Serialize};
use std::fmt;

use crate::axis::Axis;
use crate::errors::TrendTestError;

/// Owned row major table of counts.
///
/// Holds a dense table of values in a single contiguous block, row by row.
/// The same container carries both the observed contingency table handed in
/// by the caller and the expected-frequency table returned by the test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContingencyTable {
    /// The raw data in row-major order.
    pub data: Vec<f64>,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl ContingencyTable {
    /// Create a new table from a flat row-major vector.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "Data length must match rows * cols");
        ContingencyTable { data, rows, cols }
    }

    /// Build a table from nested rows, rejecting ragged or empty input.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, TrendTestError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(TrendTestError::ShapeMismatch(
                "table must have at least one row and one column".to_string(),
            ));
        }
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(TrendTestError::ShapeMismatch(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(ContingencyTable {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Get a single item of the table.
    ///
    /// * `i` - The ith row of the data to get.
    /// * `j` - the jth column of the data to get.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    /// The (rows, cols) shape of the table.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Length of the given axis.
    pub fn axis_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rows => self.rows,
            Axis::Cols => self.cols,
        }
    }

    /// Grand total over all cells.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Per-row totals.
    pub fn row_sums(&self) -> Vec<f64> {
        self.data
            .chunks_exact(self.cols)
            .map(|row| row.iter().sum())
            .collect()
    }

    /// Per-column totals.
    pub fn col_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.cols];
        for row in self.data.chunks_exact(self.cols) {
            for (s, v) in sums.iter_mut().zip(row) {
                *s += v;
            }
        }
        sums
    }

    /// Marginal totals obtained by summing out the given axis.
    ///
    /// Summing out `Rows` leaves one total per column and vice versa.
    pub fn axis_marginals(&self, axis: Axis) -> Vec<f64> {
        match axis {
            Axis::Rows => self.col_sums(),
            Axis::Cols => self.row_sums(),
        }
    }

    /// The lane of values at `index` along the given axis.
    ///
    /// `level_slice(Axis::Rows, 0)` is the first row, `level_slice(Axis::Cols, 0)`
    /// the first column.
    pub fn level_slice(&self, axis: Axis, index: usize) -> Vec<f64> {
        match axis {
            Axis::Rows => self.data[index * self.cols..(index + 1) * self.cols].to_vec(),
            Axis::Cols => self.data.iter().skip(index).step_by(self.cols).copied().collect(),
        }
    }
}

impl fmt::Display for ContingencyTable {
    /// Format a ContingencyTable.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut val = String::new();
        for i in 0..self.rows {
            for j in 0..self.cols {
                val.push_str(self.get(i, j).to_string().as_str());
                if j == (self.cols - 1) {
                    val.push('\n');
                } else {
                    val.push(' ');
                }
            }
        }
        write!(f, "{}", val)
    }
}
