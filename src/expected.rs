//! Expected frequencies
//!
//! Independence-model expected counts from the marginal sums of a
//! contingency table, plus the soft cell-count diagnostic for the
//! chi-square approximation.

use crate::constants::EXPECTED_CELL_MIN;
use crate::data::ContingencyTable;
use log::warn;

/// Compute expected frequencies under independence.
///
/// `expected[i][j] = row_total_i * col_total_j / n`. The result has the
/// same shape as the input and matching row and column sums. Assumes a
/// positive grand total, which the entry point validates.
pub fn expected_frequencies(observed: &ContingencyTable) -> ContingencyTable {
    let n = observed.total();
    let row_sums = observed.row_sums();
    let col_sums = observed.col_sums();

    let mut data = Vec::with_capacity(observed.rows * observed.cols);
    for r in &row_sums {
        for c in &col_sums {
            data.push(r * c / n);
        }
    }
    ContingencyTable::new(data, observed.rows, observed.cols)
}

/// Number of expected cells below the chi-square validity threshold.
pub fn low_expected_cells(expected: &ContingencyTable) -> usize {
    expected.data.iter().filter(|v| **v < EXPECTED_CELL_MIN).count()
}

/// Warn when the chi-square approximation's cell-count condition is not met.
///
/// Advisory only, the computation proceeds either way.
pub fn check_cell_counts(expected: &ContingencyTable) {
    let low = low_expected_cells(expected);
    if low > 0 {
        warn!(
            "{} expected cell(s) below {}, the chi-square approximation may be unreliable.",
            low, EXPECTED_CELL_MIN
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_frequencies() {
        // 2x2 table: [[10, 20], [30, 40]]
        let observed = ContingencyTable::new(vec![10.0, 20.0, 30.0, 40.0], 2, 2);
        let expected = expected_frequencies(&observed);
        let grand = 100.0;
        assert!((expected.get(0, 0) - 30.0 * 40.0 / grand).abs() < 1e-10);
        assert!((expected.get(0, 1) - 30.0 * 60.0 / grand).abs() < 1e-10);
        assert!((expected.get(1, 0) - 70.0 * 40.0 / grand).abs() < 1e-10);
        assert!((expected.get(1, 1) - 70.0 * 60.0 / grand).abs() < 1e-10);
    }

    #[test]
    fn test_expected_marginals_match_observed() {
        let observed =
            ContingencyTable::new(vec![10.0, 8.0, 6.0, 4.0, 2.0, 4.0, 6.0, 8.0], 2, 4);
        let expected = expected_frequencies(&observed);
        assert_eq!(expected.shape(), observed.shape());
        for (e, o) in expected.row_sums().iter().zip(observed.row_sums()) {
            assert!((e - o).abs() < 1e-9);
        }
        for (e, o) in expected.col_sums().iter().zip(observed.col_sums()) {
            assert!((e - o).abs() < 1e-9);
        }
    }

    #[test]
    fn test_low_expected_cells() {
        let large =
            ContingencyTable::new(vec![120.0, 85.0, 30.0, 15.0, 115.0, 90.0, 32.0, 18.0], 2, 4);
        assert_eq!(low_expected_cells(&expected_frequencies(&large)), 0);

        let small = ContingencyTable::new(vec![2.0, 3.0, 1.0, 1.0, 1.0, 4.0, 2.0, 1.0], 2, 4);
        assert!(low_expected_cells(&expected_frequencies(&small)) > 0);
    }
}
