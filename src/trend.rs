//! Cochran-Armitage trend test
//!
//! Tests whether the proportion of a two-level categorical variable
//! shifts monotonically across the ordered categories of a trend
//! variable, given a 2xK (or Kx2) contingency table and a numeric
//! tendency score per category.

use crate::axis::{resolve_evaluated_axis, Axis};
use crate::constants::TREND_DOF;
use crate::data::ContingencyTable;
use crate::errors::TrendTestError;
use crate::expected::{check_cell_counts, expected_frequencies};
use crate::pvalue::chi2_survival;
use serde::{Deserialize, Serialize};

/// Outcome of the trend test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendTest {
    /// The chi-square test statistic.
    pub statistic: f64,
    /// Upper-tail probability of the statistic.
    pub p_value: f64,
    /// Degrees of freedom, always 1 for this test.
    pub dof: u32,
    /// Expected frequencies under independence, same shape as the
    /// observed table.
    pub expected: ContingencyTable,
}

/// Apply a chi-square Cochran-Armitage trend test to a contingency table.
///
/// The evaluated variable must be categorical with exactly two levels, so
/// one axis of `observed` must have length 2. When only one axis
/// qualifies it is detected automatically; a 2x2 table needs the `axis`
/// parameter to name the evaluated axis. The tendency scores order the
/// trend categories and must line up with the other axis. A monotonic
/// evolution of the scores is assumed, not checked.
///
/// Emits a `log::warn!` when any expected cell falls below 5, since the
/// chi-square approximation is unreliable there; the result is returned
/// regardless.
///
/// * `observed` - Contingency table of observed counts.
/// * `tendencies` - Numeric score per trend category.
/// * `axis` - Evaluated-variable axis, only consulted for 2x2 tables.
pub fn chisquare_trend_contingency(
    observed: &ContingencyTable,
    tendencies: &[f64],
    axis: Option<Axis>,
) -> Result<TrendTest, TrendTestError> {
    let axis_id = resolve_evaluated_axis(observed, axis)?;
    validate_tendencies(observed, tendencies, axis_id)?;
    validate_counts(observed)?;

    let expected = expected_frequencies(observed);
    check_cell_counts(&expected);

    let statistic = trend_statistic(observed, &expected, tendencies, axis_id)?;
    let p_value = chi2_survival(statistic, TREND_DOF);

    Ok(TrendTest {
        statistic,
        p_value,
        dof: TREND_DOF,
        expected,
    })
}

fn validate_counts(observed: &ContingencyTable) -> Result<(), TrendTestError> {
    for &v in &observed.data {
        if !v.is_finite() || v < 0.0 {
            return Err(TrendTestError::InvalidCount(v));
        }
    }
    if observed.total() <= 0.0 {
        return Err(TrendTestError::DegenerateInput(
            "the table has no observations".to_string(),
        ));
    }
    Ok(())
}

fn validate_tendencies(
    observed: &ContingencyTable,
    tendencies: &[f64],
    axis: Axis,
) -> Result<(), TrendTestError> {
    let trend_len = observed.axis_len(axis.opposite());
    if tendencies.len() != trend_len {
        return Err(TrendTestError::ShapeMismatch(format!(
            "{} tendency values for {} trend categories",
            tendencies.len(),
            trend_len
        )));
    }
    Ok(())
}

/// The trend statistic itself.
///
/// With `n` the grand total, `t_k` the tendency scores, `O_0k`/`E_0k` the
/// first evaluated-level lane of the observed/expected tables, `N_k` the
/// per-category marginals and `n_1, n_2` the two evaluated-level
/// marginals:
///
/// ```text
/// chi2 = n^3 * (sum_k t_k (O_0k - E_0k))^2
///        / ( n_1 n_2 ( n sum_k N_k t_k^2 - (sum_k N_k t_k)^2 ) )
/// ```
fn trend_statistic(
    observed: &ContingencyTable,
    expected: &ContingencyTable,
    tendencies: &[f64],
    axis: Axis,
) -> Result<f64, TrendTestError> {
    let n = observed.total();
    let observed_first = observed.level_slice(axis, 0);
    let expected_first = expected.level_slice(axis, 0);
    let category_totals = observed.axis_marginals(axis);
    let level_totals = observed.axis_marginals(axis.opposite());

    let contrast: f64 = tendencies
        .iter()
        .zip(observed_first.iter().zip(&expected_first))
        .map(|(t, (o, e))| t * (o - e))
        .sum();

    let weighted: f64 = category_totals.iter().zip(tendencies).map(|(m, t)| m * t).sum();
    let weighted_sq: f64 = category_totals
        .iter()
        .zip(tendencies)
        .map(|(m, t)| m * t * t)
        .sum();

    let level_product: f64 = level_totals.iter().product();
    let denominator = level_product * (n * weighted_sq - weighted * weighted);

    if denominator == 0.0 || !denominator.is_finite() {
        return Err(TrendTestError::DegenerateInput(format!(
            "denominator is {}; tendency scores must vary and both levels of the evaluated variable need observations",
            denominator
        )));
    }

    Ok(n.powi(3) * contrast * contrast / denominator)
}
