//! P-value
//!
//! Upper-tail probability of the chi-square distribution.

use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Survival function of the chi-square distribution with `dof` degrees
/// of freedom: `P(X > statistic) = 1 - CDF(statistic)`.
///
/// Always within `[0, 1]`; a statistic of zero maps to 1 and large
/// statistics approach 0. A zero `dof` yields NaN since the
/// distribution is undefined there.
pub fn chi2_survival(statistic: f64, dof: u32) -> f64 {
    if dof == 0 {
        return f64::NAN;
    }
    if statistic <= 0.0 {
        return 1.0;
    }
    let dist = ChiSquared::new(f64::from(dof)).unwrap();
    (1.0 - dist.cdf(statistic)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survival_bounds() {
        // statistic = 0 -> p = 1
        assert!((chi2_survival(0.0, 1) - 1.0).abs() < 1e-10);

        // Large statistic -> p near 0
        assert!(chi2_survival(100.0, 1) < 1e-10);
    }

    #[test]
    fn test_survival_reference_value() {
        // 95th percentile of the chi-square distribution at 1 dof.
        let p = chi2_survival(3.841458820694124, 1);
        assert!((p - 0.05).abs() < 1e-7);
    }

    #[test]
    fn test_survival_monotone_in_statistic() {
        let mut last = 1.0;
        for s in [0.0, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0] {
            let p = chi2_survival(s, 1);
            assert!((0.0..=1.0).contains(&p));
            assert!(p <= last);
            last = p;
        }
    }

    #[test]
    fn test_survival_zero_dof_is_nan() {
        assert!(chi2_survival(1.0, 0).is_nan());
    }
}
