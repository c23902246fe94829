//! Augmented Dickey-Fuller unit-root test.
//!
//! Constant-only regression with the lag order chosen by AIC, MacKinnon (1994)
//! approximate p-values and MacKinnon (2010) finite-sample critical values.

use debt_model::{CriticalValues, StationarityResult};
use tracing::{debug, warn};

use crate::regression::{OlsFit, ols};

/// Number of deterministic regressors (the constant).
const TREND_TERMS: usize = 1;

// MacKinnon (1994) surface for one variable with constant.
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;
const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 3.8269e-2];
const TAU_LARGE_P: [f64; 4] = [1.7339, 9.3202e-1, -1.2745e-1, -1.0368e-2];

// MacKinnon (2010) response surface, constant, one variable.
const CRIT_1: [f64; 4] = [-3.43035, -6.5393, -16.786, -79.433];
const CRIT_5: [f64; 4] = [-2.86154, -2.8903, -4.234, -40.040];
const CRIT_10: [f64; 4] = [-2.56677, -1.5384, -2.809, 0.0];

/// Runs the test on `series`, ignoring non-finite values.
///
/// Series that are too short, constant, or whose regression cannot be fitted
/// yield [`StationarityResult::undefined`] and a warning.
pub fn adf_test(series: &[f64]) -> StationarityResult {
    let clean: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
    if clean.len() < 2 {
        warn!(
            observations = clean.len(),
            "not enough observations for the stationarity test"
        );
        return StationarityResult::undefined();
    }
    if clean.iter().all(|v| *v == clean[0]) {
        warn!(
            observations = clean.len(),
            "series is constant, stationarity test skipped"
        );
        return StationarityResult::undefined();
    }
    let Some(maxlag) = max_lag(clean.len()) else {
        warn!(
            observations = clean.len(),
            "sample too short for the stationarity regression"
        );
        return StationarityResult::undefined();
    };
    let Some(lag) = select_lag(&clean, maxlag) else {
        warn!(maxlag, "no lag order could be fitted for the stationarity test");
        return StationarityResult::undefined();
    };
    let Some(fit) = fit_adf(&clean, lag, lag) else {
        warn!(lag, "stationarity regression is degenerate");
        return StationarityResult::undefined();
    };

    // Level coefficient sits right after the constant.
    let statistic = fit.t_value(TREND_TERMS);
    if !statistic.is_finite() {
        warn!(lag, "stationarity statistic is not finite");
        return StationarityResult::undefined();
    }
    debug!(statistic, lag, nobs = fit.nobs, "stationarity test fitted");
    StationarityResult {
        test_statistic: Some(statistic),
        p_value: Some(mackinnon_p_value(statistic)),
        critical_values: Some(critical_values(fit.nobs)),
        used_lag: Some(lag),
        nobs: Some(fit.nobs),
    }
}

/// Initial lag order `ceil(12 (n/100)^(1/4))`, capped so the regression keeps
/// enough observations. `None` when even lag 0 does not fit.
fn max_lag(n: usize) -> Option<usize> {
    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize;
    let cap = (n / 2).checked_sub(TREND_TERMS + 1)?;
    Some(schwert.min(cap))
}

/// Picks the lag with the lowest AIC over `0..=maxlag`, all candidates fitted
/// on the same sample. Ties go to the shorter lag.
fn select_lag(series: &[f64], maxlag: usize) -> Option<usize> {
    let mut best: Option<(f64, usize)> = None;
    for lag in 0..=maxlag {
        let Some(fit) = fit_adf(series, maxlag, lag) else {
            debug!(lag, "lag candidate skipped");
            continue;
        };
        let aic = fit.aic();
        if !aic.is_finite() {
            continue;
        }
        if best.is_none_or(|(best_aic, _)| aic < best_aic) {
            best = Some((aic, lag));
        }
    }
    best.map(|(_, lag)| lag)
}

/// Regresses `Δx_t` on a constant, `x_{t-1}` and `lag` lagged differences,
/// over the sample that leaves room for `window` lags.
///
/// The level regressor is centred on its sample mean; with a constant in the
/// regression this leaves its coefficient and t-value unchanged.
fn fit_adf(series: &[f64], window: usize, lag: usize) -> Option<OlsFit> {
    let diffs: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    if window >= diffs.len() {
        return None;
    }
    let sample = &series[window..diffs.len()];
    let level_mean = sample.iter().sum::<f64>() / sample.len() as f64;
    let mut targets = Vec::with_capacity(diffs.len() - window);
    let mut rows = Vec::with_capacity(diffs.len() - window);
    for t in window..diffs.len() {
        let mut row = Vec::with_capacity(2 + lag);
        row.push(1.0);
        row.push(series[t] - level_mean);
        row.extend((1..=lag).map(|k| diffs[t - k]));
        rows.push(row);
        targets.push(diffs[t]);
    }
    ols(&targets, &rows)
}

/// MacKinnon (1994) approximate p-value for the constant-only statistic.
pub fn mackinnon_p_value(statistic: f64) -> f64 {
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }
    let z = if statistic <= TAU_STAR {
        polynomial(&TAU_SMALL_P, statistic)
    } else {
        polynomial(&TAU_LARGE_P, statistic)
    };
    normal_cdf(z)
}

/// MacKinnon (2010) critical values for a regression with `nobs` observations.
pub fn critical_values(nobs: usize) -> CriticalValues {
    let inverse = 1.0 / nobs as f64;
    CriticalValues {
        one_pct: polynomial(&CRIT_1, inverse),
        five_pct: polynomial(&CRIT_5, inverse),
        ten_pct: polynomial(&CRIT_10, inverse),
    }
}

/// `c0 + c1 x + c2 x^2 + ...`
fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Standard normal CDF.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Complementary error function (Chebyshev fit, relative error < 1.2e-7).
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -z * z - 1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let r = t * poly.exp();
    if x >= 0.0 { r } else { 2.0 - r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_lag_follows_schwert_rule_with_cap() {
        assert_eq!(max_lag(2), None);
        assert_eq!(max_lag(3), None);
        assert_eq!(max_lag(4), Some(0));
        assert_eq!(max_lag(11), Some(3));
        assert_eq!(max_lag(100), Some(12));
        assert_eq!(max_lag(1000), Some(22));
    }

    #[test]
    fn test_normal_cdf_reference_points() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((normal_cdf(1.959_964) - 0.975).abs() < 1e-6);
        assert!((normal_cdf(-1.644_854) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_p_value_bounds() {
        assert_eq!(mackinnon_p_value(3.0), 1.0);
        assert_eq!(mackinnon_p_value(-20.0), 0.0);
        let mid = mackinnon_p_value(-2.0);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_p_value_is_continuous_at_the_switch() {
        let below = mackinnon_p_value(TAU_STAR);
        let above = mackinnon_p_value(TAU_STAR + 1e-9);
        assert!((below - above).abs() < 5e-3);
    }

    #[test]
    fn test_p_value_at_five_percent_critical_value() {
        // The asymptotic 5% critical value should map to roughly p = 0.05.
        let p = mackinnon_p_value(CRIT_5[0]);
        assert!((p - 0.05).abs() < 0.01, "p = {p}");
    }

    #[test]
    fn test_critical_values_for_twenty_observations() {
        let cv = critical_values(20);
        let expected_one = -3.43035 - 6.5393 / 20.0 - 16.786 / 400.0 - 79.433 / 8000.0;
        assert!((cv.one_pct - expected_one).abs() < 1e-12);
        assert!(cv.one_pct < cv.five_pct && cv.five_pct < cv.ten_pct);
    }

    #[test]
    fn test_statistic_ignores_level_and_scale() {
        let base = [5.0, 3.0, 6.0, 2.0, 7.0, 4.0, 5.0, 3.0, 6.0, 4.0, 5.0, 2.0];
        let reference = adf_test(&base);
        let offset: Vec<f64> = base.iter().map(|v| v + 1e9).collect();
        let debt_scale: Vec<f64> = base.iter().map(|v| v * 1e10 + 1e12).collect();

        for series in [offset, debt_scale] {
            let result = adf_test(&series);
            assert_eq!(result.used_lag, reference.used_lag);
            assert_eq!(result.nobs, reference.nobs);
            let got = result.test_statistic.expect("statistic");
            let want = reference.test_statistic.expect("statistic");
            assert!((got - want).abs() < 1e-6, "{got} vs {want}");
            assert!((want + 2.787_435_64).abs() < 1e-6);
        }
    }

    #[test]
    fn test_polynomial_evaluates_in_ascending_order() {
        assert_eq!(polynomial(&[1.0, 2.0, 3.0], 2.0), 17.0);
    }
}
