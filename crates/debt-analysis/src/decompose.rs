//! Additive seasonal decomposition with a fixed period.

use debt_model::DecompositionRow;
use tracing::info;

/// Periodicity of the seasonal component.
pub const PERIOD: usize = 3;

/// Decomposition needs more than two full periods.
pub const MIN_OBSERVATIONS: usize = 2 * PERIOD + 1;

/// Splits `values` into trend, seasonal and residual components.
///
/// Returns `None` when the series has `2 * PERIOD` points or fewer. The trend
/// is a centred moving average and is undefined for the first and last
/// `PERIOD / 2` points, as is the residual.
pub fn seasonal_decompose(years: &[i32], values: &[f64]) -> Option<Vec<DecompositionRow>> {
    let n = values.len().min(years.len());
    if n < MIN_OBSERVATIONS {
        info!(
            observations = n,
            required = MIN_OBSERVATIONS,
            "series too short, decomposition skipped"
        );
        return None;
    }
    let values = &values[..n];

    let trend = centred_moving_average(values);
    let detrended: Vec<Option<f64>> = values
        .iter()
        .zip(&trend)
        .map(|(value, trend)| trend.map(|t| value - t))
        .collect();
    let seasonal_pattern = phase_means(&detrended);

    let rows = years[..n]
        .iter()
        .zip(values)
        .enumerate()
        .map(|(idx, (&year, &original))| {
            let seasonal = seasonal_pattern[idx % PERIOD];
            DecompositionRow {
                year,
                original,
                trend: trend[idx],
                seasonal,
                residual: detrended[idx].map(|d| d - seasonal),
            }
        })
        .collect();
    Some(rows)
}

fn centred_moving_average(values: &[f64]) -> Vec<Option<f64>> {
    let half = PERIOD / 2;
    (0..values.len())
        .map(|idx| {
            if idx < half || idx + half >= values.len() {
                return None;
            }
            let window = &values[idx - half..=idx + half];
            Some(window.iter().sum::<f64>() / PERIOD as f64)
        })
        .collect()
}

/// Mean detrended value per phase, shifted so the pattern sums to zero.
fn phase_means(detrended: &[Option<f64>]) -> [f64; PERIOD] {
    let mut means = [0.0; PERIOD];
    for (phase, mean) in means.iter_mut().enumerate() {
        let defined: Vec<f64> = detrended
            .iter()
            .skip(phase)
            .step_by(PERIOD)
            .filter_map(|value| *value)
            .collect();
        if !defined.is_empty() {
            *mean = defined.iter().sum::<f64>() / defined.len() as f64;
        }
    }
    let centre = means.iter().sum::<f64>() / PERIOD as f64;
    means.map(|mean| mean - centre)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(n: usize) -> Vec<i32> {
        (2013..).take(n).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_six_points_are_not_decomposed() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert!(seasonal_decompose(&years(6), &values).is_none());
    }

    #[test]
    fn test_pure_seasonal_pattern_is_recovered() {
        let values = [3.0, 6.0, 9.0, 3.0, 6.0, 9.0, 3.0];
        let rows = seasonal_decompose(&years(7), &values).expect("decomposed");

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].trend, None);
        assert_eq!(rows[6].trend, None);
        assert_eq!(rows[0].residual, None);
        for row in &rows[1..6] {
            assert!(close(row.trend.expect("trend"), 6.0));
            assert!(close(row.residual.expect("residual"), 0.0));
        }
        let seasonal: Vec<f64> = rows.iter().map(|row| row.seasonal).collect();
        for (got, want) in seasonal.iter().zip([-3.0, 0.0, 3.0, -3.0, 0.0, 3.0, -3.0]) {
            assert!(close(*got, want), "{seasonal:?}");
        }
    }

    #[test]
    fn test_irregular_series_components() {
        let values = [1.0, 4.0, 2.0, 8.0, 5.0, 7.0, 3.0];
        let rows = seasonal_decompose(&years(7), &values).expect("decomposed");

        assert!(close(rows[1].trend.expect("trend"), 7.0 / 3.0));
        assert!(close(rows[4].trend.expect("trend"), 20.0 / 3.0));
        assert!(close(rows[0].seasonal, 19.0 / 9.0));
        assert!(close(rows[1].seasonal, -8.0 / 9.0));
        assert!(close(rows[2].seasonal, -11.0 / 9.0));
        assert!(close(rows[6].seasonal, 19.0 / 9.0));
        assert!(close(rows[5].residual.expect("residual"), 2.0 + 11.0 / 9.0));

        // Components add back up wherever the trend is defined.
        for row in rows.iter().filter(|row| row.trend.is_some()) {
            let rebuilt =
                row.trend.unwrap_or_default() + row.seasonal + row.residual.unwrap_or_default();
            assert!(close(rebuilt, row.original));
        }
    }
}
