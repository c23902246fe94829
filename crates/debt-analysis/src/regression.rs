//! Ordinary least squares for the small design matrices of the unit-root test.

use std::f64::consts::PI;

/// A fitted OLS regression.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OlsFit {
    pub params: Vec<f64>,
    pub std_errors: Vec<f64>,
    pub ssr: f64,
    pub nobs: usize,
}

impl OlsFit {
    pub fn t_value(&self, idx: usize) -> f64 {
        self.params[idx] / self.std_errors[idx]
    }

    /// Akaike information criterion, `-2 log L + 2k`.
    pub fn aic(&self) -> f64 {
        let n = self.nobs as f64;
        let k = self.params.len() as f64;
        n * (2.0 * PI).ln() + n * (self.ssr / n).ln() + n + 2.0 * k
    }
}

/// Fits `y = X b` where `rows` are the rows of X.
///
/// Columns are scaled to unit norm before the normal equations are formed, so
/// the singularity check is relative to each regressor's own magnitude.
///
/// Returns `None` when there are no residual degrees of freedom, the design
/// is singular, or the fit is exact (zero residual variance).
pub(crate) fn ols(y: &[f64], rows: &[Vec<f64>]) -> Option<OlsFit> {
    let nobs = y.len();
    let k = rows.first()?.len();
    if k == 0 || nobs != rows.len() || nobs <= k {
        return None;
    }

    let norms: Vec<f64> = (0..k)
        .map(|j| rows.iter().map(|row| row[j] * row[j]).sum::<f64>().sqrt())
        .collect();
    if norms.iter().any(|norm| !norm.is_finite() || *norm <= 0.0) {
        return None;
    }

    let mut xtx = vec![vec![0.0; k]; k];
    let mut xty = vec![0.0; k];
    for (row, target) in rows.iter().zip(y) {
        let scaled: Vec<f64> = row.iter().zip(&norms).map(|(x, norm)| x / norm).collect();
        for i in 0..k {
            xty[i] += scaled[i] * target;
            for j in 0..k {
                xtx[i][j] += scaled[i] * scaled[j];
            }
        }
    }
    let inverse = invert(xtx)?;
    let params: Vec<f64> = (0..k)
        .map(|i| (0..k).map(|j| inverse[i][j] * xty[j]).sum::<f64>() / norms[i])
        .collect();

    let ssr: f64 = rows
        .iter()
        .zip(y)
        .map(|(row, target)| {
            let fitted: f64 = row.iter().zip(&params).map(|(x, b)| x * b).sum();
            (target - fitted).powi(2)
        })
        .sum();
    let scale = y.iter().map(|v| v * v).sum::<f64>().max(f64::MIN_POSITIVE);
    if ssr <= scale * 1e-24 {
        return None;
    }
    let sigma2 = ssr / (nobs - k) as f64;
    let std_errors: Vec<f64> = (0..k)
        .map(|i| (sigma2 * inverse[i][i]).sqrt() / norms[i])
        .collect();
    if std_errors.iter().any(|se| !se.is_finite() || *se <= 0.0) {
        return None;
    }
    Some(OlsFit {
        params,
        std_errors,
        ssr,
        nobs,
    })
}

/// Gauss-Jordan inversion with partial pivoting.
fn invert(mut matrix: Vec<Vec<f64>>) -> Option<Vec<Vec<f64>>> {
    let n = matrix.len();
    let mut inverse: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();
    let magnitude = (0..n)
        .map(|i| matrix[i][i].abs())
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);

    for col in 0..n {
        let pivot_row = (col..n).max_by(|&a, &b| {
            matrix[a][col]
                .abs()
                .partial_cmp(&matrix[b][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if matrix[pivot_row][col].abs() <= magnitude * 1e-13 {
            return None;
        }
        matrix.swap(col, pivot_row);
        inverse.swap(col, pivot_row);

        let pivot = matrix[col][col];
        for j in 0..n {
            matrix[col][j] /= pivot;
            inverse[col][j] /= pivot;
        }
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = matrix[row][col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                matrix[row][j] -= factor * matrix[col][j];
                inverse[row][j] -= factor * inverse[col][j];
            }
        }
    }
    Some(inverse)
}
