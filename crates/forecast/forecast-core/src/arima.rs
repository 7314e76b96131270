//! ARIMA (AutoRegressive Integrated Moving Average) implementation
//!
//! The model combines three components:
//!
//! - **AR (AutoRegressive)**: regresses the series on its own lagged values
//! - **I (Integrated)**: differencing to achieve stationarity
//! - **MA (Moving Average)**: uses past one-step forecast errors
//!
//! AR coefficients are estimated by conditional least squares: the
//! differenced, mean-centered series is regressed on its `p` lags and the
//! normal equations are solved directly. MA coefficients are estimated from
//! the autocorrelation of the fit residuals.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::{Arima, Predictor};
//!
//! let data: Vec<f64> = (1..=24).map(|x| x as f64).collect();
//! let mut model = Arima::new(5, 1, 0).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(6).unwrap();
//! assert_eq!(forecast.len(), 6);
//! ```

use forecast_spi::error::{ModelResult, TsError};
use forecast_spi::Predictor;

/// ARIMA model for monthly time series forecasting
#[derive(Debug, Clone)]
pub struct Arima {
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    /// AR coefficients
    ar_coeffs: Vec<f64>,
    /// MA coefficients
    ma_coeffs: Vec<f64>,
    /// Mean of the differenced series
    mean: f64,
    /// Differencing ladder: levels[0] is the original series, levels[d] the
    /// fully differenced one. Kept for integration back to the original scale.
    levels: Vec<Vec<f64>>,
    /// One-step residuals on the differenced scale
    residuals: Vec<f64>,
    /// Whether the model has been fitted
    fitted: bool,
}

impl Arima {
    /// Create a new ARIMA model with the given orders.
    ///
    /// # Arguments
    ///
    /// * `p` - autoregressive order (0-10)
    /// * `d` - differencing order (0-2)
    /// * `q` - moving average order (0-10)
    pub fn new(p: usize, d: usize, q: usize) -> ModelResult<Self> {
        if p > 10 {
            return Err(TsError::InvalidParameter {
                name: "p".to_string(),
                reason: "AR order must be <= 10".to_string(),
            });
        }
        if d > 2 {
            return Err(TsError::InvalidParameter {
                name: "d".to_string(),
                reason: "differencing order must be <= 2".to_string(),
            });
        }
        if q > 10 {
            return Err(TsError::InvalidParameter {
                name: "q".to_string(),
                reason: "MA order must be <= 10".to_string(),
            });
        }

        Ok(Self {
            p,
            d,
            q,
            ar_coeffs: Vec::new(),
            ma_coeffs: Vec::new(),
            mean: 0.0,
            levels: Vec::new(),
            residuals: Vec::new(),
            fitted: false,
        })
    }

    /// Get model orders as `(p, d, q)`.
    pub fn order(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Get the estimated AR coefficients.
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    /// Get the estimated MA coefficients.
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    /// Reverse differencing, one ladder level at a time, seeding each level
    /// with its last observed value.
    fn integrate(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();
        for level in (0..self.d).rev() {
            let observed = &self.levels[level];
            let mut last = observed[observed.len() - 1];
            for value in result.iter_mut() {
                last += *value;
                *value = last;
            }
        }
        result
    }
}

impl Predictor for Arima {
    fn fit(&mut self, data: &[f64]) -> ModelResult<()> {
        let min_required = self.p + self.d + self.q + 1;
        if data.len() < min_required {
            return Err(TsError::InsufficientData {
                required: min_required,
                actual: data.len(),
            });
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(TsError::InvalidData(
                "series contains NaN or infinite values".to_string(),
            ));
        }

        self.levels = difference_levels(data, self.d);
        let differenced = &self.levels[self.d];
        let m = differenced.len();
        self.mean = differenced.iter().sum::<f64>() / m as f64;
        let centered: Vec<f64> = differenced.iter().map(|x| x - self.mean).collect();

        self.ar_coeffs = estimate_ar(&centered, self.p)?;

        // one-step residuals; the first p entries have no full lag window
        let mut residuals = vec![0.0; m];
        for t in self.p..m {
            let mut prediction = 0.0;
            for (j, phi) in self.ar_coeffs.iter().enumerate() {
                prediction += phi * centered[t - j - 1];
            }
            residuals[t] = centered[t] - prediction;
        }
        self.ma_coeffs = estimate_ma(&residuals[self.p..], self.q);
        self.residuals = residuals;

        if self
            .ar_coeffs
            .iter()
            .chain(self.ma_coeffs.iter())
            .any(|c| !c.is_finite())
        {
            return Err(TsError::NumericalError(
                "non-finite coefficient estimate".to_string(),
            ));
        }

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> ModelResult<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }
        if steps == 0 {
            return Ok(Vec::new());
        }

        let differenced = &self.levels[self.d];
        let history_len = differenced.len();
        let mut centered: Vec<f64> = differenced.iter().map(|x| x - self.mean).collect();
        let mut residuals = self.residuals.clone();

        for _ in 0..steps {
            let mut value = 0.0;
            for (j, phi) in self.ar_coeffs.iter().enumerate() {
                value += phi * centered[centered.len() - j - 1];
            }
            for (j, theta) in self.ma_coeffs.iter().enumerate() {
                if residuals.len() > j {
                    value += theta * residuals[residuals.len() - j - 1];
                }
            }
            centered.push(value);
            // future shocks are zero in a point forecast
            residuals.push(0.0);
        }

        let differenced_forecasts: Vec<f64> = centered[history_len..]
            .iter()
            .map(|v| v + self.mean)
            .collect();
        Ok(self.integrate(&differenced_forecasts))
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

/// Build the differencing ladder: element 0 is the original series, element
/// `d` the series differenced `d` times.
fn difference_levels(data: &[f64], d: usize) -> Vec<Vec<f64>> {
    let mut levels = vec![data.to_vec()];
    for level in 0..d {
        let next: Vec<f64> = levels[level].windows(2).map(|w| w[1] - w[0]).collect();
        levels.push(next);
    }
    levels
}

/// Estimate AR coefficients by conditional least squares.
fn estimate_ar(centered: &[f64], p: usize) -> ModelResult<Vec<f64>> {
    if p == 0 {
        return Ok(Vec::new());
    }
    let m = centered.len();
    if m <= p {
        return Err(TsError::InsufficientData {
            required: p + 1,
            actual: m,
        });
    }
    // a constant differenced series carries no autoregressive signal
    if centered.iter().all(|v| v.abs() < 1e-12) {
        return Ok(vec![0.0; p]);
    }

    // normal equations X'X beta = X'y over the lagged design matrix
    let mut xtx = vec![vec![0.0; p]; p];
    let mut xty = vec![0.0; p];
    for t in p..m {
        for a in 0..p {
            let xa = centered[t - a - 1];
            xty[a] += xa * centered[t];
            for b in 0..p {
                xtx[a][b] += xa * centered[t - b - 1];
            }
        }
    }

    let scale = (0..p).map(|i| xtx[i][i]).sum::<f64>() / p as f64;
    if !scale.is_finite() {
        return Err(TsError::NumericalError(
            "lag products overflowed in autoregressive estimation".to_string(),
        ));
    }
    if scale <= 0.0 {
        return Ok(vec![0.0; p]);
    }
    // small ridge keeps collinear lag designs solvable
    for i in 0..p {
        xtx[i][i] += 1e-8 * scale;
    }

    solve_linear_system(xtx, xty).ok_or_else(|| {
        TsError::NumericalError("singular normal equations in autoregressive estimation".to_string())
    })
}

/// Estimate MA coefficients from the autocorrelation of the fit residuals,
/// clamped for stability.
fn estimate_ma(residuals: &[f64], q: usize) -> Vec<f64> {
    if q == 0 || residuals.is_empty() {
        return vec![0.0; q];
    }

    let n = residuals.len();
    let mean = residuals.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = residuals.iter().map(|x| x - mean).collect();
    let var = centered.iter().map(|x| x * x).sum::<f64>() / n as f64;

    let mut coeffs = vec![0.0; q];
    if var > 1e-12 {
        for k in 0..q {
            let mut sum = 0.0;
            for i in (k + 1)..n {
                sum += centered[i] * centered[i - k - 1];
            }
            coeffs[k] = ((sum / n as f64) / var).clamp(-0.99, 0.99);
        }
    }
    coeffs
}

/// Solve a dense linear system by Gaussian elimination with partial
/// pivoting. Returns `None` when the system is singular.
fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    let max_abs = a
        .iter()
        .flatten()
        .fold(0.0_f64, |acc, value| acc.max(value.abs()));
    if max_abs == 0.0 {
        return None;
    }
    let tolerance = max_abs * 1e-12;

    for i in 0..n {
        let mut pivot_row = i;
        let mut pivot_value = a[i][i].abs();
        for row in (i + 1)..n {
            if a[row][i].abs() > pivot_value {
                pivot_value = a[row][i].abs();
                pivot_row = row;
            }
        }
        if pivot_value < tolerance {
            return None;
        }
        if pivot_row != i {
            a.swap(i, pivot_row);
            b.swap(i, pivot_row);
        }

        let inv_pivot = 1.0 / a[i][i];
        for col in i..n {
            a[i][col] *= inv_pivot;
        }
        b[i] *= inv_pivot;

        for row in 0..n {
            if row == i {
                continue;
            }
            let factor = a[row][i];
            if factor == 0.0 {
                continue;
            }
            for col in i..n {
                a[row][col] -= factor * a[i][col];
            }
            b[row] -= factor * b[i];
        }
    }
    Some(b)
}
