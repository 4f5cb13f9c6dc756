//! ARIMA (AutoRegressive Integrated Moving Average) models.
//!
//! - **AR**: past values of the differenced series, estimated with the
//!   Yule-Walker equations (Levinson-Durbin recursion)
//! - **I**: `d` rounds of first differencing, undone when forecasting
//! - **MA**: past one-step errors, estimated from residual autocorrelation
//!
//! A fitted model is immutable; [`FittedArima::forecast_values`] is a pure function of
//! the model and the horizon.

pub mod order_search;

use serde::Serialize;
use std::fmt;

use crate::error::FitError;
use crate::forecast::{Forecaster, ModelSummary};

const EPSILON: f64 = 1e-10;

/// Model orders `(p, d, q)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArimaOrder {
    pub p: usize,
    pub d: usize,
    pub q: usize,
}

impl ArimaOrder {
    pub const fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Fewest observations a fit with this order accepts.
    pub const fn min_observations(&self) -> usize {
        self.p + self.d + self.q + 3
    }
}

impl fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARIMA({},{},{})", self.p, self.d, self.q)
    }
}

/// ARIMA model fitted to one series.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedArima {
    order: ArimaOrder,
    ar_coeffs: Vec<f64>,
    ma_coeffs: Vec<f64>,
    /// Mean of the differenced series
    constant: f64,
    /// Last `p` values of the differenced series
    recent_values: Vec<f64>,
    /// Last `q` in-sample residuals
    recent_residuals: Vec<f64>,
    /// Last value of each differencing level `0..d`
    level_tails: Vec<f64>,
    sigma2: f64,
    aic: f64,
    observations: usize,
}

impl FittedArima {
    /// Fits an ARIMA model of the given order.
    pub fn fit(order: ArimaOrder, data: &[f64]) -> Result<Self, FitError> {
        let required = order.min_observations();
        if data.len() < required {
            return Err(FitError::InsufficientData {
                required,
                actual: data.len(),
            });
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(FitError::InvalidData(
                "Data contains NaN or infinite values".to_string(),
            ));
        }

        let mut level_tails = Vec::with_capacity(order.d);
        let mut differenced = data.to_vec();
        for _ in 0..order.d {
            level_tails.push(differenced[differenced.len() - 1]);
            differenced = difference(&differenced);
        }

        let n = differenced.len();
        let constant = differenced.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = differenced.iter().map(|x| x - constant).collect();

        let ar_coeffs = yule_walker(&centered, order.p);

        // First pass: AR-only residuals feed the MA estimate.
        let ar_residuals = residuals(&centered, &ar_coeffs, &[]);
        let ma_coeffs = estimate_ma(&ar_residuals[order.p..], order.q);
        let residuals = residuals(&centered, &ar_coeffs, &ma_coeffs);

        // Every candidate with the same `d` is scored over the same `n` points;
        // the first `p` residuals are zero.
        let sse: f64 = residuals.iter().map(|e| e * e).sum();
        let sigma2 = sse / n as f64;
        let parameters = (order.p + order.q + 1) as f64;
        let aic = n as f64 * sigma2.max(f64::MIN_POSITIVE).ln() + 2.0 * parameters;

        Ok(Self {
            order,
            ar_coeffs,
            ma_coeffs,
            constant,
            recent_values: differenced[n - order.p..].to_vec(),
            recent_residuals: residuals[n - order.q..].to_vec(),
            level_tails,
            sigma2,
            aic,
            observations: data.len(),
        })
    }

    pub fn order(&self) -> ArimaOrder {
        self.order
    }

    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    /// Akaike information criterion of the in-sample fit (lower is better).
    pub fn aic(&self) -> f64 {
        self.aic
    }

    /// Residual variance.
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Forecasts the next `horizon` values on the original scale.
    pub fn forecast_values(&self, horizon: usize) -> Vec<f64> {
        let mut values = self.recent_values.clone();
        let mut errors = self.recent_residuals.clone();
        let mut forecasts = Vec::with_capacity(horizon);

        for _ in 0..horizon {
            let mut next = self.constant;
            for (j, phi) in self.ar_coeffs.iter().enumerate() {
                next += phi * (values[values.len() - 1 - j] - self.constant);
            }
            for (j, theta) in self.ma_coeffs.iter().enumerate() {
                next += theta * errors[errors.len() - 1 - j];
            }
            values.push(next);
            // Future shocks have zero expectation.
            errors.push(0.0);
            forecasts.push(next);
        }

        for tail in self.level_tails.iter().rev() {
            let mut level = *tail;
            for value in forecasts.iter_mut() {
                level += *value;
                *value = level;
            }
        }
        forecasts
    }
}

impl Forecaster for FittedArima {
    fn forecast(&self, horizon: usize) -> Vec<f64> {
        self.forecast_values(horizon)
    }

    fn summary(&self) -> ModelSummary {
        ModelSummary {
            name: self.order.to_string(),
            order: Some(self.order),
            aic: Some(self.aic),
            observations: self.observations,
        }
    }
}

/// First difference of a series.
pub(crate) fn difference(data: &[f64]) -> Vec<f64> {
    data.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Sample autocovariances for lags `0..=max_lag`.
fn autocovariance(centered: &[f64], max_lag: usize) -> Vec<f64> {
    let n = centered.len() as f64;
    (0..=max_lag)
        .map(|lag| {
            centered[lag..]
                .iter()
                .zip(centered.iter())
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / n
        })
        .collect()
}

/// Solves the Yule-Walker equations with the Levinson-Durbin recursion.
fn yule_walker(centered: &[f64], p: usize) -> Vec<f64> {
    let mut phi = vec![0.0; p];
    if p == 0 {
        return phi;
    }
    let r = autocovariance(centered, p);
    if r[0].abs() <= EPSILON {
        return phi;
    }

    let mut error = r[0];
    for k in 0..p {
        let mut acc = r[k + 1];
        for j in 0..k {
            acc -= phi[j] * r[k - j];
        }
        let kappa = acc / error;
        let previous = phi.clone();
        phi[k] = kappa;
        for j in 0..k {
            phi[j] = previous[j] - kappa * previous[k - 1 - j];
        }
        error *= 1.0 - kappa * kappa;
        if error <= EPSILON {
            break;
        }
    }
    phi
}

/// MA coefficients from the autocorrelation of residuals, bounded for stability.
fn estimate_ma(residuals: &[f64], q: usize) -> Vec<f64> {
    if q == 0 || residuals.is_empty() {
        return vec![0.0; q];
    }
    let n = residuals.len() as f64;
    let mean = residuals.iter().sum::<f64>() / n;
    let centered: Vec<f64> = residuals.iter().map(|x| x - mean).collect();
    let covariance = autocovariance(&centered, q.min(centered.len() - 1));
    if covariance[0].abs() <= EPSILON {
        return vec![0.0; q];
    }

    (1..=q)
        .map(|lag| {
            covariance
                .get(lag)
                .map_or(0.0, |c| (c / covariance[0]).clamp(-0.99, 0.99))
        })
        .collect()
}

/// One-step in-sample errors of a centered series; the first `p` entries are zero.
fn residuals(centered: &[f64], ar: &[f64], ma: &[f64]) -> Vec<f64> {
    let p = ar.len();
    let mut errors = vec![0.0; centered.len()];
    for t in p..centered.len() {
        let mut prediction = 0.0;
        for (j, phi) in ar.iter().enumerate() {
            prediction += phi * centered[t - 1 - j];
        }
        for (j, theta) in ma.iter().enumerate() {
            if t > j {
                prediction += theta * errors[t - 1 - j];
            }
        }
        errors[t] = centered[t] - prediction;
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noisy_trend(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + 2.5 * i as f64 + (i as f64 * 0.7).sin() * 3.0)
            .collect()
    }

    #[test]
    fn test_order_display() {
        assert_eq!(ArimaOrder::new(2, 1, 0).to_string(), "ARIMA(2,1,0)");
    }

    #[test]
    fn test_fit_rejects_short_series() {
        let err = FittedArima::fit(ArimaOrder::new(2, 1, 1), &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            FitError::InsufficientData {
                required: 7,
                actual: 3
            }
        );
    }

    #[test]
    fn test_fit_rejects_non_finite() {
        let mut data = noisy_trend(20);
        data[4] = f64::NAN;
        assert!(matches!(
            FittedArima::fit(ArimaOrder::new(1, 0, 0), &data),
            Err(FitError::InvalidData(_))
        ));
    }

    #[test]
    fn test_forecast_length_and_determinism() {
        let model = FittedArima::fit(ArimaOrder::new(2, 1, 1), &noisy_trend(40)).unwrap();
        let first = model.forecast_values(7);
        assert_eq!(first.len(), 7);
        assert_eq!(first, model.forecast_values(7));
        assert!(first.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_random_walk_with_drift_continues_trend() {
        // A straight line differenced once is constant: forecasts keep the slope.
        let data: Vec<f64> = (0..15).map(|i| 10.0 + 3.0 * i as f64).collect();
        let model = FittedArima::fit(ArimaOrder::new(0, 1, 0), &data).unwrap();
        let forecast = model.forecast_values(3);
        let expected = [55.0, 58.0, 61.0];
        for (got, want) in forecast.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    #[test]
    fn test_second_order_differencing_integrates_twice() {
        // Quadratic: second differences are constant (2.0).
        let data: Vec<f64> = (0..12).map(|i| (i * i) as f64).collect();
        let model = FittedArima::fit(ArimaOrder::new(0, 2, 0), &data).unwrap();
        let forecast = model.forecast_values(2);
        assert!((forecast[0] - 144.0).abs() < 1e-9);
        assert!((forecast[1] - 169.0).abs() < 1e-9);
    }

    #[test]
    fn test_white_noise_forecast_reverts_to_mean() {
        let data: Vec<f64> = (0..30).map(|i| if i % 2 == 0 { 5.0 } else { 7.0 }).collect();
        let model = FittedArima::fit(ArimaOrder::new(0, 0, 0), &data).unwrap();
        assert!(model.forecast_values(4).iter().all(|v| (v - 6.0).abs() < 1e-9));
    }

    #[test]
    fn test_levinson_durbin_recovers_ar1() {
        // x_t = 0.6 x_{t-1} + u_t with uniform LCG noise
        let mut state: u64 = 42;
        let mut data = vec![0.0];
        for _ in 0..300 {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let shock = (state >> 33) as f64 / (1u64 << 31) as f64 - 0.5;
            let last = *data.last().unwrap();
            data.push(0.6 * last + shock);
        }
        let model = FittedArima::fit(ArimaOrder::new(1, 0, 0), &data).unwrap();
        let phi = model.ar_coefficients()[0];
        assert!((phi - 0.6).abs() < 0.1, "phi = {phi}");
    }

    #[test]
    fn test_summary_reports_order() {
        let model = FittedArima::fit(ArimaOrder::new(1, 1, 0), &noisy_trend(20)).unwrap();
        let summary = model.summary();
        assert_eq!(summary.name, "ARIMA(1,1,0)");
        assert_eq!(summary.order, Some(ArimaOrder::new(1, 1, 0)));
        assert_eq!(summary.observations, 20);
    }
}
