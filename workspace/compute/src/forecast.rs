pub mod cache;

use common::Indicator;
use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;

use crate::arima::ArimaOrder;
use crate::error::{ComputeError, Result};

/// A fitted model able to extend its series.
pub trait Forecaster: Debug + Send + Sync {
    /// The next `horizon` values, starting right after the last observed period.
    fn forecast(&self, horizon: usize) -> Vec<f64>;

    /// Short description of the fitted model.
    fn summary(&self) -> ModelSummary;
}

/// Description of a fitted model, as reported to operators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub order: Option<ArimaOrder>,
    pub aic: Option<f64>,
    pub observations: usize,
}

/// Forecasts for every indicator over the same horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSet {
    horizon: usize,
    values: [Vec<f64>; 4],
}

impl ForecastSet {
    /// Builds a set, checking every forecast has `horizon` values.
    pub fn new(horizon: usize, values: [Vec<f64>; 4]) -> Result<Self> {
        for (indicator, forecast) in Indicator::ALL.iter().zip(values.iter()) {
            if forecast.len() != horizon {
                return Err(ComputeError::ForecastComputation(format!(
                    "{} forecast has {} values, expected {}",
                    indicator,
                    forecast.len(),
                    horizon
                )));
            }
        }
        Ok(Self { horizon, values })
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn get(&self, indicator: Indicator) -> &[f64] {
        &self.values[indicator.index()]
    }

    /// `(indicator, forecast)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, &[f64])> {
        Indicator::ALL
            .into_iter()
            .zip(self.values.iter().map(Vec::as_slice))
    }
}

/// Produces forecasts for all indicators at once.
pub trait ForecastEngine: Send + Sync {
    /// Forecasts `horizon` periods for every indicator.
    ///
    /// Any positive horizon is accepted; zero or negative horizons fail with
    /// [`ComputeError::InvalidHorizon`].
    fn forecast_all(&self, horizon: i64) -> Result<ForecastSet>;
}

impl<E: ForecastEngine + ?Sized> ForecastEngine for Arc<E> {
    fn forecast_all(&self, horizon: i64) -> Result<ForecastSet> {
        (**self).forecast_all(horizon)
    }
}

/// Checks a requested horizon and converts it to a period count.
pub fn validate_horizon(horizon: i64) -> Result<usize> {
    if horizon <= 0 {
        return Err(ComputeError::InvalidHorizon(horizon));
    }
    usize::try_from(horizon).map_err(|_| ComputeError::InvalidHorizon(horizon))
}
