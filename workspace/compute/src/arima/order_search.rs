//! Automatic (p, d, q) selection.
//!
//! The differencing order is the one that leaves the differenced series with the
//! smallest standard deviation; lower orders win ties. With `d` fixed, every
//! `(p, q)` pair inside the bounds is fitted and the lowest AIC is kept. The
//! search is exhaustive and ordered, so identical input always selects the
//! same model.

use serde::Serialize;
use tracing::{debug, instrument, trace};

use super::{difference, ArimaOrder, FittedArima};
use crate::error::FitError;

/// Bounds of the order search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSearch {
    pub max_p: usize,
    pub max_d: usize,
    pub max_q: usize,
    /// Shortest series the search accepts
    pub min_observations: usize,
}

impl Default for OrderSearch {
    fn default() -> Self {
        Self {
            max_p: 3,
            max_d: 2,
            max_q: 2,
            min_observations: 10,
        }
    }
}

impl OrderSearch {
    pub fn new(max_p: usize, max_d: usize, max_q: usize) -> Self {
        Self {
            max_p,
            max_d,
            max_q,
            ..Self::default()
        }
    }

    pub fn with_min_observations(mut self, min_observations: usize) -> Self {
        self.min_observations = min_observations;
        self
    }

    /// Differencing order with the lowest standard deviation.
    pub fn select_differencing(&self, data: &[f64]) -> usize {
        let mut best = (0, standard_deviation(data));
        let mut level = data.to_vec();
        for d in 1..=self.max_d {
            level = difference(&level);
            if level.len() < 2 {
                break;
            }
            let deviation = standard_deviation(&level);
            trace!(d, deviation, "Differencing candidate");
            if deviation < best.1 {
                best = (d, deviation);
            }
        }
        best.0
    }

    /// Searches the order space and returns the best fitted model.
    #[instrument(skip_all, fields(observations = data.len()))]
    pub fn fit(&self, data: &[f64]) -> Result<FittedArima, FitError> {
        if data.len() < self.min_observations {
            return Err(FitError::InsufficientData {
                required: self.min_observations,
                actual: data.len(),
            });
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(FitError::InvalidData(
                "Data contains NaN or infinite values".to_string(),
            ));
        }

        let d = self.select_differencing(data);
        let mut best: Option<FittedArima> = None;

        for p in 0..=self.max_p {
            for q in 0..=self.max_q {
                let order = ArimaOrder::new(p, d, q);
                let model = match FittedArima::fit(order, data) {
                    Ok(model) => model,
                    Err(err) => {
                        trace!(%order, %err, "Skipping candidate");
                        continue;
                    }
                };
                debug!(%order, aic = model.aic(), "Candidate fitted");
                if best.as_ref().is_none_or(|current| model.aic() < current.aic()) {
                    best = Some(model);
                }
            }
        }

        let best = best.ok_or(FitError::NoCandidate)?;
        debug!(order = %best.order(), aic = best.aic(), "Selected order");
        Ok(best)
    }
}

fn standard_deviation(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    (data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
}
