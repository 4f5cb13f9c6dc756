use common::Indicator;
use model::DataStore;
use tracing::{error, info, instrument};

use crate::arima::order_search::OrderSearch;
use crate::error::{ComputeError, Result};
use crate::forecast::{validate_horizon, ForecastEngine, ForecastSet, Forecaster, ModelSummary};

/// One fitted model per indicator.
///
/// Built once at startup and never mutated; share it behind an `Arc`.
#[derive(Debug)]
pub struct ModelBank {
    models: [Box<dyn Forecaster>; 4],
}

impl ModelBank {
    /// Wraps already fitted models, given in [`Indicator::ALL`] order.
    pub fn from_models(models: [Box<dyn Forecaster>; 4]) -> Self {
        Self { models }
    }

    /// Runs the order search on every indicator series.
    ///
    /// Any failure aborts the whole bank: partial banks are never returned.
    #[instrument(skip_all)]
    pub fn fit(store: &DataStore, search: &OrderSearch) -> Result<Self> {
        let fit_one = |indicator: Indicator| -> Result<Box<dyn Forecaster>> {
            let series = store.series(indicator);
            match search.fit(series.values()) {
                Ok(model) => {
                    info!(
                        %indicator,
                        order = %model.order(),
                        aic = model.aic(),
                        observations = series.len(),
                        "Model fitted"
                    );
                    Ok(Box::new(model))
                }
                Err(source) => {
                    error!(%indicator, %source, "Model fitting failed");
                    Err(ComputeError::Fit { indicator, source })
                }
            }
        };

        Ok(Self {
            models: [
                fit_one(Indicator::Gdp)?,
                fit_one(Indicator::GdpPerCapita)?,
                fit_one(Indicator::Inflation)?,
                fit_one(Indicator::AdjustedNetNationalIncome)?,
            ],
        })
    }

    pub fn model(&self, indicator: Indicator) -> &dyn Forecaster {
        self.models[indicator.index()].as_ref()
    }

    /// Model descriptions in presentation order.
    pub fn summaries(&self) -> Vec<(Indicator, ModelSummary)> {
        Indicator::ALL
            .into_iter()
            .map(|indicator| (indicator, self.model(indicator).summary()))
            .collect()
    }
}

impl ForecastEngine for ModelBank {
    fn forecast_all(&self, horizon: i64) -> Result<ForecastSet> {
        let periods = validate_horizon(horizon)?;
        let [gdp, gdp_per_capita, inflation, anni] = &self.models;
        ForecastSet::new(
            periods,
            [
                gdp.forecast(periods),
                gdp_per_capita.forecast(periods),
                inflation.forecast(periods),
                anni.forecast(periods),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitError;
    use crate::testing::{sample_store, short_store};
    use rstest::rstest;

    #[test]
    fn test_fit_covers_every_indicator() {
        let bank = ModelBank::fit(&sample_store(2022), &OrderSearch::default()).unwrap();
        let summaries = bank.summaries();
        assert_eq!(summaries.len(), 4);
        for ((indicator, summary), expected) in summaries.iter().zip(Indicator::ALL) {
            assert_eq!(*indicator, expected);
            assert!(summary.order.is_some());
            assert!(summary.aic.is_some());
        }
    }

    #[test]
    fn test_fit_fails_on_short_series() {
        let err = ModelBank::fit(&short_store(), &OrderSearch::default()).unwrap_err();
        assert!(matches!(
            err,
            ComputeError::Fit {
                indicator: Indicator::Gdp,
                source: FitError::InsufficientData { .. }
            }
        ));
    }

    #[rstest]
    fn test_forecast_length_matches_horizon(#[values(1, 2, 3, 5, 8, 10)] horizon: i64) {
        let bank = ModelBank::fit(&sample_store(2022), &OrderSearch::default()).unwrap();
        let forecasts = bank.forecast_all(horizon).unwrap();
        assert_eq!(forecasts.horizon(), horizon as usize);
        for (_, values) in forecasts.iter() {
            assert_eq!(values.len(), horizon as usize);
        }
    }

    #[test]
    fn test_forecasts_are_deterministic() {
        let bank = ModelBank::fit(&sample_store(2022), &OrderSearch::default()).unwrap();
        assert_eq!(bank.forecast_all(6).unwrap(), bank.forecast_all(6).unwrap());

        let refitted = ModelBank::fit(&sample_store(2022), &OrderSearch::default()).unwrap();
        assert_eq!(bank.forecast_all(6).unwrap(), refitted.forecast_all(6).unwrap());
    }

    #[test]
    fn test_non_positive_horizon_is_rejected() {
        let bank = ModelBank::fit(&sample_store(2022), &OrderSearch::default()).unwrap();
        assert!(matches!(bank.forecast_all(0), Err(ComputeError::InvalidHorizon(0))));
        assert!(matches!(bank.forecast_all(-1), Err(ComputeError::InvalidHorizon(-1))));
    }

    #[test]
    fn test_engine_accepts_horizons_beyond_ui_range() {
        let bank = ModelBank::fit(&sample_store(2022), &OrderSearch::default()).unwrap();
        assert_eq!(bank.forecast_all(25).unwrap().horizon(), 25);
    }
}
