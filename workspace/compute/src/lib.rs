pub mod arima;
pub mod bank;
pub mod chart;
pub mod error;
pub mod forecast;

#[cfg(test)]
pub(crate) mod testing;

use arima::order_search::OrderSearch;
use bank::ModelBank;
use forecast::cache::CachedForecastEngine;
use model::DataStore;

use crate::error::Result;

/// Fits the model bank for `store` with the default order search.
///
/// This is the configuration the server uses unless overridden.
pub fn default_model_bank(store: &DataStore) -> Result<ModelBank> {
    ModelBank::fit(store, &OrderSearch::default())
}

/// Returns the default forecast engine: the model bank behind a per-horizon cache.
pub fn default_engine(bank: ModelBank) -> CachedForecastEngine<ModelBank> {
    CachedForecastEngine::with_defaults(bank)
}
