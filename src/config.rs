use anyhow::{Context, Result};
use clap::Args;
use compute::arima::order_search::OrderSearch;
use compute::bank::ModelBank;
use compute::forecast::cache::CachedForecastEngine;
use model::DataStore;
use moka::future::Cache;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::controller::Dashboard;
use crate::schemas::{AppState, ModelResponse};

/// Settings shared by every command that loads data and fits models.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// CSV file with the yearly indicator history
    #[arg(long, env = "DATA_PATH", default_value = "world_bank_gdp_inflation.csv")]
    pub data_path: PathBuf,

    /// Largest autoregressive order tried by the order search
    #[arg(long, env = "MAX_P", default_value_t = 3)]
    pub max_p: usize,

    /// Largest differencing order tried by the order search
    #[arg(long, env = "MAX_D", default_value_t = 2)]
    pub max_d: usize,

    /// Largest moving-average order tried by the order search
    #[arg(long, env = "MAX_Q", default_value_t = 2)]
    pub max_q: usize,

    /// Maximum number of cached responses
    #[arg(long, env = "CACHE_CAPACITY", default_value_t = 1000)]
    pub cache_capacity: u64,

    /// Maximum number of forecast horizons kept by the forecast cache
    #[arg(long, env = "FORECAST_CACHE_SIZE", default_value_t = 16)]
    pub forecast_cache_size: usize,

    /// Lifetime of cached responses and forecasts, in seconds
    #[arg(long, env = "CACHE_TTL_SECS", default_value_t = 300)]
    pub cache_ttl_secs: u64,
}

impl AppConfig {
    pub fn order_search(&self) -> OrderSearch {
        OrderSearch::new(self.max_p, self.max_d, self.max_q)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Reads the CSV and fits one model per indicator.
    ///
    /// Fails if the data is unusable or any indicator cannot be fitted.
    #[instrument(skip(self), fields(data_path = %self.data_path.display()))]
    pub fn load_models(&self) -> Result<(DataStore, ModelBank)> {
        let store = DataStore::from_csv_path(&self.data_path)
            .with_context(|| format!("Failed to load {}", self.data_path.display()))?;
        debug!("Data store loaded");

        let bank = ModelBank::fit(&store, &self.order_search())
            .context("Failed to fit forecasting models")?;
        info!("Fitted models for all indicators");

        Ok((store, bank))
    }
}

/// Initialize application state from the configured data file
pub async fn initialize_app_state(config: &AppConfig) -> Result<AppState> {
    let (store, bank) = config.load_models()?;
    Ok(build_app_state(store, bank, config))
}

/// Wires an already fitted model bank into shared handler state.
pub fn build_app_state(store: DataStore, bank: ModelBank, config: &AppConfig) -> AppState {
    let bank = Arc::new(bank);
    let models = ModelResponse::from_bank(&bank);

    let engine = CachedForecastEngine::new(bank, config.forecast_cache_size, config.cache_ttl());
    let dashboard = Dashboard::new(Arc::new(store), Arc::new(engine));

    // Initialize cache
    let cache = Cache::builder()
        .max_capacity(config.cache_capacity)
        .time_to_live(config.cache_ttl())
        .build();

    AppState {
        dashboard: Arc::new(dashboard),
        models: Arc::new(models),
        cache,
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("world_bank_gdp_inflation.csv"),
            max_p: 3,
            max_d: 2,
            max_q: 2,
            cache_capacity: 1000,
            forecast_cache_size: 16,
            cache_ttl_secs: 300,
        }
    }
}
