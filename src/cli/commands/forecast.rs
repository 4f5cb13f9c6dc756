use anyhow::{Context, Result};
use common::{resolve, Language, LocaleBundle};
use compute::forecast::{ForecastEngine, ForecastSet};
use model::DataStore;
use std::fmt::Write;
use tracing::{debug, info};

use crate::config::AppConfig;

pub fn forecast(config: &AppConfig, horizon: i64, language: Language) -> Result<()> {
    info!("Forecasting {} years ahead", horizon);
    let (store, bank) = config.load_models()?;

    let forecasts = bank
        .forecast_all(horizon)
        .context("Failed to compute forecasts")?;
    debug!("Forecasts computed for {} indicators", forecasts.iter().count());

    print!("{}", render_forecast_table(&store, &forecasts, resolve(language)));
    Ok(())
}

/// One block per indicator: localized title, then `year<TAB>value` rows.
pub fn render_forecast_table(
    store: &DataStore,
    forecasts: &ForecastSet,
    bundle: &LocaleBundle,
) -> String {
    let mut table = String::new();
    for (indicator, values) in forecasts.iter() {
        let series = store.series(indicator);
        let _ = writeln!(
            table,
            "{} ({})",
            bundle.indicator_title(indicator),
            bundle.legend_forecast
        );
        for (year, value) in series.forecast_periods(values.len()).zip(values) {
            let _ = writeln!(table, "  {}\t{:.4}", bundle.format_year(year), value);
        }
    }
    table
}
