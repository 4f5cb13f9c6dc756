//! Synthetic data stores for compute tests.

use common::Indicator;
use model::{DataStore, Series};

/// Number of years in [`sample_store`].
pub const SAMPLE_YEARS: usize = 33;

/// Deterministic indicator history ending at `last_year`.
pub fn sample_store(last_year: i32) -> DataStore {
    let start = last_year - SAMPLE_YEARS as i32 + 1;
    let series = Indicator::ALL.into_iter().map(|indicator| {
        let values = (0..SAMPLE_YEARS)
            .map(|i| sample_value(indicator, i as f64))
            .collect();
        Series::from_start(indicator, start, values).expect("synthetic series is valid")
    });
    DataStore::from_series(series).expect("synthetic store is complete")
}

/// Store whose series are too short for the default order search.
pub fn short_store() -> DataStore {
    let series = Indicator::ALL.into_iter().map(|indicator| {
        Series::from_start(indicator, 2018, vec![1.0, 2.0, 3.0, 4.0, 5.0])
            .expect("synthetic series is valid")
    });
    DataStore::from_series(series).expect("synthetic store is complete")
}

fn sample_value(indicator: Indicator, t: f64) -> f64 {
    match indicator {
        Indicator::Gdp => 2.0e10 + 1.5e9 * t + 8.0e8 * (t * 0.8).sin(),
        Indicator::GdpPerCapita => 9000.0 + 350.0 * t + 400.0 * (t * 0.6).cos(),
        Indicator::Inflation => 2.5 + 1.8 * (t * 0.9).sin() + 0.4 * (t * 2.3).cos(),
        Indicator::AdjustedNetNationalIncome => 1.5e10 + 1.1e9 * t + 6.0e8 * (t * 0.7).cos(),
    }
}
