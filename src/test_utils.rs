use crate::config::{build_app_state, AppConfig};
use crate::controller::Dashboard;
use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use common::Indicator;
use compute::bank::ModelBank;
use compute::{default_engine, default_model_bank};
use model::{DataStore, Series};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// First year of the synthetic history
pub const FIRST_YEAR: i32 = 1990;
/// Last year of the synthetic history
pub const LAST_YEAR: i32 = 2022;

fn sample_value(indicator: Indicator, year: i32) -> f64 {
    let t = f64::from(year - FIRST_YEAR);
    match indicator {
        Indicator::Gdp => 2.0e10 + 1.5e9 * t + 8.0e8 * (t * 0.8).sin(),
        Indicator::GdpPerCapita => 9000.0 + 350.0 * t + 400.0 * (t * 0.6).cos(),
        Indicator::Inflation => 2.5 + 1.8 * (t * 0.9).sin() + 0.4 * (t * 2.3).cos(),
        Indicator::AdjustedNetNationalIncome => 1.5e10 + 1.1e9 * t + 6.0e8 * (t * 0.7).cos(),
    }
}

/// Complete synthetic history from 1990 to 2022.
pub fn sample_store() -> DataStore {
    let series = Indicator::ALL.into_iter().map(|indicator| {
        let values = (FIRST_YEAR..=LAST_YEAR)
            .map(|year| sample_value(indicator, year))
            .collect();
        Series::from_start(indicator, FIRST_YEAR, values).expect("Failed to build sample series")
    });
    DataStore::from_series(series).expect("Failed to build sample store")
}

pub fn sample_bank(store: &DataStore) -> ModelBank {
    default_model_bank(store).expect("Failed to fit sample models")
}

pub fn sample_dashboard() -> Dashboard {
    let store = sample_store();
    let engine = default_engine(sample_bank(&store));
    Dashboard::new(Arc::new(store), Arc::new(engine))
}

/// Writes the synthetic history as CSV, with gaps the loader has to fill.
///
/// Adjusted net national income starts in 1992, inflation misses 2000 and
/// GDP per capita misses the last year.
pub fn write_sample_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temporary CSV");
    writeln!(file, "Year,GDP,GDP_per_capita,Inflation,Adjusted_Net_National_Income")
        .expect("Failed to write CSV header");

    for year in FIRST_YEAR..=LAST_YEAR {
        let cell = |indicator: Indicator, missing: bool| {
            if missing {
                String::new()
            } else {
                sample_value(indicator, year).to_string()
            }
        };
        writeln!(
            file,
            "{},{},{},{},{}",
            year,
            cell(Indicator::Gdp, false),
            cell(Indicator::GdpPerCapita, year == LAST_YEAR),
            cell(Indicator::Inflation, year == 2000),
            cell(Indicator::AdjustedNetNationalIncome, year < 1992),
        )
        .expect("Failed to write CSV row");
    }
    file.flush().expect("Failed to flush CSV");
    file
}

/// Create AppState for testing
pub fn setup_test_app_state() -> AppState {
    let store = sample_store();
    let bank = sample_bank(&store);
    build_app_state(store, bank, &AppConfig::default())
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG, defaulting to WARN.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app for testing
pub fn setup_test_app() -> Router {
    let _guard = init_test_tracing();
    create_router(setup_test_app_state())
}
