//! Reaction rules behind the dashboard.
//!
//! The page has three inputs: language, chart style and forecast horizon.
//! Changing the language re-renders the page chrome ([`language_layout`]);
//! changing any input re-renders the four charts
//! ([`Dashboard::refresh_charts`]). Both rules are pure: the only state they
//! read is the immutable data store and the fitted models.

use common::{resolve, ChartSpec, ChartStyle, Language, LayoutSpec, LayoutStyle, SelectorError};
use compute::chart::compose_all;
use compute::error::ComputeError;
use compute::forecast::ForecastEngine;
use model::DataStore;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors a reaction rule can report back to the page.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Selector(#[from] SelectorError),
    #[error(transparent)]
    Compute(#[from] ComputeError),
}

/// Page chrome for a language: title, text direction, slider label and style options.
pub fn language_layout(language: Language) -> LayoutSpec {
    let bundle = resolve(language);
    LayoutSpec {
        main_title: bundle.main_title.to_string(),
        layout_style: LayoutStyle {
            direction: bundle.direction,
            background_color: bundle.background_color.to_string(),
        },
        slider_label: bundle.slider_label.to_string(),
        style_options: bundle.style_options(),
    }
}

/// Historical data plus the forecast engine, shared by every request.
pub struct Dashboard {
    store: Arc<DataStore>,
    engine: Arc<dyn ForecastEngine>,
}

impl Dashboard {
    pub fn new(store: Arc<DataStore>, engine: Arc<dyn ForecastEngine>) -> Self {
        Self { store, engine }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Forecasts every indicator `horizon` years ahead and composes one chart each.
    #[instrument(skip(self))]
    pub fn refresh_charts(
        &self,
        horizon: i64,
        language: Language,
        style: ChartStyle,
    ) -> Result<Vec<ChartSpec>, DashboardError> {
        let bundle = resolve(language);
        let forecasts = self.engine.forecast_all(horizon)?;
        let charts = compose_all(&self.store, &forecasts, bundle, style);
        debug!(charts = charts.len(), "Charts refreshed");
        Ok(charts)
    }
}
