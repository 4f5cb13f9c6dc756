//! Chart composition: historical series plus forecast, labelled for one language.

use common::{ChartSpec, ChartStyle, Indicator, LocaleBundle, Trace};
use model::{DataStore, Series};
use tracing::trace;

use crate::forecast::ForecastSet;

/// Builds the chart for one indicator.
///
/// Forecast periods start right after the last historical period and run for
/// `forecast.len()` years.
pub fn compose(
    indicator: Indicator,
    historical: &Series,
    forecast: &[f64],
    bundle: &LocaleBundle,
    style: ChartStyle,
) -> ChartSpec {
    trace!(%indicator, %style, horizon = forecast.len(), "Composing chart");
    let mode = style.render_mode();
    let title = bundle.indicator_title(indicator);

    ChartSpec {
        indicator,
        title: title.to_string(),
        x_axis_title: bundle.x_axis_title.to_string(),
        y_axis_title: title.to_string(),
        historical: Trace {
            name: bundle.legend_historical.to_string(),
            mode,
            x: historical.periods().map(|year| bundle.format_year(year)).collect(),
            y: historical.values().to_vec(),
        },
        forecast: Trace {
            name: bundle.legend_forecast.to_string(),
            mode,
            x: historical
                .forecast_periods(forecast.len())
                .map(|year| bundle.format_year(year))
                .collect(),
            y: forecast.to_vec(),
        },
    }
}

/// Builds one chart per indicator, in presentation order.
pub fn compose_all(
    store: &DataStore,
    forecasts: &ForecastSet,
    bundle: &LocaleBundle,
    style: ChartStyle,
) -> Vec<ChartSpec> {
    forecasts
        .iter()
        .map(|(indicator, forecast)| {
            compose(indicator, store.series(indicator), forecast, bundle, style)
        })
        .collect()
}
