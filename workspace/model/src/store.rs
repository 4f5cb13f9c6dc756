use common::Indicator;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::error::{DataError, Result};
use crate::ingest;
use crate::series::Series;

/// Historical series for every indicator, indexed by [`Indicator`].
#[derive(Debug, Clone, PartialEq)]
pub struct DataStore {
    series: [Series; 4],
}

impl DataStore {
    /// Builds a store from one series per indicator, in any order.
    ///
    /// A later series for the same indicator replaces an earlier one.
    pub fn from_series(series: impl IntoIterator<Item = Series>) -> Result<Self> {
        let mut slots: [Option<Series>; 4] = Default::default();
        for entry in series {
            let index = entry.indicator().index();
            slots[index] = Some(entry);
        }

        let [gdp, gdp_per_capita, inflation, anni] = slots;
        let take = |slot: Option<Series>, indicator| slot.ok_or(DataError::NoObservations(indicator));
        Ok(Self {
            series: [
                take(gdp, Indicator::Gdp)?,
                take(gdp_per_capita, Indicator::GdpPerCapita)?,
                take(inflation, Indicator::Inflation)?,
                take(anni, Indicator::AdjustedNetNationalIncome)?,
            ],
        })
    }

    /// Loads and interpolates the upstream CSV.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let frame = ingest::read_csv(path.as_ref())?;
        let store = ingest::store_from_frame(frame)?;
        info!("Loaded historical data for {} indicators", Indicator::ALL.len());
        for series in store.iter() {
            debug!(
                indicator = %series.indicator(),
                first = series.first_period(),
                last = series.last_period(),
                "Series loaded"
            );
        }
        Ok(store)
    }

    pub fn series(&self, indicator: Indicator) -> &Series {
        &self.series[indicator.index()]
    }

    /// Series in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }
}
