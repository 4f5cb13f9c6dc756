//! CSV ingestion and gap filling.
//!
//! The upstream table is keyed by `Year` and holds one column per indicator.
//! Rows are sorted by year and each indicator column is linearly interpolated
//! before any model sees it.

use common::Indicator;
use polars::prelude::{
    col, CsvReadOptions, DataFrame, DataType, Expr, InterpolationMethod, IntoLazy, SerReader,
    SortMultipleOptions,
};
use std::path::Path;
use tracing::{debug, trace};

use crate::error::{DataError, Result};
use crate::series::Series;
use crate::store::DataStore;

pub const YEAR_COLUMN: &str = "Year";

/// Columns the upstream table must provide.
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    std::iter::once(YEAR_COLUMN).chain(Indicator::ALL.into_iter().map(Indicator::column_name))
}

/// Reads the raw CSV into a DataFrame.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    debug!("Reading CSV from {}", path.display());
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    trace!("Read {} rows", frame.height());
    Ok(frame)
}

/// Sorts by year and interpolates every indicator column.
pub fn interpolate(frame: DataFrame) -> Result<DataFrame> {
    for name in required_columns() {
        if frame.column(name).is_err() {
            return Err(DataError::MissingColumn(name.to_string()));
        }
    }

    let mut columns: Vec<Expr> = vec![col(YEAR_COLUMN).cast(DataType::Int32)];
    columns.extend(Indicator::ALL.iter().map(|indicator| {
        col(indicator.column_name())
            .cast(DataType::Float64)
            .interpolate(InterpolationMethod::Linear)
    }));

    let interpolated = frame
        .lazy()
        .sort([YEAR_COLUMN], SortMultipleOptions::default())
        .select(columns)
        .collect()?;
    Ok(interpolated)
}

/// Turns an interpolated frame into a [`DataStore`].
pub fn store_from_frame(frame: DataFrame) -> Result<DataStore> {
    let frame = interpolate(frame)?;

    let years = frame.column(YEAR_COLUMN)?.as_materialized_series().i32()?;
    let periods: Vec<i32> = years
        .into_iter()
        .enumerate()
        .map(|(row, year)| year.ok_or(DataError::MissingYear(row)))
        .collect::<Result<_>>()?;

    let series = Indicator::ALL
        .iter()
        .map(|indicator| {
            let values = frame
                .column(indicator.column_name())?
                .as_materialized_series()
                .f64()?;
            let observed: Vec<Option<f64>> = values.into_iter().collect();
            Series::from_observations(*indicator, &periods, &observed)
        })
        .collect::<Result<Vec<_>>>()?;

    DataStore::from_series(series)
}
