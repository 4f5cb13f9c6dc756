use common::Indicator;
use polars::prelude::PolarsError;
use thiserror::Error;
use tracing::error;

/// Error types raised while loading historical data
#[derive(Error, Debug)]
pub enum DataError {
    /// The upstream table lacks a required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The year column holds a null entry
    #[error("Missing year at row {0}")]
    MissingYear(usize),

    /// Periods are not strictly increasing by one year
    #[error("Non-contiguous periods for {indicator}: {previous} followed by {next}")]
    NonContiguous {
        indicator: Indicator,
        previous: i32,
        next: i32,
    },

    /// Periods and values have different lengths
    #[error("Length mismatch for {indicator}: {periods} periods, {values} values")]
    LengthMismatch {
        indicator: Indicator,
        periods: usize,
        values: usize,
    },

    /// The indicator has no observed value at all
    #[error("No observations for indicator {0}")]
    NoObservations(Indicator),

    /// A value is NaN or infinite
    #[error("Non-finite value for {indicator} in {period}")]
    NonFinite { indicator: Indicator, period: i32 },

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),
}

impl From<PolarsError> for DataError {
    fn from(error: PolarsError) -> Self {
        let data_error = match error {
            PolarsError::ColumnNotFound(name) => DataError::MissingColumn(name.to_string()),
            other => DataError::DataFrame(other.to_string()),
        };
        error!(?data_error, "DataFrame error while loading data");
        data_error
    }
}

/// Type alias for Result with DataError
pub type Result<T> = std::result::Result<T, DataError>;
