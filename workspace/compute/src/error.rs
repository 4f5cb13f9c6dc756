use common::Indicator;
use thiserror::Error;

/// Reasons a model cannot be fitted to a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// The series is shorter than the order search needs
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// The series holds NaN or infinite values
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Every candidate order was rejected
    #[error("No candidate ARIMA order could be fitted")]
    NoCandidate,
}

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// A model failed to fit at startup
    #[error("Failed to fit model for {indicator}: {source}")]
    Fit {
        indicator: Indicator,
        #[source]
        source: FitError,
    },

    /// Horizon must be a positive number of periods
    #[error("Invalid horizon: {0} (must be positive)")]
    InvalidHorizon(i64),

    /// Error from forecast computation
    #[error("Forecast computation error: {0}")]
    ForecastComputation(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
