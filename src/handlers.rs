pub mod charts;
pub mod dashboard;
pub mod health;
pub mod layout;
pub mod models;

use axum::{http::StatusCode, response::Json};
use compute::error::ComputeError;
use tracing::{error, warn};

use crate::controller::DashboardError;
use crate::schemas::ErrorResponse;

/// Error half of every JSON handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Maps a reaction rule failure to a status code and error body.
pub fn dashboard_error(err: DashboardError) -> ApiError {
    let (status, code) = match &err {
        DashboardError::Selector(_) => (StatusCode::BAD_REQUEST, "INVALID_SELECTOR"),
        DashboardError::Compute(ComputeError::InvalidHorizon(_)) => {
            (StatusCode::BAD_REQUEST, "INVALID_HORIZON")
        }
        DashboardError::Compute(_) => (StatusCode::INTERNAL_SERVER_ERROR, "FORECAST_ERROR"),
    };

    if status.is_server_error() {
        error!("Dashboard refresh failed: {}", err);
    } else {
        warn!("Rejected dashboard request: {}", err);
    }

    (status, Json(ErrorResponse::new(err.to_string(), code)))
}
