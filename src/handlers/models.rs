use axum::{extract::State, response::Json};
use common::ApiResponse;
use tracing::instrument;

use crate::schemas::{AppState, ModelResponse};

/// Get the forecasting model selected for each indicator
#[utoipa::path(
    get,
    path = "/api/v1/models",
    tag = "models",
    responses(
        (status = 200, description = "Models retrieved successfully", body = ApiResponse<Vec<ModelResponse>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_models(State(state): State<AppState>) -> Json<ApiResponse<Vec<ModelResponse>>> {
    Json(ApiResponse::ok(
        state.models.as_ref().clone(),
        "Models retrieved successfully",
    ))
}
