use axum::{extract::Query, response::Json};
use common::{ApiResponse, Language, LayoutSpec};
use tracing::{debug, instrument};

use super::{dashboard_error, ApiError};
use crate::controller::{language_layout, DashboardError};
use crate::schemas::{ErrorResponse, LayoutQuery, DEFAULT_LANGUAGE};

/// Get the page title, text direction, slider label and chart style options for a language
#[utoipa::path(
    get,
    path = "/api/v1/layout",
    tag = "dashboard",
    params(LayoutQuery),
    responses(
        (status = 200, description = "Layout resolved successfully", body = ApiResponse<LayoutSpec>),
        (status = 400, description = "Unknown language", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_layout(
    Query(query): Query<LayoutQuery>,
) -> Result<Json<ApiResponse<LayoutSpec>>, ApiError> {
    let language = match query.language.as_deref() {
        Some(token) => token
            .parse::<Language>()
            .map_err(|e| dashboard_error(DashboardError::from(e)))?,
        None => DEFAULT_LANGUAGE,
    };
    debug!("Resolving layout for language: {}", language);

    Ok(Json(ApiResponse::ok(
        language_layout(language),
        "Layout resolved successfully",
    )))
}
