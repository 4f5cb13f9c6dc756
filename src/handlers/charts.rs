use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{figure_json, ApiResponse, ChartSpec, ChartStyle, Language};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, trace};

use super::{dashboard_error, ApiError};
use crate::controller::DashboardError;
use crate::schemas::{AppState, CachedData, ChartsQuery, ErrorResponse};

/// Parses the selectors of a chart request, applying UI defaults for absent ones.
fn selection(query: &ChartsQuery) -> Result<(i64, Language, ChartStyle), ApiError> {
    let language = query
        .language()
        .parse::<Language>()
        .map_err(|e| dashboard_error(DashboardError::from(e)))?;
    let style = query
        .style()
        .parse::<ChartStyle>()
        .map_err(|e| dashboard_error(DashboardError::from(e)))?;
    Ok((query.horizon(), language, style))
}

/// Charts for the current selection, from cache when possible.
async fn charts_for(
    state: &AppState,
    horizon: i64,
    language: Language,
    style: ChartStyle,
) -> Result<Arc<Vec<ChartSpec>>, ApiError> {
    let cache_key = format!("charts_{}_{}_{}", horizon, language, style);

    if let Some(CachedData::Charts(charts)) = state.cache.get(&cache_key).await {
        trace!("Charts served from cache: {}", cache_key);
        return Ok(charts);
    }

    let dashboard = Arc::clone(&state.dashboard);
    let charts = tokio::task::spawn_blocking(move || dashboard.refresh_charts(horizon, language, style))
        .await
        .map_err(|e| {
            error!("Chart refresh task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Chart refresh task failed", "FORECAST_ERROR")),
            )
        })?
        .map_err(dashboard_error)?;

    let charts = Arc::new(charts);
    state
        .cache
        .insert(cache_key, CachedData::Charts(Arc::clone(&charts)))
        .await;
    Ok(charts)
}

/// Get the four indicator charts for a horizon, language and chart style
#[utoipa::path(
    get,
    path = "/api/v1/charts",
    tag = "dashboard",
    params(ChartsQuery),
    responses(
        (status = 200, description = "Charts computed successfully", body = ApiResponse<Vec<ChartSpec>>),
        (status = 400, description = "Invalid horizon or selector", body = ErrorResponse),
        (status = 500, description = "Forecast failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_charts(
    Valid(Query(query)): Valid<Query<ChartsQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ChartSpec>>>, ApiError> {
    let (horizon, language, style) = selection(&query)?;
    debug!("Refreshing charts - horizon: {}, language: {}, style: {}", horizon, language, style);

    let charts = charts_for(&state, horizon, language, style).await?;
    info!("Returning {} charts", charts.len());

    Ok(Json(ApiResponse::ok(
        charts.as_ref().clone(),
        "Charts computed successfully",
    )))
}

/// Get the four indicator charts as plotly figures
#[utoipa::path(
    get,
    path = "/api/v1/figures",
    tag = "dashboard",
    params(ChartsQuery),
    responses(
        (status = 200, description = "Figures computed successfully", body = ApiResponse<Vec<serde_json::Value>>),
        (status = 400, description = "Invalid horizon or selector", body = ErrorResponse),
        (status = 500, description = "Forecast failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_figures(
    Valid(Query(query)): Valid<Query<ChartsQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<serde_json::Value>>>, ApiError> {
    let (horizon, language, style) = selection(&query)?;
    let cache_key = format!("figures_{}_{}_{}", horizon, language, style);

    if let Some(CachedData::Figures(figures)) = state.cache.get(&cache_key).await {
        trace!("Figures served from cache: {}", cache_key);
        return Ok(Json(ApiResponse::ok(
            figures.as_ref().clone(),
            "Figures retrieved from cache",
        )));
    }

    let charts = charts_for(&state, horizon, language, style).await?;
    let figures = charts
        .iter()
        .map(figure_json)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            error!("Failed to serialize figures: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to serialize figures", "FORECAST_ERROR")),
            )
        })?;

    let figures = Arc::new(figures);
    state
        .cache
        .insert(cache_key, CachedData::Figures(Arc::clone(&figures)))
        .await;

    Ok(Json(ApiResponse::ok(
        figures.as_ref().clone(),
        "Figures computed successfully",
    )))
}
